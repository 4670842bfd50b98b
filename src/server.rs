//! HTTP server assembly
//!
//! [`ServerBuilder`] gathers configuration, the catalog and the course store,
//! loading whatever was not supplied explicitly. [`Server`] binds the
//! listener and serves the API until a shutdown signal arrives.

use crate::api::build_app;
use crate::catalog::{Catalog, CatalogState};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::store::{self, CourseStore, LookupState};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Courses API server
pub struct Server {
    config: AppConfig,
    catalog: Arc<Catalog>,
    store: Arc<dyn CourseStore>,
}

impl Server {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Router serving every endpoint
    pub fn router(&self) -> Router {
        build_app(
            CatalogState {
                catalog: self.catalog.clone(),
            },
            LookupState {
                store: self.store.clone(),
            },
            &self.config.server.cors_origins,
        )
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
    }

    /// Serve until `signal` completes
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_addr();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind {}: {}", bind_addr, e)))?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            courses = self.catalog.len(),
            "Courses API listening at http://{}",
            local_addr
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("Courses API stopped");
        Ok(())
    }
}

/// Builder for Server
pub struct ServerBuilder {
    config: AppConfig,
    catalog: Option<Arc<Catalog>>,
    store: Option<Arc<dyn CourseStore>>,
}

impl ServerBuilder {
    /// Create a new builder with default config
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            catalog: None,
            store: None,
        }
    }

    /// Set the configuration
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Use an already loaded catalog
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Use an already opened course store
    pub fn store(mut self, store: Arc<dyn CourseStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the server, loading the catalog and connecting the store if needed
    pub async fn build(self) -> Result<Server> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(load_catalog(&self.config).await?),
        };

        let store = match self.store {
            Some(store) => store,
            None => store::connect(&self.config.store).await?,
        };

        Ok(Server {
            config: self.config,
            catalog,
            store,
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the configured catalog, falling back to the bundled one
pub async fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            Catalog::from_path(path).await?
        }
        None => Catalog::bundled()?,
    };
    tracing::info!(
        years = catalog.years().len(),
        courses = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCourseStore;
    use std::io::Write;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.store.url = store::MEMORY_STORE_URL.to_string();
        config
    }

    #[tokio::test]
    async fn test_build_with_defaults() {
        let server = ServerBuilder::new()
            .config(memory_config())
            .host("127.0.0.1")
            .port(0)
            .build()
            .await
            .unwrap();

        assert_eq!(server.catalog().len(), 32);
        assert_eq!(server.config().server.port, 0);
    }

    #[tokio::test]
    async fn test_build_with_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"core": [{{"description": "X", "tags": ["BSIS"]}}]}}]"#).unwrap();

        let mut config = memory_config();
        config.catalog.path = Some(file.path().to_path_buf());

        let server = ServerBuilder::new().config(config).build().await.unwrap();
        assert_eq!(server.catalog().len(), 1);
    }

    #[tokio::test]
    async fn test_build_with_bad_catalog_file() {
        let mut config = memory_config();
        config.catalog.path = Some("/nonexistent/courses.json".into());

        let result = ServerBuilder::new().config(config).build().await;
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[tokio::test]
    async fn test_serve_and_shutdown() {
        let server = ServerBuilder::new()
            .port(0)
            .catalog(Catalog::default())
            .store(Arc::new(MemoryCourseStore::default()))
            .build()
            .await
            .unwrap();

        server.serve_with_shutdown(async {}).await.unwrap();
    }
}
