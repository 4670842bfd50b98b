//! Courses API configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main Courses API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Static catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Persisted course store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = any)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
        }
    }
}

/// Static catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file. The bundled catalog is used when unset.
    pub path: Option<PathBuf>,
}

/// Persisted course store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database URL (`sqlite:...`), or `memory:` for an empty in-process store
    pub url: String,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Create the `courses` table on connect if it is missing
    #[serde(default = "default_true")]
    pub create_schema: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://courses.db?mode=rwc".to_string(),
            max_connections: 5,
            create_schema: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Apply `PORT` and `DATABASE_URL` from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", port)))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            if !url.is_empty() {
                self.store.url = url;
            }
        }
        Ok(())
    }

    /// Address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
