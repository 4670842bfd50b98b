//! Courses API - read-only HTTP API over a course catalog
//!
//! Serves the bundled course catalog and a name lookup against the
//! persisted course store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use courses_api::{
    catalog::{backend_courses, courses_with_tag, query::BSIS, query::BSIT},
    config::AppConfig,
    server::load_catalog,
    store, ServerBuilder,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "courses-api")]
#[command(version)]
#[command(about = "Read-only HTTP API over a course catalog")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "COURSES_API_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Catalog JSON file (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Course store URL
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Load the catalog, connect the store and report
    Check,

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json);

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            catalog,
            database_url,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if catalog.is_some() {
                config.catalog.path = catalog;
            }
            if let Some(url) = database_url {
                config.store.url = url;
            }
            run_server(config).await?;
        }
        Commands::Check => {
            run_check(&config).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("courses_api={},tower_http={}", log_level, log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Starting Courses API");

    let server = ServerBuilder::new().config(config).build().await?;
    server.run().await?;

    Ok(())
}

async fn run_check(config: &AppConfig) -> Result<()> {
    println!("Courses API check");
    println!();

    println!("Checking catalog...");
    let catalog = load_catalog(config).await?;
    for (index, year) in catalog.years().iter().enumerate() {
        let count: usize = year.values().map(Vec::len).sum();
        println!("  Year {}: {} courses in {} groups", index + 1, count, year.len());
    }
    println!("  ✓ {} courses total", catalog.len());
    println!(
        "  BSIS: {}, BSIT: {}, backend: {}",
        courses_with_tag(&catalog, BSIS).len(),
        courses_with_tag(&catalog, BSIT).len(),
        backend_courses(&catalog).len()
    );

    println!();
    println!("Checking course store...");
    match store::connect(&config.store).await {
        Ok(_) => println!("  ✓ Connected to {}", config.store.url),
        Err(e) => println!("  ✗ Connection failed: {}", e),
    }

    Ok(())
}

fn show_config(config: Option<&AppConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}
