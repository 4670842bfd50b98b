//! Courses API error types

use thiserror::Error;

/// Courses API error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog loading error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Course store error
    #[error("Store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for Courses API operations
pub type Result<T> = std::result::Result<T, Error>;
