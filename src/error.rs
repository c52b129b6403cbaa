use thiserror::Error;

/// Main error type for Legisgraph
#[derive(Error, Debug)]
pub enum LegisgraphError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph ingestion errors (upstream read failures, not per-record skips)
    #[error("Ingestion error: {0}")]
    Ingest(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using LegisgraphError
pub type Result<T> = std::result::Result<T, LegisgraphError>;
