//! Error types for the datacore library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datacore operations.
#[derive(Debug, Error)]
pub enum DataCoreError {
    /// Operation tag outside the supported set.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Error reading an input file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for datacore operations.
pub type Result<T> = std::result::Result<T, DataCoreError>;
