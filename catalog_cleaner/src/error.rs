//! Error types for the cleaning run.

use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Result type for cleaning operations
pub type CleanerResult<T> = Result<T, CleanerError>;

/// Error type for cleaning operations
#[derive(Debug, thiserror::Error)]
pub enum CleanerError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DataFrame error: {0}")]
    Frame(#[from] PolarsError),
}

impl CleanerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanerError::Io {
            path: path.into(),
            source,
        }
    }
}
