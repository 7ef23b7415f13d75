use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or write a roster file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file type: {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
