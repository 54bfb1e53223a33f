//! Error types for the JSONL store.

use seed_core::StoreError;
use thiserror::Error;

/// Errors that can occur while writing JSONL files.
#[derive(Error, Debug)]
pub enum JsonlStoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output path exists but is not a directory.
    #[error("Output path is not a directory: {0}")]
    NotADirectory(String),
}

impl From<JsonlStoreError> for StoreError {
    fn from(error: JsonlStoreError) -> Self {
        match error {
            JsonlStoreError::Io(e) => StoreError::Io(e),
            other => StoreError::Backend(other.to_string()),
        }
    }
}
