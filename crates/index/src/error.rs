//! Index error types.

use thiserror::Error;

/// Index lookup errors.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("package '{owner}/{name}' not found in index")]
    PackageNotFound { owner: String, name: String },

    #[error("index returned unexpected status {status}")]
    Upstream { status: u16 },

    #[error("index request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed index document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for index operations.
pub type IndexResult<T> = std::result::Result<T, IndexError>;
