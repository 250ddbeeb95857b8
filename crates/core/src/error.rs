//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
///
/// Every variant carries a human-readable, field-level message suitable for
/// returning to the client verbatim. Nothing here wraps backend detail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid package owner: {0}")]
    InvalidOwner(String),

    #[error("invalid package name: {0}")]
    InvalidName(String),

    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    #[error("invalid artifact name: {0}")]
    InvalidArtifact(String),

    #[error("invalid barrel name: {0}")]
    InvalidBarrel(String),

    #[error("invalid toolchain: {0}")]
    InvalidToolchain(String),

    #[error("invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("invalid file extension: {0}")]
    InvalidExtension(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
