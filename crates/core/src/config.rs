//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Package index configuration.
    pub index: IndexConfig,
    /// Object storage backend configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Optional CDN fronting the object store. When set, resolution
    /// endpoints redirect (303) to `{endpoint}/{key}` instead of proxying
    /// bytes through this process.
    #[serde(default)]
    pub cdn: Option<CdnConfig>,
}

impl AppConfig {
    /// Create a test configuration backed by a filesystem store.
    ///
    /// **For testing only.**
    pub fn for_testing(storage_path: PathBuf) -> Self {
        Self {
            server: ServerConfig::default(),
            index: IndexConfig {
                url: "http://localhost/index".to_string(),
            },
            storage: StorageConfig::Filesystem { path: storage_path },
            cdn: None,
        }
    }
}

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Enable per-request tracing via tower-http.
    #[serde(default)]
    pub enable_tracing: bool,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            enable_tracing: false,
        }
    }
}

/// Package index configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Base URL of the static JSON index. Package metadata is fetched from
    /// `{url}/{owner}/{name}/metadata.json` with lower-cased segments.
    pub url: String,
}

/// CDN configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Public endpoint fronting the object store, without a trailing slash.
    pub endpoint: String,
}

/// Storage backend configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Local filesystem storage.
    Filesystem {
        /// Root directory for storage.
        path: PathBuf,
    },
    /// S3-compatible storage.
    S3 {
        /// Bucket name.
        bucket: String,
        /// Optional endpoint URL (for R2, MinIO, etc.).
        endpoint: Option<String>,
        /// Region.
        region: Option<String>,
        /// Optional key prefix.
        prefix: Option<String>,
        /// Access key ID. Falls back to ambient AWS credentials if not set.
        /// Prefer env vars or IAM roles over storing secrets in config files.
        access_key_id: Option<String>,
        /// Secret access key. Same fallback and warning as `access_key_id`.
        secret_access_key: Option<String>,
        /// Force path-style URLs (`endpoint/bucket/key`). Required for MinIO
        /// and some S3-compatible services; AWS S3 requires virtual-hosted
        /// style (false).
        #[serde(default)]
        force_path_style: bool,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::Filesystem {
            path: PathBuf::from("./data/storage"),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            StorageConfig::S3 {
                access_key_id,
                secret_access_key,
                ..
            } => match (access_key_id.as_ref(), secret_access_key.as_ref()) {
                (Some(_), Some(_)) | (None, None) => Ok(()),
                _ => Err(
                    "s3 config requires both access_key_id and secret_access_key when either is set"
                        .to_string(),
                ),
            },
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_s3_credentials_rejected() {
        let config = StorageConfig::S3 {
            bucket: "bucket".to_string(),
            endpoint: None,
            region: None,
            prefix: None,
            access_key_id: Some("access".to_string()),
            secret_access_key: None,
            force_path_style: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn filesystem_config_always_valid() {
        assert!(StorageConfig::default().validate().is_ok());
    }
}
