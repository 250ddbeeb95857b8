//! In-process test server harness.

use super::index::{self, StubIndexClient};
use axum::Router;
use bytes::Bytes;
use ladle_core::config::{AppConfig, CdnConfig};
use ladle_index::Package;
use ladle_server::{AppState, create_router};
use ladle_storage::{FilesystemBackend, ObjectStore};
use std::sync::Arc;
use tempfile::TempDir;

/// A router wired to a stub index and a tempdir-backed filesystem store.
pub struct TestServer {
    pub router: Router,
    pub storage: Arc<dyn ObjectStore>,
    _temp: TempDir,
}

impl TestServer {
    /// Server with the standard fixture packages and no CDN.
    #[allow(dead_code)]
    pub async fn new() -> Self {
        Self::build(
            StubIndexClient::new([index::lean4_package(), index::scopeless_package()]),
            None,
        )
        .await
    }

    /// Server whose config routes deliveries through a CDN redirect.
    #[allow(dead_code)]
    pub async fn with_cdn(endpoint: &str) -> Self {
        Self::build(
            StubIndexClient::new([index::lean4_package(), index::scopeless_package()]),
            Some(endpoint.to_string()),
        )
        .await
    }

    /// Server whose index lookups always fail with an upstream status.
    #[allow(dead_code)]
    pub async fn with_failing_index(status: u16) -> Self {
        Self::build(StubIndexClient::failing(status), None).await
    }

    /// Server with an explicit package list.
    #[allow(dead_code)]
    pub async fn with_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self::build(StubIndexClient::new(packages), None).await
    }

    async fn build(index: StubIndexClient, cdn: Option<String>) -> Self {
        let temp = TempDir::new().unwrap();
        let mut config = AppConfig::for_testing(temp.path().to_path_buf());
        config.cdn = cdn.map(|endpoint| CdnConfig { endpoint });

        let storage: Arc<dyn ObjectStore> =
            Arc::new(FilesystemBackend::new(temp.path()).await.unwrap());
        let state = AppState::new(config, Arc::new(index), storage.clone());
        Self {
            router: create_router(state),
            storage,
            _temp: temp,
        }
    }

    /// Seed an object at a raw storage key.
    #[allow(dead_code)]
    pub async fn seed(&self, key: &str, body: &[u8]) {
        self.storage
            .put(key, Bytes::copy_from_slice(body))
            .await
            .unwrap();
    }
}
