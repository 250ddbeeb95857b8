//! Application state shared across handlers.

use ladle_core::config::AppConfig;
use ladle_index::IndexClient;
use ladle_storage::ObjectStore;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only after startup; per-request data (dev flag,
/// filters) travels as explicit values, never through shared state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Package index client.
    pub index: Arc<dyn IndexClient>,
    /// Object storage backend.
    pub storage: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: AppConfig,
        index: Arc<dyn IndexClient>,
        storage: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            index,
            storage,
        }
    }
}
