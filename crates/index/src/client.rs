//! Index lookup over HTTP.

use crate::error::{IndexError, IndexResult};
use crate::model::Package;
use async_trait::async_trait;
use tracing::instrument;

/// Metadata lookup capability.
///
/// Implementations are shared across requests behind an `Arc`, so they must
/// be `Send + Sync`. Lookups yield a package document, a domain-level
/// not-found, or a transient failure; callers decide how each surfaces.
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Fetch a package's metadata document.
    ///
    /// `owner` and `name` must already be validated; the client lower-cases
    /// them before use as index path segments.
    async fn package(&self, owner: &str, name: &str) -> IndexResult<Package>;
}

/// HTTP client for a statically generated JSON index.
pub struct HttpIndexClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIndexClient {
    /// Create a client rooted at `base_url` (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IndexClient for HttpIndexClient {
    #[instrument(skip(self))]
    async fn package(&self, owner: &str, name: &str) -> IndexResult<Package> {
        let url = format!(
            "{}/{}/{}/metadata.json",
            self.base_url,
            owner.to_lowercase(),
            name.to_lowercase()
        );
        tracing::debug!(url = %url, "fetching package metadata");
        let resp = self.http.get(&url).send().await?;
        match resp.status().as_u16() {
            200 => {
                let body = resp.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            404 => Err(IndexError::PackageNotFound {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            status => {
                tracing::error!(url = %url, status, "index fetch failed");
                Err(IndexError::Upstream { status })
            }
        }
    }
}
