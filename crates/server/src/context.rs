//! Per-request context.
//!
//! An explicit value built at the top of each handler and threaded through
//! the validation / matching / delivery pipeline as a parameter. Nothing
//! here is ambient or global.

use axum::http::HeaderMap;

/// Header selecting the dev (staging) storage namespace for this request.
pub const DEV_HEADER: &str = "x-ladle-dev";

/// Registry API version announced by the client.
pub const API_VERSION_HEADER: &str = "x-ladle-api-version";

/// Lake (package manager) registry API version announced by the client.
pub const LAKE_API_VERSION_HEADER: &str = "x-lake-registry-api-version";

/// Context flags attached to a single inbound request.
#[derive(Clone, Debug, Default)]
pub struct RequestCtx {
    /// Select the dev storage namespace. True when either the dev header is
    /// present or the request carried a `dev` query parameter (any value,
    /// including empty).
    pub dev: bool,
    /// Client's announced registry API version, if any.
    pub api_version: Option<String>,
    /// Client's announced Lake registry API version, if any.
    pub lake_api_version: Option<String>,
}

impl RequestCtx {
    /// Build the context from request headers and the `dev` query flag.
    pub fn new(headers: &HeaderMap, dev_query: bool) -> Self {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let ctx = Self {
            dev: dev_query || headers.contains_key(DEV_HEADER),
            api_version: header_str(API_VERSION_HEADER),
            lake_api_version: header_str(LAKE_API_VERSION_HEADER),
        };
        tracing::info!(
            ladle = ctx.api_version.as_deref().unwrap_or("-"),
            lake = ctx.lake_api_version.as_deref().unwrap_or("-"),
            dev = ctx.dev,
            "request context"
        );
        ctx
    }
}
