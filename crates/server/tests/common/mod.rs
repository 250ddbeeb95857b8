//! Shared test utilities.

pub mod index;
pub mod server;

pub use server::TestServer;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

/// Issue a request against an in-process router and collect the response.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub async fn request(
    router: &axum::Router,
    method: &str,
    uri: &str,
) -> (StatusCode, axum::http::HeaderMap, bytes::Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

/// GET a URI and parse the response body as JSON (null when empty).
#[allow(dead_code)]
pub async fn get_json(router: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _headers, body) = request(router, "GET", uri).await;
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
