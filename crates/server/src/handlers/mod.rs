//! Request handlers for the resolution API.

pub mod artifacts;
pub mod barrels;
pub mod outputs;
pub mod packages;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use ladle_core::{Namespace, StorageKey};
use ladle_storage::StorageError;

/// Accumulates field-level validation failures so a 400 can report every
/// offending field, not just the first.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    /// Record the outcome of one field validation, keeping the normalized
    /// value on success.
    pub fn check<T>(&mut self, result: ladle_core::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err.to_string());
                None
            }
        }
    }

    /// Fail with a 400 listing every recorded error, or pass.
    pub fn finish(self) -> ApiResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// Recover a value checked by a [`Validator`] after `finish` passed.
pub fn validated<T>(value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::Internal("validated value missing".to_string()))
}

/// Method fallback for GET-only routes: 405 with an `Allow` header.
/// (HEAD is routed to the GET handler by axum and gets its body stripped.)
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::debug!(method = %method, "method not allowed");
    ApiError::MethodNotAllowed
}

fn kind_name(kind: Namespace) -> &'static str {
    match kind {
        Namespace::Artifact => "artifact",
        Namespace::Barrel => "barrel",
        Namespace::Output => "build outputs",
    }
}

/// Deliver the object at `key`.
///
/// With a CDN configured this issues a 303 to the CDN-fronted URL; the
/// object's existence is the CDN's problem. Otherwise the object is fetched
/// from storage and streamed back with content headers, mapping a missing
/// object to a domain 404 and any other storage failure to an opaque 500.
pub async fn deliver(state: &AppState, key: &StorageKey) -> ApiResult<Response> {
    if let Some(cdn) = &state.config.cdn {
        let location = format!("{}/{}", cdn.endpoint.trim_end_matches('/'), key);
        tracing::debug!(location = %location, "redirecting to CDN");
        return Ok((StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response());
    }

    let object_key = key.to_string();
    let map_err = |err: StorageError| match err {
        StorageError::NotFound(_) => {
            ApiError::NotFound(format!("{} not found", kind_name(key.kind())))
        }
        other => ApiError::Storage(other),
    };

    tracing::debug!(key = %object_key, "streaming from storage");
    let meta = state.storage.head(&object_key).await.map_err(map_err)?;
    let stream = state.storage.get_stream(&object_key).await.map_err(map_err)?;
    let body = Body::from_stream(
        stream.map(|result| result.map_err(|e| std::io::Error::other(e.to_string()))),
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, key.kind().content_type().to_string()),
            (CONTENT_LENGTH, meta.size.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", key.filename()),
            ),
        ],
        body,
    )
        .into_response())
}

/// Router-level fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
