//! API error types.
//!
//! Every stage of the resolution pipeline returns a tagged error; this
//! module is the single adapter translating the final outcome into an HTTP
//! response. The wire body is `{"error": {"status": <int>, "message":
//! <string>}}` with a matching status code. Backend detail (index URLs,
//! bucket names, SDK error text) is logged server-side and never reaches
//! the client.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use ladle_index::IndexError;
use ladle_storage::StorageError;
use serde::Serialize;

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    status: u16,
    message: String,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One message per failing field; all are reported, not just the first.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("method not allowed; can only GET")]
    MethodNotAllowed,

    #[error("{0}")]
    NotFound(String),

    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Index(e) => match e {
                IndexError::PackageNotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Storage(e) => match e {
                StorageError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    ///
    /// Expected outcomes (validation, not-found) carry their own messages;
    /// upstream and internal failures collapse to an opaque one.
    fn client_message(&self) -> String {
        match self {
            Self::Index(IndexError::PackageNotFound { .. }) => self.to_string(),
            Self::Index(_) => "failed to retrieve package data from index".to_string(),
            Self::Storage(StorageError::NotFound(_)) => "object not found".to_string(),
            Self::Storage(_) | Self::Internal(_) => "internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Validation and not-found are expected, user-facing outcomes;
        // only backend failures are errors of concern.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                status: status.as_u16(),
                message: self.client_message(),
            },
        };
        let body = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":{"status":500,"message":"internal server error"}}"#.to_string()
        });

        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            body,
        )
            .into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, header::HeaderValue::from_static("GET"));
        }
        response
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
