//! HTTP resolution server for the Ladle package registry.
//!
//! This crate provides the public read path:
//! - Package metadata and build-history lookup
//! - Barrel resolution by package + revision/toolchain filters
//! - Artifact, barrel, and raw build-output retrieval by hash
//!
//! Delivery is either a 303 redirect to a CDN-fronted URL or a direct proxy
//! stream from the object store, chosen by configuration.

pub mod context;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use context::RequestCtx;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
