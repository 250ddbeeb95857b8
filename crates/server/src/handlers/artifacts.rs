//! Direct artifact retrieval by content hash.

use super::{Validator, deliver, validated};
use crate::context::RequestCtx;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use ladle_core::{StorageKey, ident};
use serde::Deserialize;

/// Query parameters for direct artifact retrieval. The repository scope is
/// supplied explicitly since no package lookup is involved.
#[derive(Debug, Default, Deserialize)]
pub struct ArtifactQuery {
    /// Scope owner (required).
    pub owner: Option<String>,
    /// Scope repository (required).
    pub repo: Option<String>,
    /// Boolean-by-presence dev flag.
    pub dev: Option<String>,
}

/// GET /artifacts/{artifact}?owner=&repo= - Deliver an artifact addressed
/// by its 16-hexit hash (bare or with an `.art` suffix) under an explicit
/// owner/repo scope.
pub async fn get_artifact(
    State(state): State<AppState>,
    Path(artifact): Path<String>,
    Query(query): Query<ArtifactQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let ctx = RequestCtx::new(&headers, query.dev.is_some());

    let mut v = Validator::default();
    let hash = v.check(ident::validate_artifact(&artifact));
    // Missing scope parameters fail the same non-empty checks as malformed
    // ones, so all offending fields are reported together.
    let owner = query.owner.as_deref().unwrap_or("");
    let repo = query.repo.as_deref().unwrap_or("");
    v.check(ident::validate_owner(owner));
    v.check(ident::validate_name(repo));
    v.finish()?;
    let hash = validated(hash)?;

    deliver(
        &state,
        &StorageKey::artifact(ctx.dev, &owner.to_lowercase(), &repo.to_lowercase(), hash),
    )
    .await
}
