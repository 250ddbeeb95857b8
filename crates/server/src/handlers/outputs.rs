//! Raw build-output log retrieval.

use super::{Validator, deliver};
use crate::context::RequestCtx;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use ladle_core::{StorageKey, Toolchain, ident};
use serde::Deserialize;

/// Query parameters for build-output retrieval.
#[derive(Debug, Default, Deserialize)]
pub struct OutputsQuery {
    /// Platform triple filter; empty means unspecified.
    pub platform: Option<String>,
    /// Toolchain filter, normalized before use as a path segment.
    pub toolchain: Option<String>,
    /// Boolean-by-presence dev flag.
    pub dev: Option<String>,
}

/// GET /packages/{owner}/{name}/revisions/{rev}/outputs[.jsonl] - Deliver
/// the raw build-output log for a revision, optionally filtered by platform
/// and toolchain.
///
/// The final path segment is routed as a parameter since the `.jsonl`
/// suffix is optional; anything other than `outputs` under a revision is an
/// unknown route.
pub async fn get_outputs(
    State(state): State<AppState>,
    Path((owner, name, rev, file)): Path<(String, String, String, String)>,
    Query(query): Query<OutputsQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let ctx = RequestCtx::new(&headers, query.dev.is_some());

    let stem = ident::trim_ext("jsonl", &file).unwrap_or("");
    if stem != "outputs" {
        return Err(ApiError::NotFound("no such route".to_string()));
    }

    let mut v = Validator::default();
    v.check(ident::validate_owner(&owner));
    v.check(ident::validate_name(&name));
    v.check(ident::validate_revision(&rev));
    let platform = v
        .check(ident::validate_platform(query.platform.as_deref().unwrap_or("")))
        .flatten();
    let toolchain = v
        .check(Toolchain::normalize(query.toolchain.as_deref().unwrap_or("")))
        .flatten();
    v.finish()?;

    let key = StorageKey::output(
        ctx.dev,
        &owner.to_lowercase(),
        &name.to_lowercase(),
        &rev,
        platform,
        toolchain.as_ref(),
    );
    deliver(&state, &key).await
}
