//! Package endpoints: metadata, build history, and package-scoped
//! barrel/artifact resolution.

use super::{Validator, deliver, validated};
use crate::context::RequestCtx;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use ladle_core::{BuildFilter, StorageKey, ident, match_build};
use serde::Deserialize;

/// Query parameters carrying only the dev flag.
///
/// `dev` is boolean-by-presence: any value, including empty, selects the
/// dev namespace.
#[derive(Debug, Default, Deserialize)]
pub struct DevQuery {
    pub dev: Option<String>,
}

/// Query parameters for barrel resolution.
#[derive(Debug, Default, Deserialize)]
pub struct BarrelQuery {
    /// Exact 40-hexit revision filter.
    pub rev: Option<String>,
    /// Toolchain filter, normalized before comparison.
    pub toolchain: Option<String>,
    /// Boolean-by-presence dev flag.
    pub dev: Option<String>,
}

/// GET /packages/{owner}/{name} - Package metadata document.
pub async fn get_package(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let _ctx = RequestCtx::new(&headers, false);
    let mut v = Validator::default();
    v.check(ident::validate_owner(&owner));
    v.check(ident::validate_name(&name));
    v.finish()?;

    let pkg = state.index.package(&owner, &name).await?;
    Ok(Json(pkg).into_response())
}

/// GET /packages/{owner}/{name}/builds - Build history.
pub async fn get_builds(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let _ctx = RequestCtx::new(&headers, false);
    let mut v = Validator::default();
    v.check(ident::validate_owner(&owner));
    v.check(ident::validate_name(&name));
    v.finish()?;

    let pkg = state.index.package(&owner, &name).await?;
    Ok(Json(serde_json::json!({ "builds": pkg.builds })).into_response())
}

/// GET /packages/{owner}/{name}/barrel?rev=&toolchain=&dev= - Resolve the
/// matching prebuilt archive for a package and deliver it.
pub async fn get_package_barrel(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    Query(query): Query<BarrelQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let ctx = RequestCtx::new(&headers, query.dev.is_some());

    let mut v = Validator::default();
    v.check(ident::validate_owner(&owner));
    v.check(ident::validate_name(&name));
    if let Some(rev) = &query.rev {
        v.check(ident::validate_revision(rev));
    }
    let filter = v.check(BuildFilter::new(query.rev.clone(), query.toolchain.as_deref()));
    v.finish()?;
    let filter = validated(filter)?;

    let pkg = state.index.package(&owner, &name).await?;
    let build = match_build(&pkg.builds, &filter).ok_or_else(|| {
        ApiError::NotFound(format!(
            "no build of '{owner}/{name}' with an archive matches the requested filters"
        ))
    })?;
    let hash = build
        .archive_hash()
        .ok_or_else(|| ApiError::Internal("matched build has no archive hash".to_string()))?;

    deliver(&state, &StorageKey::barrel(ctx.dev, hash)).await
}

/// GET /packages/{owner}/{name}/artifacts/{artifact} - Deliver an artifact
/// under the package's repository scope.
pub async fn get_package_artifact(
    State(state): State<AppState>,
    Path((owner, name, artifact)): Path<(String, String, String)>,
    Query(query): Query<DevQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let ctx = RequestCtx::new(&headers, query.dev.is_some());

    let mut v = Validator::default();
    v.check(ident::validate_owner(&owner));
    v.check(ident::validate_name(&name));
    let hash = v.check(ident::validate_artifact(&artifact));
    v.finish()?;
    let hash = validated(hash)?;

    let pkg = state.index.package(&owner, &name).await?;
    let (scope_owner, scope_repo) = pkg.artifact_scope().ok_or_else(|| {
        ApiError::NotFound(format!(
            "package '{owner}/{name}' has no resolvable repository scope"
        ))
    })?;

    deliver(
        &state,
        &StorageKey::artifact(ctx.dev, &scope_owner, &scope_repo, hash),
    )
    .await
}
