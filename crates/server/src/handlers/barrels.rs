//! Direct barrel retrieval by content hash.

use super::{Validator, deliver, validated};
use crate::context::RequestCtx;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use ladle_core::{StorageKey, ident};

use super::packages::DevQuery;

/// GET /barrels/{barrel} - Deliver a barrel addressed by its 64-hexit hash
/// (bare or with a `.barrel` suffix).
pub async fn get_barrel(
    State(state): State<AppState>,
    Path(barrel): Path<String>,
    Query(query): Query<DevQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let ctx = RequestCtx::new(&headers, query.dev.is_some());

    let mut v = Validator::default();
    let hash = v.check(ident::validate_barrel(&barrel));
    v.finish()?;
    let hash = validated(hash)?;

    deliver(&state, &StorageKey::barrel(ctx.dev, hash)).await
}
