//! Route configuration.

use crate::handlers;
use crate::handlers::method_not_allowed;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the application router.
///
/// The resolution API is served at the root and mounted under `/api/v1`
/// and `/api/v0` for versioned clients. Every route is GET-only; other
/// methods fall through to a 405 with an `Allow` header.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/packages/{owner}/{name}",
            get(handlers::packages::get_package).fallback(method_not_allowed),
        )
        .route(
            "/packages/{owner}/{name}/builds",
            get(handlers::packages::get_builds).fallback(method_not_allowed),
        )
        .route(
            "/packages/{owner}/{name}/barrel",
            get(handlers::packages::get_package_barrel).fallback(method_not_allowed),
        )
        .route(
            "/packages/{owner}/{name}/artifacts/{artifact}",
            get(handlers::packages::get_package_artifact).fallback(method_not_allowed),
        )
        // The trailing segment is a parameter because axum doesn't support
        // /{param}.suffix patterns and the `.jsonl` suffix is optional.
        .route(
            "/packages/{owner}/{name}/revisions/{rev}/{outputs}",
            get(handlers::outputs::get_outputs).fallback(method_not_allowed),
        )
        .route(
            "/barrels/{barrel}",
            get(handlers::barrels::get_barrel).fallback(method_not_allowed),
        )
        .route(
            "/artifacts/{artifact}",
            get(handlers::artifacts::get_artifact).fallback(method_not_allowed),
        );

    let mut router = Router::new()
        .merge(api.clone())
        .nest("/api/v1", api.clone())
        .nest("/api/v0", api)
        .fallback(handlers::not_found);

    if state.config.server.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}
