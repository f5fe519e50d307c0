//! Route definitions and router construction.
//!
//! Axum 0.8 uses brace syntax for path parameters: `{namespace}`.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, put};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Mount point of the UI API.
pub const API_PREFIX: &str = "/api/_ui/v1";

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// UI API routes, relative to [`API_PREFIX`].
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(handlers::collections::list))
        .route(
            "/collections/{namespace}/{name}",
            get(handlers::collections::retrieve),
        )
        .route(
            "/collections/{namespace}/{name}/versions/{version}/certified",
            put(handlers::collections::set_certification),
        )
        .route("/collection-versions", get(handlers::versions::list))
        .route(
            "/collection-versions/{namespace}/{name}/{version}",
            get(handlers::versions::retrieve),
        )
        .route("/imports/collections", get(handlers::imports::list))
        .route(
            "/imports/collections/{task_id}",
            get(handlers::imports::retrieve),
        )
        .route("/me", get(handlers::me::me))
}

/// Create the main router: `/health` plus the UI API under [`API_PREFIX`].
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes().with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
