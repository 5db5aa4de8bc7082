//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{fetch, health, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/fetch", get(fetch))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
