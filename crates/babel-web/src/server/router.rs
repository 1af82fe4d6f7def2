use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        // Library endpoints
        .route("/api/search", post(handlers::search))
        .route("/api/browse", post(handlers::browse))
        .route("/api/random", get(handlers::random))
        .route("/api/count", get(handlers::count))
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
