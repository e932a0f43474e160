//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Screens
        .route("/", get(handlers::index))
        .route("/pokemon", get(handlers::list))
        .route("/pokemon/reload", post(handlers::reload))
        .route("/pokemon/:id", get(handlers::details))
        // Operational
        .route("/stats", get(handlers::stats))
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
