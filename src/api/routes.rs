//! API route definitions

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use super::server::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probes
        .route("/", get(handlers::health::root))
        .route("/api/health", get(handlers::health::health_check))
        // Request execution
        .route("/api/request", post(handlers::request::execute_request))
        // Exchange history
        .route(
            "/api/history",
            get(handlers::history::list_history).delete(handlers::history::clear_history),
        )
        .route(
            "/api/history/:id",
            get(handlers::history::get_history).delete(handlers::history::delete_history),
        )
        .with_state(state)
}
