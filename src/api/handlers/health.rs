//! Liveness endpoints

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "courier"
        })),
    )
}

/// Root liveness probe
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "service": "courier",
            "message": "HTTP request proxy and recorder"
        })),
    )
}
