//! Request execution handler
//!
//! Orchestrates the engine and the record store: execute the described
//! request, persist the exchange, return the unified outcome. Execution
//! failures are data (HTTP 200 with `success:false`); only malformed input
//! is rejected with a client error, before any outbound call.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::server::AppState;
use crate::error::CourierError;
use crate::models::{NewExchange, RequestDescription, ResponseOutcome};

/// Response body for POST /api/request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub success: bool,
    pub response: ResponseOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execute a described request and record the exchange
pub async fn execute_request(
    State(state): State<AppState>,
    Json(description): Json<RequestDescription>,
) -> Result<impl IntoResponse, CourierError> {
    let report = state.engine.execute(&description).await?;

    // Response delivery takes priority over history persistence: a store
    // failure must not discard an already-obtained outcome.
    let exchange = NewExchange::from_execution(&description, report.outcome.clone());
    let history_id = match state.store.create(&exchange).await {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(error = %e, "Failed to persist exchange record");
            None
        }
    };

    info!(
        method = %description.method,
        url = %description.url,
        status = report.outcome.status,
        time_ms = report.outcome.time,
        "Executed request"
    );

    Ok(Json(ExecuteResponse {
        success: report.is_success(),
        response: report.outcome,
        history_id,
        error: report.error,
    }))
}
