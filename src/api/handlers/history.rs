//! Exchange history handlers
//!
//! Plain CRUD over the records the engine produces.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::server::AppState;
use crate::error::CourierError;
use crate::models::ExchangeRecord;

/// Most-recent records returned by the history listing
const HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub success: bool,
    pub history: Vec<ExchangeRecord>,
}

#[derive(Debug, Serialize)]
pub struct HistoryRecordResponse {
    pub success: bool,
    pub record: ExchangeRecord,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

/// List the most recent exchanges, newest first
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CourierError> {
    let history = state.store.list_recent(HISTORY_LIMIT).await?;

    Ok(Json(HistoryListResponse {
        success: true,
        history,
    }))
}

/// Get a single exchange by id
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CourierError> {
    match state.store.get_by_id(id).await? {
        Some(record) => Ok(Json(HistoryRecordResponse {
            success: true,
            record,
        })),
        None => Err(CourierError::NotFound(format!(
            "Exchange with id {} not found",
            id
        ))),
    }
}

/// Delete a single exchange; deleting an absent id is still a success
pub async fn delete_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, CourierError> {
    let deleted = state.store.delete_by_id(id).await?;

    if deleted {
        info!(id = id, "Deleted exchange record");
    }

    Ok(Json(DeletedResponse {
        success: true,
        deleted: None,
    }))
}

/// Delete the entire history
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, CourierError> {
    let deleted = state.store.delete_all().await?;

    info!(deleted = deleted, "Cleared exchange history");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: Some(deleted),
    }))
}
