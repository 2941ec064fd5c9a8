//! Password history handlers.

use axum::{Json, extract::State};

use crate::api::extractors::ApiJson;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, HistoryResponse, PasswordRequest};
use crate::error::Result;

/// List the history, newest first.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<HistoryResponse>> {
    let log = state.history.snapshot().await;
    Json(ApiResponse::success(HistoryResponse::new(&log, None)))
}

/// Record a copied password.
pub async fn record(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PasswordRequest>,
) -> Result<Json<ApiResponse<HistoryResponse>>> {
    let persisted = state.history.record(&request.password).await?;
    let warning = persisted.warning();
    Ok(Json(ApiResponse::success(HistoryResponse::new(
        &persisted.value,
        warning,
    ))))
}

/// Remove every entry.
pub async fn clear(State(state): State<AppState>) -> Json<ApiResponse<HistoryResponse>> {
    let persisted = state.history.clear().await;
    let warning = persisted.warning();
    Json(ApiResponse::success(HistoryResponse::new(
        &persisted.value,
        warning,
    )))
}
