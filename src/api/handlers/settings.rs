//! Settings handlers.

use axum::{Json, extract::State};

use crate::api::extractors::ApiJson;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, Settings, SettingsResponse};
use crate::error::Result;

/// Current settings and whether they were saved.
pub async fn get(State(state): State<AppState>) -> Json<ApiResponse<SettingsResponse>> {
    Json(ApiResponse::success(SettingsResponse {
        settings: state.settings.current().await,
        saved: state.settings.is_saved().await,
        warning: None,
    }))
}

/// Replace the saved settings.
pub async fn save(
    State(state): State<AppState>,
    ApiJson(settings): ApiJson<Settings>,
) -> Result<Json<ApiResponse<SettingsResponse>>> {
    let persisted = state.settings.save(settings).await?;
    Ok(Json(ApiResponse::success(SettingsResponse {
        warning: persisted.warning(),
        settings: persisted.value,
        saved: true,
    })))
}
