//! Password generation and strength handlers.

use axum::{Json, extract::State};

use crate::api::extractors::ApiJson;
use crate::api::state::AppState;
use crate::domain::{ApiResponse, GenerateRequest, PasswordRequest, PasswordResponse, StrengthView};
use crate::error::Result;

/// Generate a password.
///
/// Fields missing from the body (or a missing body) fall back to the current
/// settings.
pub async fn generate(
    State(state): State<AppState>,
    request: Option<ApiJson<GenerateRequest>>,
) -> Result<Json<ApiResponse<PasswordResponse>>> {
    let ApiJson(request) = request.unwrap_or_default();
    let base = state.settings.current().await;
    let options = request.into_options(&base);

    let generated = state.passwords.generate(&options)?;

    Ok(Json(ApiResponse::success(PasswordResponse {
        password: generated.password.into_inner(),
        strength: generated.strength.into(),
        classes: generated.classes,
        defaulted: generated.defaulted,
        alphabet_size: generated.alphabet_size,
    })))
}

/// Rate a password.
pub async fn strength(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PasswordRequest>,
) -> Json<ApiResponse<StrengthView>> {
    let level = state.passwords.score(&request.password);
    Json(ApiResponse::success(level.into()))
}
