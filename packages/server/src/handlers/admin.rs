use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::admin::{LoginRequest, LoginResponse, validate_login_request};
use crate::state::AppState;
use crate::utils::hash;

/// Check admin credentials for the dashboard.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Admin",
    operation_id = "adminLogin",
    summary = "Admin login",
    description = "Verifies the dashboard credentials against the stored Argon2 hash. No token or session is issued.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Invalid credentials (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validate_login_request(&payload)?;

    let user = state
        .users
        .find_user_by_username(payload.username.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        success: true,
        user: user.into(),
    }))
}
