use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{Registration, RegistrationStats};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::registration::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Registrations",
    operation_id = "createRegistration",
    summary = "Submit a registration",
    description = "Registers a student for a committee. Each (student name, grade, division) combination may register once; names compare case-insensitively. New registrations start as `pending`.",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created", body = Registration),
        (status = 400, description = "Validation error (VALIDATION_ERROR) or duplicate (DUPLICATE_REGISTRATION)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_registration(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.registrations.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Registrations",
    operation_id = "listRegistrations",
    summary = "List all registrations",
    description = "Returns every registration, newest first.",
    responses(
        (status = 200, description = "All registrations", body = Vec<Registration>),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Registration>>, AppError> {
    Ok(Json(state.registrations.list().await?))
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Registrations",
    operation_id = "getRegistrationStats",
    summary = "Registration counts per status",
    description = "Counts are recomputed on every request. `total` always equals `confirmed + pending + rejected`.",
    responses(
        (status = 200, description = "Registration statistics", body = RegistrationStats),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_registration_stats(
    State(state): State<AppState>,
) -> Result<Json<RegistrationStats>, AppError> {
    Ok(Json(state.registrations.stats().await?))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Registrations",
    operation_id = "getRegistration",
    summary = "Get a registration by ID",
    params(("id" = i32, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Registration details", body = Registration),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Registration not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_registration(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Registration>, AppError> {
    Ok(Json(state.registrations.get(id).await?))
}

#[utoipa::path(
    patch,
    path = "/{id}/status",
    tag = "Registrations",
    operation_id = "updateRegistrationStatus",
    summary = "Change a registration's status",
    description = "Sets the status to `pending`, `confirmed` or `rejected`. Any status may follow any other; repeating the same update is harmless.",
    params(("id" = i32, Path, description = "Registration ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Registration updated", body = Registration),
        (status = 400, description = "Invalid status or ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Registration not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(status = %payload.status))]
pub async fn update_registration_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateStatusRequest>,
) -> Result<Json<Registration>, AppError> {
    Ok(Json(state.registrations.set_status(id, payload.status).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Registrations",
    operation_id = "deleteRegistration",
    summary = "Delete a registration",
    description = "Permanently removes a registration. Its ID is never reused.",
    params(("id" = i32, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Registration deleted", body = DeleteRegistrationResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Registration not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_registration(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteRegistrationResponse>, AppError> {
    state.registrations.remove(id).await?;
    Ok(Json(DeleteRegistrationResponse { success: true }))
}
