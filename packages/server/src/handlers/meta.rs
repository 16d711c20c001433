use axum::Json;

use crate::models::meta::{ApiEndpoints, ApiInfoResponse, HealthResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    operation_id = "apiInfo",
    summary = "API banner",
    responses((status = 200, description = "Service information", body = ApiInfoResponse)),
)]
pub async fn index() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "Prodigy MUN Registration API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ApiEndpoints {
            health: "GET /health",
            admin_login: "POST /api/admin/login",
            registrations: "GET/POST /api/registrations",
            registration_stats: "GET /api/registrations/stats",
            registration_management: "PATCH /api/registrations/{id}/status, DELETE /api/registrations/{id}",
            committees: "GET /api/committees",
        },
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Meta",
    operation_id = "healthCheck",
    summary = "Liveness probe",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now(),
    })
}
