use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service banner returned from `/`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiInfoResponse {
    #[schema(example = "Prodigy MUN Registration API")]
    pub message: &'static str,
    #[schema(example = "running")]
    pub status: &'static str,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    pub endpoints: ApiEndpoints,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiEndpoints {
    pub health: &'static str,
    pub admin_login: &'static str,
    pub registrations: &'static str,
    pub registration_stats: &'static str,
    pub registration_management: &'static str,
    pub committees: &'static str,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
