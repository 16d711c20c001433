use common::RegistrationStatus;
use serde::{Deserialize, Serialize};

/// Request body for submitting a registration.
///
/// Fields are kept loose here so that every problem can be reported at once
/// with a field-level message; see [`validate_registration`](crate::service::validate_registration).
#[derive(Debug, Default, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    /// Student's full name.
    #[schema(example = "Asha Rao")]
    pub student_name: Option<String>,
    /// One of `8`, `9`, `10`, `11`, `12`.
    #[schema(example = "10")]
    pub grade: Option<String>,
    /// One of `A` through `K`.
    #[schema(example = "A")]
    pub division: Option<String>,
    /// Contact email. Empty or absent means none.
    #[schema(example = "asha@example.com")]
    pub email: Option<String>,
    /// Committee id from the catalog.
    #[schema(example = "unsc")]
    pub committee: Option<String>,
    /// Free-text suggestions for the organizers.
    pub suggestions: Option<String>,
}

/// Request body for changing a registration's status.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusRequest {
    pub status: RegistrationStatus,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteRegistrationResponse {
    #[schema(example = true)]
    pub success: bool,
}
