use axum::Json;
use common::{COMMITTEES, Committee};

#[utoipa::path(
    get,
    path = "/",
    tag = "Committees",
    operation_id = "listCommittees",
    summary = "List the committee catalog",
    description = "Returns the static list of committees students can register for.",
    responses(
        (status = 200, description = "Committee catalog", body = Vec<Committee>),
    ),
)]
pub async fn list_committees() -> Json<&'static [Committee]> {
    Json(COMMITTEES)
}
