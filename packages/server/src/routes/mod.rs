use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/registrations", registration_routes())
        .nest("/admin", admin_routes())
        .nest("/committees", committee_routes())
}

fn registration_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::registration::list_registrations,
            handlers::registration::create_registration
        ))
        .routes(routes!(handlers::registration::get_registration_stats))
        .routes(routes!(
            handlers::registration::get_registration,
            handlers::registration::delete_registration
        ))
        .routes(routes!(handlers::registration::update_registration_status))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::admin::login))
}

fn committee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::committee::list_committees))
}

pub fn meta_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::meta::index))
        .routes(routes!(handlers::meta::health))
}
