use axum::{routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{panel, register, server, sync},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UltraVM Panel Sync",
        description = "Reconciliation between the Pterodactyl panel and the local user and server mirror"
    ),
    tags(
        (name = "sync", description = "Full panel synchronization and its audit trail"),
        (name = "register", description = "Panel account creation for new signups"),
        (name = "pterodactyl", description = "Read-only panel passthrough"),
        (name = "server", description = "Locally mirrored servers and their live usage")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(sync::run_sync))
        .routes(routes!(sync::get_sync_status))
        .routes(routes!(sync::get_sync_logs))
        .routes(routes!(register::register))
        .routes(routes!(panel::get_panel_user))
        .routes(routes!(panel::get_panel_server))
        .routes(routes!(panel::get_server_resources))
        .routes(routes!(server::get_servers))
        .routes(routes!(server::get_servers_usage))
        .split_for_parts();

    router
        .route("/api/docs/openapi.json", get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
}
