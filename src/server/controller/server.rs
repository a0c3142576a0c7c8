use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerUsageDto},
    },
    server::{error::AppError, service::server::ServerService, state::AppState},
};

/// Tag for grouping local server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Get all mirrored servers.
///
/// # Returns
/// - `200 OK` - Every locally mirrored server ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Mirrored servers", body = Vec<ServerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let servers = ServerService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(servers.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get live usage for all mirrored servers.
///
/// Polls the panel for every stored server with bounded concurrency and reports
/// usage as a percentage of each server's stored limits. Servers the panel could
/// not report on are included with `available: false` and zeroed usage.
///
/// # Returns
/// - `200 OK` - One usage entry per mirrored server
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers/resources",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Live usage per server", body = Vec<ServerUsageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servers_usage(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let poller = state.resource_poller();
    let usage = ServerService::new(&state.db).get_usage(&poller).await?;

    Ok((
        StatusCode::OK,
        Json(usage.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}
