use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        panel::{PanelServerResponseDto, PanelUserResponseDto, ServerResourcesResponseDto},
    },
    server::{error::AppError, state::AppState},
};

/// Tag for grouping panel passthrough endpoints in OpenAPI documentation
pub static PANEL_TAG: &str = "pterodactyl";

/// Get a panel user by id.
///
/// Reads the user straight from the panel; nothing is stored.
///
/// # Returns
/// - `200 OK` - Panel user attributes
/// - `404 Not Found` - Panel has no user with that id
/// - `500 Internal Server Error` - Panel request failed
#[utoipa::path(
    get,
    path = "/api/pterodactyl/users/{id}",
    tag = PANEL_TAG,
    params(
        ("id" = i64, Path, description = "Panel user id")
    ),
    responses(
        (status = 200, description = "Panel user", body = PanelUserResponseDto),
        (status = 404, description = "Panel record not found", body = ErrorDto),
        (status = 500, description = "Panel request failed", body = ErrorDto)
    ),
)]
pub async fn get_panel_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.panel.get_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(PanelUserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Get a panel server by id.
///
/// # Returns
/// - `200 OK` - Panel server attributes
/// - `404 Not Found` - Panel has no server with that id
/// - `500 Internal Server Error` - Panel request failed
#[utoipa::path(
    get,
    path = "/api/pterodactyl/servers/{id}",
    tag = PANEL_TAG,
    params(
        ("id" = i64, Path, description = "Panel server id")
    ),
    responses(
        (status = 200, description = "Panel server", body = PanelServerResponseDto),
        (status = 404, description = "Panel record not found", body = ErrorDto),
        (status = 500, description = "Panel request failed", body = ErrorDto)
    ),
)]
pub async fn get_panel_server(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let server = state.panel.get_server(id).await?;

    Ok((
        StatusCode::OK,
        Json(PanelServerResponseDto {
            success: true,
            server: server.into_dto(),
        }),
    ))
}

/// Get live resource usage for a panel server.
///
/// The path segment is the server's short identifier, not its numeric id. When the
/// panel cannot be reached the response still succeeds with zeroed usage and
/// `available: false`.
///
/// # Returns
/// - `200 OK` - Current state and usage
/// - `400 Bad Request` - Identifier contains characters other than alphanumerics and `-`
#[utoipa::path(
    get,
    path = "/api/pterodactyl/servers/{id}/resources",
    tag = PANEL_TAG,
    params(
        ("id" = String, Path, description = "Server short identifier")
    ),
    responses(
        (status = 200, description = "Server resource usage", body = ServerResourcesResponseDto),
        (status = 400, description = "Invalid server identifier", body = ErrorDto)
    ),
)]
pub async fn get_server_resources(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resources = state.resource_poller().read_checked(&identifier).await?;

    Ok((
        StatusCode::OK,
        Json(ServerResourcesResponseDto {
            success: true,
            attributes: resources.into_dto(),
        }),
    ))
}
