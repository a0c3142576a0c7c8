use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        sync::{PaginatedSyncLogsDto, SyncResponseDto, SyncStatusDto},
    },
    server::{error::AppError, service::sync::SyncAuditService, state::AppState},
};

/// Tag for grouping sync endpoints in OpenAPI documentation
pub static SYNC_TAG: &str = "sync";

const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Run a full panel synchronization.
///
/// Fetches every user and server from the panel and reconciles the local profile
/// and server tables against them. Per-entity failures do not fail the request;
/// they are recorded in the sync log.
///
/// # Returns
/// - `200 OK` - Run completed, with the number of users and servers seen
/// - `409 Conflict` - Another run is in progress
/// - `500 Internal Server Error` - Panel collections could not be fetched, or database error
#[utoipa::path(
    post,
    path = "/api/sync",
    tag = SYNC_TAG,
    responses(
        (status = 200, description = "Synchronization completed", body = SyncResponseDto),
        (status = 409, description = "A synchronization is already running", body = ErrorDto),
        (status = 500, description = "Synchronization failed", body = ErrorDto)
    ),
)]
pub async fn run_sync(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = state.sync_service().run_full_sync().await?;

    Ok((
        StatusCode::OK,
        Json(SyncResponseDto {
            success: true,
            message: "Synchronization completed successfully".to_string(),
            stats: summary.into_stats_dto(),
        }),
    ))
}

/// Get the sync checkpoint.
///
/// # Returns
/// - `200 OK` - Start time of the last run that fetched the panel, and whether a run holds the lease
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sync/status",
    tag = SYNC_TAG,
    responses(
        (status = 200, description = "Current sync status", body = SyncStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sync_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let checkpoint = SyncAuditService::new(&state.db).status().await?;

    Ok((StatusCode::OK, Json(checkpoint.into_status_dto(Utc::now()))))
}

/// Get the sync audit log.
///
/// Returns one page of sync log rows, newest first. `entries` is capped at 100.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated sync log rows
/// - `500 Internal Server Error` - Database error or unreadable log row
#[utoipa::path(
    get,
    path = "/api/sync/logs",
    tag = SYNC_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved sync logs", body = PaginatedSyncLogsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sync_logs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = params.entries.clamp(1, MAX_ENTRIES);
    let logs = SyncAuditService::new(&state.db)
        .get_logs(params.page, entries)
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
