use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SyncStatsDto {
    pub users: usize,
    pub servers: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SyncResponseDto {
    pub success: bool,
    pub message: String,
    pub stats: SyncStatsDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatusDto {
    pub last_sync: Option<DateTime<Utc>>,
    pub in_progress: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SyncLogDto {
    pub id: i32,
    pub entity_type: String,
    pub entity_id: String,
    pub action: String,
    pub status: String,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PaginatedSyncLogsDto {
    pub logs: Vec<SyncLogDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
