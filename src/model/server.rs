use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::panel::ResourceUsageDto;

/// Locally mirrored server record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub pterodactyl_server_id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub identifier: String,
    pub status: Option<String>,
    pub node: i64,
    pub cpu_limit: i64,
    pub memory_limit: i64,
    pub disk_limit: i64,
    pub last_synced_at: DateTime<Utc>,
}

/// Live usage of a mirrored server relative to its stored limits.
///
/// Percentages are `None` when the corresponding limit is zero, which the panel
/// uses to mean unlimited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServerUsageDto {
    pub server_id: i32,
    pub identifier: String,
    pub name: String,
    pub available: bool,
    pub usage: ResourceUsageDto,
    pub cpu_percent_of_limit: Option<f64>,
    pub memory_percent_of_limit: Option<f64>,
    pub disk_percent_of_limit: Option<f64>,
}
