use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Panel user attributes as exposed by the passthrough endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PanelUserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub root_admin: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PanelServerLimitsDto {
    pub cpu: i64,
    pub memory: i64,
    pub disk: i64,
}

/// Panel server attributes as exposed by the passthrough endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PanelServerDto {
    pub id: i64,
    pub user: i64,
    pub name: String,
    pub description: String,
    pub identifier: String,
    pub status: Option<String>,
    pub node: i64,
    pub limits: PanelServerLimitsDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PanelUserResponseDto {
    pub success: bool,
    pub user: PanelUserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PanelServerResponseDto {
    pub success: bool,
    pub server: PanelServerDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ResourceUsageDto {
    pub cpu_absolute: f64,
    pub memory_bytes: u64,
    pub disk_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    pub uptime: u64,
}

/// Live resource attributes for one server.
///
/// `available` is false when the panel could not be reached and the usage figures
/// are zeroed placeholders.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServerResourcesDto {
    pub available: bool,
    pub current_state: String,
    pub is_suspended: bool,
    pub resources: ResourceUsageDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServerResourcesResponseDto {
    pub success: bool,
    #[serde(flatten)]
    pub attributes: ServerResourcesDto,
}
