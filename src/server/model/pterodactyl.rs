//! Typed records for the Pterodactyl panel API.
//!
//! These are the validated shapes handed out by the panel client. Anything that
//! does not decode into one of them is reported as a `RejectedRecord` instead of
//! reaching the reconciler with missing fields.

use serde_json::{json, Value};

use crate::model::panel::{
    PanelServerDto, PanelServerLimitsDto, PanelUserDto, ResourceUsageDto, ServerResourcesDto,
};

/// Panel user account.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteUser {
    /// Panel-assigned user id
    pub remote_id: i64,
    /// Login email, lowercased at the client boundary
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user is a panel root administrator
    pub is_root_admin: bool,
}

impl RemoteUser {
    /// Panel data recorded in the sync log for this user.
    pub fn to_details(&self) -> Value {
        json!({
            "id": self.remote_id,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "root_admin": self.is_root_admin,
        })
    }

    pub fn into_dto(self) -> PanelUserDto {
        PanelUserDto {
            id: self.remote_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            root_admin: self.is_root_admin,
        }
    }
}

/// Resource limits of a panel server.
///
/// `memory` and `disk` are in MiB; `cpu` is a percentage of one core. Zero means
/// unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerLimits {
    pub cpu: i64,
    pub memory: i64,
    pub disk: i64,
}

/// Panel server.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteServer {
    /// Panel-assigned server id
    pub remote_id: i64,
    /// Panel id of the owning user
    pub owner_remote_id: i64,
    pub name: String,
    pub description: String,
    /// Short identifier used by the client API
    pub identifier: String,
    /// Installation/suspension status, `None` when the server is ready
    pub status: Option<String>,
    pub node: i64,
    pub limits: ServerLimits,
}

impl RemoteServer {
    /// Panel data recorded in the sync log for this server.
    pub fn to_details(&self) -> Value {
        json!({
            "id": self.remote_id,
            "user": self.owner_remote_id,
            "name": self.name,
            "description": self.description,
            "identifier": self.identifier,
            "status": self.status,
            "node": self.node,
            "limits": {
                "cpu": self.limits.cpu,
                "memory": self.limits.memory,
                "disk": self.limits.disk,
            },
        })
    }

    pub fn into_dto(self) -> PanelServerDto {
        PanelServerDto {
            id: self.remote_id,
            user: self.owner_remote_id,
            name: self.name,
            description: self.description,
            identifier: self.identifier,
            status: self.status,
            node: self.node,
            limits: PanelServerLimitsDto {
                cpu: self.limits.cpu,
                memory: self.limits.memory,
                disk: self.limits.disk,
            },
        }
    }
}

/// Live usage counters reported by the client API.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceUsage {
    /// CPU usage as a percentage of one core
    pub cpu_absolute: f64,
    pub memory_bytes: u64,
    pub disk_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    /// Milliseconds since the server process started
    pub uptime: u64,
}

impl ResourceUsage {
    pub fn into_dto(self) -> ResourceUsageDto {
        ResourceUsageDto {
            cpu_absolute: self.cpu_absolute,
            memory_bytes: self.memory_bytes,
            disk_bytes: self.disk_bytes,
            network_rx_bytes: self.network_rx_bytes,
            network_tx_bytes: self.network_tx_bytes,
            uptime: self.uptime,
        }
    }
}

/// Live state of one server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerResources {
    /// False when the reading is a zeroed placeholder for an unreachable server
    pub available: bool,
    pub current_state: String,
    pub is_suspended: bool,
    pub usage: ResourceUsage,
}

impl ServerResources {
    /// Zeroed reading substituted when the panel cannot report usage.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            current_state: "unknown".to_string(),
            is_suspended: false,
            usage: ResourceUsage::default(),
        }
    }

    pub fn into_dto(self) -> ServerResourcesDto {
        ServerResourcesDto {
            available: self.available,
            current_state: self.current_state,
            is_suspended: self.is_suspended,
            resources: self.usage.into_dto(),
        }
    }
}

/// Parameters for creating a panel user.
#[derive(Debug, Clone)]
pub struct CreateRemoteUserParam {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub root_admin: bool,
}

/// List item that failed validation at the client boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Panel id when it could still be read from the item
    pub remote_id: Option<i64>,
    pub reason: String,
    /// The raw item as returned by the panel
    pub raw: Value,
}

/// Fully paginated panel collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T> {
    /// Valid records in panel order
    pub items: Vec<T>,
    /// Records that failed validation, in panel order; their position relative to
    /// `items` is not kept
    pub rejected: Vec<RejectedRecord>,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rejected: Vec::new(),
        }
    }
}
