//! Local server mirror domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::server::ServerDto,
    server::model::pterodactyl::{RemoteServer, ServerLimits},
};

/// Locally mirrored panel server.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub pterodactyl_server_id: i64,
    /// Owning profile id
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub identifier: String,
    pub status: Option<String>,
    pub node: i64,
    pub limits: ServerLimits,
    pub last_synced_at: DateTime<Utc>,
}

impl Server {
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            pterodactyl_server_id: entity.pterodactyl_server_id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
            identifier: entity.identifier,
            status: entity.status,
            node: entity.node,
            limits: ServerLimits {
                cpu: entity.cpu_limit,
                memory: entity.memory_limit,
                disk: entity.disk_limit,
            },
            last_synced_at: entity.last_synced_at,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            pterodactyl_server_id: self.pterodactyl_server_id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            identifier: self.identifier,
            status: self.status,
            node: self.node,
            cpu_limit: self.limits.cpu,
            memory_limit: self.limits.memory,
            disk_limit: self.limits.disk,
            last_synced_at: self.last_synced_at,
        }
    }
}

/// Parameters for inserting or refreshing a server keyed by its panel id.
#[derive(Debug, Clone)]
pub struct UpsertServerParam {
    pub pterodactyl_server_id: i64,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub identifier: String,
    pub status: Option<String>,
    pub node: i64,
    pub limits: ServerLimits,
    pub synced_at: DateTime<Utc>,
}

impl UpsertServerParam {
    pub fn from_remote(server: &RemoteServer, owner_id: Uuid, synced_at: DateTime<Utc>) -> Self {
        Self {
            pterodactyl_server_id: server.remote_id,
            user_id: owner_id,
            name: server.name.clone(),
            description: server.description.clone(),
            identifier: server.identifier.clone(),
            status: server.status.clone(),
            node: server.node,
            limits: server.limits,
            synced_at,
        }
    }
}
