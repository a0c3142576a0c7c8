//! Server factory for creating mirrored server rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test servers owned by an existing profile.
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    pterodactyl_server_id: i64,
    name: String,
    identifier: String,
    limits: (i64, i64, i64),
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - pterodactyl_server_id: auto-incremented
    /// - name: `"server-{id}"`
    /// - identifier: `{id}` as eight hex digits
    /// - limits: 100% CPU, 1024 MiB memory, 10240 MiB disk
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            pterodactyl_server_id: id as i64,
            name: format!("server-{}", id),
            identifier: format!("{:08x}", id),
            limits: (100, 1024, 10240),
        }
    }

    pub fn pterodactyl_server_id(mut self, id: i64) -> Self {
        self.pterodactyl_server_id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Sets CPU (%), memory (MiB) and disk (MiB) limits.
    pub fn limits(mut self, cpu: i64, memory: i64, disk: i64) -> Self {
        self.limits = (cpu, memory, disk);
        self
    }

    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let now = Utc::now();
        let (cpu, memory, disk) = self.limits;

        entity::server::ActiveModel {
            pterodactyl_server_id: ActiveValue::Set(self.pterodactyl_server_id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            identifier: ActiveValue::Set(self.identifier),
            status: ActiveValue::Set(None),
            node: ActiveValue::Set(1),
            cpu_limit: ActiveValue::Set(cpu),
            memory_limit: ActiveValue::Set(memory),
            disk_limit: ActiveValue::Set(disk),
            last_synced_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values for the given owner.
pub async fn create_server(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, user_id).build().await
}
