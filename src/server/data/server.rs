//! Server repository for the local mirror of panel servers.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::server::{Server, UpsertServerParam};

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a server or refreshes the row with the same panel id.
    ///
    /// On conflict every mutable column is overwritten (name, description, identifier,
    /// status, node, limits, owner and sync timestamp). `created_at` keeps its
    /// original value.
    ///
    /// # Returns
    /// - `Ok(Server)` - The created or updated server
    /// - `Err(DbErr)` - Database error, including an owner that does not exist
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Server, DbErr> {
        let entity = entity::prelude::Server::insert(entity::server::ActiveModel {
            pterodactyl_server_id: ActiveValue::Set(param.pterodactyl_server_id),
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            identifier: ActiveValue::Set(param.identifier),
            status: ActiveValue::Set(param.status),
            node: ActiveValue::Set(param.node),
            cpu_limit: ActiveValue::Set(param.limits.cpu),
            memory_limit: ActiveValue::Set(param.limits.memory),
            disk_limit: ActiveValue::Set(param.limits.disk),
            last_synced_at: ActiveValue::Set(param.synced_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::PterodactylServerId)
                .update_columns([
                    entity::server::Column::UserId,
                    entity::server::Column::Name,
                    entity::server::Column::Description,
                    entity::server::Column::Identifier,
                    entity::server::Column::Status,
                    entity::server::Column::Node,
                    entity::server::Column::CpuLimit,
                    entity::server::Column::MemoryLimit,
                    entity::server::Column::DiskLimit,
                    entity::server::Column::LastSyncedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Server::from_entity(entity))
    }

    pub async fn find_by_pterodactyl_id(
        &self,
        pterodactyl_server_id: i64,
    ) -> Result<Option<Server>, DbErr> {
        let entity = entity::prelude::Server::find()
            .filter(entity::server::Column::PterodactylServerId.eq(pterodactyl_server_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Server::from_entity))
    }

    /// Gets every mirrored server ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Server>, DbErr> {
        let entities = entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Name)
            .order_by_asc(entity::server::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Server::from_entity).collect())
    }
}
