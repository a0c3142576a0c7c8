use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SyncLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(SyncLogs::Id))
                    .col(string(SyncLogs::EntityType))
                    .col(string(SyncLogs::EntityId))
                    .col(string(SyncLogs::Action))
                    .col(string(SyncLogs::Status))
                    .col(json(SyncLogs::Details))
                    .col(timestamp_with_time_zone(SyncLogs::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sync_logs_created_at")
                    .table(SyncLogs::Table)
                    .col(SyncLogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SyncLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum SyncLogs {
    Table,
    Id,
    EntityType,
    EntityId,
    Action,
    Status,
    Details,
    CreatedAt,
}
