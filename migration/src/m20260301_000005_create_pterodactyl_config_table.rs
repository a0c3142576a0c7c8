use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PterodactylConfig::Table)
                    .if_not_exists()
                    .col(integer(PterodactylConfig::Id).primary_key())
                    .col(timestamp_with_time_zone_null(PterodactylConfig::LastSync))
                    .col(timestamp_with_time_zone_null(PterodactylConfig::SyncLeaseUntil))
                    .to_owned(),
            )
            .await?;

        // The checkpoint row always exists with id 1
        let seed = Query::insert()
            .into_table(PterodactylConfig::Table)
            .columns([PterodactylConfig::Id])
            .values_panic([1.into()])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PterodactylConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum PterodactylConfig {
    Table,
    Id,
    LastSync,
    SyncLeaseUntil,
}
