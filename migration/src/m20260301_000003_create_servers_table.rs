use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_user_profiles_table::UserProfiles;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servers::Table)
                    .if_not_exists()
                    .col(pk_auto(Servers::Id))
                    .col(big_integer_uniq(Servers::PterodactylServerId))
                    .col(uuid(Servers::UserId))
                    .col(string(Servers::Name))
                    .col(string(Servers::Description).default(""))
                    .col(string(Servers::Identifier))
                    .col(string_null(Servers::Status))
                    .col(big_integer(Servers::Node))
                    .col(big_integer(Servers::CpuLimit))
                    .col(big_integer(Servers::MemoryLimit))
                    .col(big_integer(Servers::DiskLimit))
                    .col(timestamp_with_time_zone(Servers::LastSyncedAt))
                    .col(timestamp_with_time_zone(Servers::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servers_user_profiles")
                            .from(Servers::Table, Servers::UserId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Servers {
    Table,
    Id,
    PterodactylServerId,
    UserId,
    Name,
    Description,
    Identifier,
    Status,
    Node,
    CpuLimit,
    MemoryLimit,
    DiskLimit,
    LastSyncedAt,
    CreatedAt,
}
