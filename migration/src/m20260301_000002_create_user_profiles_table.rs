use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_auth_identity_table::AuthIdentity;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(uuid(UserProfiles::Id).primary_key())
                    .col(string_uniq(UserProfiles::Email))
                    .col(string(UserProfiles::FirstName).default(""))
                    .col(string(UserProfiles::LastName).default(""))
                    .col(boolean(UserProfiles::IsAdmin).default(false))
                    .col(big_integer_null(UserProfiles::PterodactylId).unique_key())
                    .col(timestamp_with_time_zone_null(UserProfiles::LastSyncedAt))
                    .col(timestamp_with_time_zone(UserProfiles::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_auth_identity")
                            .from(UserProfiles::Table, UserProfiles::Id)
                            .to(AuthIdentity::Table, AuthIdentity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserProfiles {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    IsAdmin,
    PterodactylId,
    LastSyncedAt,
    CreatedAt,
}
