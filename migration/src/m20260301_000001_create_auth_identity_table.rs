use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthIdentity::Table)
                    .if_not_exists()
                    .col(uuid(AuthIdentity::Id).primary_key())
                    .col(string_uniq(AuthIdentity::Email))
                    .col(string(AuthIdentity::PasswordHash))
                    .col(boolean(AuthIdentity::PasswordResetRequired).default(false))
                    .col(timestamp_with_time_zone(AuthIdentity::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthIdentity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum AuthIdentity {
    Table,
    Id,
    Email,
    PasswordHash,
    PasswordResetRequired,
    CreatedAt,
}
