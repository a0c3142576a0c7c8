use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the checkpoint row the migrations seed in production.
pub async fn create_config(
    db: &DatabaseConnection,
) -> Result<entity::pterodactyl_config::Model, DbErr> {
    create_config_with_lease(db, None).await
}

/// Inserts the checkpoint row with a lease already held until `lease_until`.
pub async fn create_config_with_lease(
    db: &DatabaseConnection,
    lease_until: Option<DateTime<Utc>>,
) -> Result<entity::pterodactyl_config::Model, DbErr> {
    entity::pterodactyl_config::ActiveModel {
        id: ActiveValue::Set(1),
        last_sync: ActiveValue::Set(None),
        sync_lease_until: ActiveValue::Set(lease_until),
    }
    .insert(db)
    .await
}
