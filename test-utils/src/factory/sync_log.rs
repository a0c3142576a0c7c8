use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Inserts a sync log row with the given classification and timestamp.
///
/// # Arguments
/// - `entity_type` - `"user"` or `"server"`
/// - `entity_id` - Panel id of the entity as a string
/// - `status` - `"success"` or `"failure"`
/// - `created_at` - Row timestamp, used to control ordering in tests
pub async fn create_sync_log(
    db: &DatabaseConnection,
    entity_type: &str,
    entity_id: &str,
    status: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::sync_log::Model, DbErr> {
    entity::sync_log::ActiveModel {
        entity_type: ActiveValue::Set(entity_type.to_string()),
        entity_id: ActiveValue::Set(entity_id.to_string()),
        action: ActiveValue::Set("sync".to_string()),
        status: ActiveValue::Set(status.to_string()),
        details: ActiveValue::Set(json!({ "id": entity_id })),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
