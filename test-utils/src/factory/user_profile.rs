//! Profile factory for creating linked identity and profile rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test profiles together with their auth identity.
///
/// # Example
///
/// ```rust,ignore
/// let profile = ProfileFactory::new(&db)
///     .email("a@x.com")
///     .pterodactyl_id(7)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    first_name: String,
    last_name: String,
    is_admin: bool,
    pterodactyl_id: Option<i64>,
    last_synced_at: Option<DateTime<Utc>>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - first_name: `"User"`, last_name: `"{id}"`
    /// - is_admin: `false`
    /// - pterodactyl_id: `None`
    /// - last_synced_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            first_name: "User".to_string(),
            last_name: id.to_string(),
            is_admin: false,
            pterodactyl_id: None,
            last_synced_at: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Links the profile to a panel user id.
    pub fn pterodactyl_id(mut self, pterodactyl_id: i64) -> Self {
        self.pterodactyl_id = Some(pterodactyl_id);
        self
    }

    pub fn last_synced_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_synced_at = Some(at);
        self
    }

    /// Inserts the auth identity and then the profile sharing its id.
    ///
    /// # Returns
    /// - `Ok(entity::user_profile::Model)` - Created profile
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        entity::auth_identity::ActiveModel {
            id: ActiveValue::Set(id),
            email: ActiveValue::Set(self.email.clone()),
            password_hash: ActiveValue::Set("$argon2id$v=19$m=19456,t=2,p=1$test$test".to_string()),
            password_reset_required: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        entity::user_profile::ActiveModel {
            id: ActiveValue::Set(id),
            email: ActiveValue::Set(self.email),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            is_admin: ActiveValue::Set(self.is_admin),
            pterodactyl_id: ActiveValue::Set(self.pterodactyl_id),
            last_synced_at: ActiveValue::Set(self.last_synced_at),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlinked profile with default values.
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::user_profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}
