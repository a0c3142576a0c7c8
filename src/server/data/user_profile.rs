//! User profile repository for database operations.
//!
//! Profiles are matched against panel users by `pterodactyl_id` once linked and by
//! email before that. Emails are stored and compared lowercased.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::{
    profile::{CreateProfileParam, Profile},
    pterodactyl::RemoteUser,
};

/// Repository providing database operations for user profiles.
pub struct UserProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserProfileRepository<'a> {
    /// Creates a new UserProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the profile linked to a panel user.
    ///
    /// # Arguments
    /// - `pterodactyl_id` - Panel user id
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Linked profile found
    /// - `Ok(None)` - No profile is linked to that panel user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_pterodactyl_id(
        &self,
        pterodactyl_id: i64,
    ) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::PterodactylId.eq(pterodactyl_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Finds a profile by email, case-insensitively.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - No profile with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Inserts a profile for an existing auth identity.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile
    /// - `Err(DbErr)` - Insert failed (missing identity, duplicate email or panel id)
    pub async fn create(&self, param: CreateProfileParam) -> Result<Profile, DbErr> {
        let entity = entity::user_profile::ActiveModel {
            id: ActiveValue::Set(param.id),
            email: ActiveValue::Set(param.email.to_lowercase()),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            is_admin: ActiveValue::Set(param.is_admin),
            pterodactyl_id: ActiveValue::Set(param.pterodactyl_id),
            last_synced_at: ActiveValue::Set(param.last_synced_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Overwrites a profile's panel-owned fields with the panel's values.
    ///
    /// Sets the panel link, names, admin flag and sync timestamp. Email and creation
    /// time are left untouched.
    ///
    /// # Arguments
    /// - `id` - Profile id
    /// - `user` - Panel user the profile was matched to
    /// - `synced_at` - Start time of the sync run
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(DbErr::RecordNotUpdated)` - No profile with that id
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update_from_remote(
        &self,
        id: Uuid,
        user: &RemoteUser,
        synced_at: DateTime<Utc>,
    ) -> Result<Profile, DbErr> {
        let entity = entity::user_profile::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(user.first_name.clone()),
            last_name: ActiveValue::Set(user.last_name.clone()),
            is_admin: ActiveValue::Set(user.is_root_admin),
            pterodactyl_id: ActiveValue::Set(Some(user.remote_id)),
            last_synced_at: ActiveValue::Set(Some(synced_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    /// Links an unlinked profile to a panel user by email.
    ///
    /// Profiles that already carry a panel id are left alone.
    ///
    /// # Returns
    /// - `Ok(true)` - A profile was linked
    /// - `Ok(false)` - No unlinked profile with that email exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn link_by_email(
        &self,
        email: &str,
        pterodactyl_id: i64,
        linked_at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::UserProfile::update_many()
            .filter(entity::user_profile::Column::Email.eq(email.to_lowercase()))
            .filter(entity::user_profile::Column::PterodactylId.is_null())
            .col_expr(
                entity::user_profile::Column::PterodactylId,
                sea_orm::sea_query::Expr::value(pterodactyl_id),
            )
            .col_expr(
                entity::user_profile::Column::LastSyncedAt,
                sea_orm::sea_query::Expr::value(linked_at),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
