//! Auth identity repository.
//!
//! Identities back the local login for every profile. The sync creates them for
//! panel users that have never signed up locally.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::identity::{AuthIdentity, CreateAuthIdentityParam};

pub struct AuthIdentityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthIdentityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new identity with a fresh time-ordered id.
    ///
    /// # Returns
    /// - `Ok(AuthIdentity)` - The created identity
    /// - `Err(DbErr)` - Insert failed, including a unique violation on email
    pub async fn create(&self, param: CreateAuthIdentityParam) -> Result<AuthIdentity, DbErr> {
        let entity = entity::auth_identity::ActiveModel {
            id: ActiveValue::Set(Uuid::now_v7()),
            email: ActiveValue::Set(param.email.to_lowercase()),
            password_hash: ActiveValue::Set(param.password_hash),
            password_reset_required: ActiveValue::Set(param.password_reset_required),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(AuthIdentity::from_entity(entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<AuthIdentity>, DbErr> {
        let entity = entity::prelude::AuthIdentity::find()
            .filter(entity::auth_identity::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(AuthIdentity::from_entity))
    }

    /// Deletes an identity by id.
    ///
    /// Used to roll back an identity whose profile could not be created.
    ///
    /// # Returns
    /// - `Ok(())` - Identity deleted, or none existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::AuthIdentity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
