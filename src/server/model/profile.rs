//! Local user profile domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::model::pterodactyl::RemoteUser;

/// Local mirror of a user, keyed by email and linked to a panel user by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Same value as the owning auth identity id
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    /// Panel user id, set once the profile has been linked
    pub pterodactyl_id: Option<i64>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl Profile {
    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_admin: entity.is_admin,
            pterodactyl_id: entity.pterodactyl_id,
            last_synced_at: entity.last_synced_at,
        }
    }
}

/// Parameters for creating a profile from a panel user.
#[derive(Debug, Clone)]
pub struct CreateProfileParam {
    /// Id of the auth identity created for this profile
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub pterodactyl_id: Option<i64>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl CreateProfileParam {
    /// Builds creation parameters for a panel user that has no local profile yet.
    pub fn from_remote(id: Uuid, user: &RemoteUser, synced_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_admin: user.is_root_admin,
            pterodactyl_id: Some(user.remote_id),
            last_synced_at: Some(synced_at),
        }
    }
}

/// Signup details forwarded to the panel.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
