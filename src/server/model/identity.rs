use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Local authentication identity.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    /// Set for identities whose credential was generated rather than chosen
    pub password_reset_required: bool,
    pub created_at: DateTime<Utc>,
}

impl AuthIdentity {
    pub fn from_entity(entity: entity::auth_identity::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_reset_required: entity.password_reset_required,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting an identity.
#[derive(Debug, Clone)]
pub struct CreateAuthIdentityParam {
    pub email: String,
    /// PHC-formatted password hash
    pub password_hash: String,
    pub password_reset_required: bool,
}
