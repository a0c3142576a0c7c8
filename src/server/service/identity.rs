//! Local identity provisioning for panel users.
//!
//! Panel users that have never signed up locally still need an auth identity so
//! their profile can exist. Those identities get a random credential that is
//! hashed and discarded, and are flagged for a password reset.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use async_trait::async_trait;
use rand::Rng;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::auth_identity::AuthIdentityRepository,
    error::{identity::IdentityError, internal::InternalError, AppError},
    model::identity::CreateAuthIdentityParam,
};

const GENERATED_PASSWORD_LENGTH: usize = 32;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates a login for `email` with an undisclosed random credential.
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Id of the new identity, to be used as the profile id
    /// - `Err(AppError::IdentityErr(EmailTaken))` - An identity already exists for the email
    /// - `Err(AppError)` - Hashing or database failure
    async fn create_identity(&self, email: &str) -> Result<Uuid, AppError>;

    /// Removes an identity created by `create_identity`.
    async fn remove_identity(&self, id: Uuid) -> Result<(), AppError>;
}

/// Identity provider backed by the `auth_identity` table.
#[derive(Clone)]
pub struct IdentityService {
    db: DatabaseConnection,
}

impl IdentityService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates a random alphanumeric credential.
    fn generate_password() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..GENERATED_PASSWORD_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    fn hash_password(password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::CredentialHash(e.to_string()))?;

        Ok(hash.to_string())
    }
}

#[async_trait]
impl IdentityProvider for IdentityService {
    async fn create_identity(&self, email: &str) -> Result<Uuid, AppError> {
        let repo = AuthIdentityRepository::new(&self.db);

        if repo.find_by_email(email).await?.is_some() {
            return Err(IdentityError::EmailTaken(email.to_lowercase()).into());
        }

        let password_hash = Self::hash_password(&Self::generate_password())?;
        let identity = repo
            .create(CreateAuthIdentityParam {
                email: email.to_string(),
                password_hash,
                password_reset_required: true,
            })
            .await?;

        Ok(identity.id)
    }

    async fn remove_identity(&self, id: Uuid) -> Result<(), AppError> {
        AuthIdentityRepository::new(&self.db).delete(id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};
    use sea_orm::EntityTrait;
    use test_utils::builder::TestBuilder;

    use super::*;

    #[test]
    fn generates_distinct_alphanumeric_passwords() {
        let first = IdentityService::generate_password();
        let second = IdentityService::generate_password();

        assert_eq!(first.len(), GENERATED_PASSWORD_LENGTH);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }

    #[test]
    fn hash_verifies_against_password() {
        let hash = IdentityService::hash_password("correct horse").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(Argon2::default()
            .verify_password(b"correct horse", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"battery staple", &parsed)
            .is_err());
    }

    /// Tests provisioning a new identity.
    ///
    /// Expected: identity stored with a reset flag and a PHC hash
    #[tokio::test]
    async fn creates_identity_requiring_reset() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::AuthIdentity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = IdentityService::new(db.clone());

        let id = service.create_identity("A@x.com").await.unwrap();

        let stored = entity::prelude::AuthIdentity::find_by_id(id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.email, "a@x.com");
        assert!(stored.password_reset_required);
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    /// Tests that an existing login is never reused or overwritten.
    ///
    /// Expected: Err(IdentityErr(EmailTaken))
    #[tokio::test]
    async fn refuses_existing_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::AuthIdentity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = IdentityService::new(db.clone());
        service.create_identity("a@x.com").await.unwrap();

        let result = service.create_identity("a@x.com").await;

        assert!(matches!(
            result,
            Err(AppError::IdentityErr(IdentityError::EmailTaken(_)))
        ));
    }
}
