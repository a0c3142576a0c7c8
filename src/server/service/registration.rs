//! Signup bridge that creates the panel account for a new storefront user.
//!
//! The panel call comes first. Nothing is written locally unless it succeeds, and
//! after that the audit row and the profile link are best effort: the panel account
//! already exists and the next full sync will pick it up either way.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::{sync_log::SyncLogRepository, user_profile::UserProfileRepository},
    error::{registration::RegistrationError, AppError},
    model::{
        profile::RegisterParam,
        pterodactyl::CreateRemoteUserParam,
        sync::{CreateSyncLogParam, SyncAction, SyncEntityType, SyncStatus},
    },
    panel::PanelApi,
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    panel: &'a dyn PanelApi,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection, panel: &'a dyn PanelApi) -> Self {
        Self { db, panel }
    }

    /// Creates a panel user for the signup and links any matching local profile.
    ///
    /// # Arguments
    /// - `param` - Signup details; first name defaults to the email local part
    ///
    /// # Returns
    /// - `Ok(i64)` - Panel id of the created user
    /// - `Err(AppError::RegistrationErr(InvalidInput))` - Email or password missing, no panel call made
    /// - `Err(AppError::RegistrationErr(RemoteCreateFailed))` - Panel refused the account, nothing written
    pub async fn register_and_link(&self, param: RegisterParam) -> Result<i64, AppError> {
        let remote_param = build_remote_user(param)?;
        let email = remote_param.email.clone();

        let user = self
            .panel
            .create_user(remote_param)
            .await
            .map_err(RegistrationError::RemoteCreateFailed)?;

        tracing::info!("Created panel user {} for {}", user.remote_id, email);

        let log = SyncLogRepository::new(self.db)
            .create(CreateSyncLogParam {
                entity_type: SyncEntityType::User,
                entity_id: user.remote_id.to_string(),
                action: SyncAction::Create,
                status: SyncStatus::Success,
                details: json!({ "email": email, "pterodactylId": user.remote_id }),
            })
            .await;
        if let Err(e) = log {
            tracing::error!(
                "Failed to write registration log for panel user {}: {}",
                user.remote_id,
                e
            );
        }

        match UserProfileRepository::new(self.db)
            .link_by_email(&email, user.remote_id, Utc::now())
            .await
        {
            Ok(true) => tracing::debug!("Linked profile {} to panel user {}", email, user.remote_id),
            Ok(false) => tracing::debug!("No unlinked profile for {}", email),
            Err(e) => tracing::warn!(
                "Failed to link profile {} to panel user {}: {}",
                email,
                user.remote_id,
                e
            ),
        }

        Ok(user.remote_id)
    }
}

/// Validates signup input and derives the panel account fields.
fn build_remote_user(param: RegisterParam) -> Result<CreateRemoteUserParam, RegistrationError> {
    let email = param.email.trim().to_lowercase();
    if email.is_empty() || param.password.trim().is_empty() {
        return Err(RegistrationError::InvalidInput(
            "Email and password are required".to_string(),
        ));
    }

    let username = match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => local.to_string(),
        _ => {
            return Err(RegistrationError::InvalidInput(
                "Email address is invalid".to_string(),
            ))
        }
    };

    let first_name = param
        .first_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| username.clone());
    let last_name = param
        .last_name
        .map(|name| name.trim().to_string())
        .unwrap_or_default();

    Ok(CreateRemoteUserParam {
        email,
        username,
        first_name,
        last_name,
        password: param.password,
        root_admin: false,
    })
}
