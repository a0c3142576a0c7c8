//! Full reconciliation between the panel and the local mirror.
//!
//! A run fetches every panel user and server, then brings `user_profiles` and
//! `servers` into agreement with them one entity at a time. Each entity gets one
//! audit row. Per-entity failures are logged and skipped; only a failure to claim
//! the run lease or to fetch the panel collections fails the run.
//!
//! Profiles are matched by panel id once linked and by email before that. A
//! profile found by email that is already linked to another panel user is never
//! relinked.
//!
//! Within each collection, records the panel sent in an unreadable shape are
//! logged first, followed by the valid records in panel order.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::{
        pterodactyl_config::PterodactylConfigRepository, server::ServerRepository,
        sync_log::SyncLogRepository, user_profile::UserProfileRepository,
    },
    error::{sync::SyncError, AppError},
    model::{
        profile::CreateProfileParam,
        pterodactyl::{RejectedRecord, RemoteServer, RemoteUser},
        server::UpsertServerParam,
        sync::{
            CreateSyncLogParam, PaginatedSyncLogs, SyncAction, SyncCheckpoint, SyncEntityType,
            SyncStatus, SyncSummary,
        },
    },
    panel::PanelApi,
    service::identity::IdentityProvider,
};

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    panel: &'a dyn PanelApi,
    identity: &'a dyn IdentityProvider,
    lease_ttl: Duration,
}

impl<'a> SyncService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        panel: &'a dyn PanelApi,
        identity: &'a dyn IdentityProvider,
        lease_ttl: Duration,
    ) -> Self {
        Self {
            db,
            panel,
            identity,
            lease_ttl,
        }
    }

    /// Runs a full sync under the run lease.
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Run completed; per-entity failures are only in the audit log
    /// - `Err(AppError::SyncErr(AlreadyRunning))` - Another run holds the lease
    /// - `Err(AppError::SyncErr(FetchFailed))` - A panel collection could not be fetched
    /// - `Err(AppError::DbErr)` - The lease or checkpoint could not be written
    pub async fn run_full_sync(&self) -> Result<SyncSummary, AppError> {
        let config_repo = PterodactylConfigRepository::new(self.db);
        let started_at = Utc::now();
        let ttl = chrono::Duration::from_std(self.lease_ttl)
            .map_err(|e| AppError::InternalError(format!("Invalid sync lease TTL: {}", e)))?;

        let Some(lease_until) = config_repo.try_acquire_sync_lease(started_at, ttl).await? else {
            tracing::info!("Sync requested while another run holds the lease");
            return Err(SyncError::AlreadyRunning.into());
        };

        let result = self.run_leased(started_at).await;

        match config_repo.release_sync_lease(lease_until).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!("Sync lease expired during the run and was taken over"),
            Err(e) => tracing::error!("Failed to release sync lease: {}", e),
        }

        result
    }

    async fn run_leased(&self, started_at: DateTime<Utc>) -> Result<SyncSummary, AppError> {
        tracing::info!("Starting full synchronization");

        let users = self
            .panel
            .list_users()
            .await
            .map_err(SyncError::FetchFailed)?;
        let servers = self
            .panel
            .list_servers()
            .await
            .map_err(SyncError::FetchFailed)?;

        tracing::info!(
            "Found {} users and {} servers on the panel",
            users.items.len() + users.rejected.len(),
            servers.items.len() + servers.rejected.len()
        );

        PterodactylConfigRepository::new(self.db)
            .update_last_sync(started_at)
            .await?;

        let mut summary = SyncSummary {
            users: users.items.len() + users.rejected.len(),
            servers: servers.items.len() + servers.rejected.len(),
            ..Default::default()
        };

        for rejected in users.rejected {
            self.record_rejected(SyncEntityType::User, rejected, &mut summary)
                .await;
        }
        for user in &users.items {
            let outcome = self.sync_user(user, started_at).await;
            self.record_outcome(
                SyncEntityType::User,
                user.remote_id,
                outcome.map(|_| user.to_details()),
                json!({ "email": user.email }),
                &mut summary,
            )
            .await;
        }

        for rejected in servers.rejected {
            self.record_rejected(SyncEntityType::Server, rejected, &mut summary)
                .await;
        }
        for server in &servers.items {
            let outcome = self.sync_server(server, started_at).await;
            self.record_outcome(
                SyncEntityType::Server,
                server.remote_id,
                outcome.map(|_| server.to_details()),
                json!({ "owner": server.owner_remote_id }),
                &mut summary,
            )
            .await;
        }

        tracing::info!(
            "Synchronization completed: {} users, {} servers, {} succeeded, {} failed",
            summary.users,
            summary.servers,
            summary.succeeded,
            summary.failed
        );

        Ok(summary)
    }

    /// Creates or updates the profile for one panel user.
    async fn sync_user(&self, user: &RemoteUser, started_at: DateTime<Utc>) -> Result<(), AppError> {
        let profiles = UserProfileRepository::new(self.db);

        if let Some(profile) = profiles.find_by_pterodactyl_id(user.remote_id).await? {
            profiles
                .update_from_remote(profile.id, user, started_at)
                .await?;
            tracing::debug!("Updated profile {} for panel user {}", profile.id, user.remote_id);
            return Ok(());
        }

        if let Some(profile) = profiles.find_by_email(&user.email).await? {
            if let Some(linked_remote_id) = profile.pterodactyl_id {
                return Err(SyncError::ProfileLinkConflict {
                    email: profile.email,
                    linked_remote_id,
                    remote_id: user.remote_id,
                }
                .into());
            }

            profiles
                .update_from_remote(profile.id, user, started_at)
                .await?;
            tracing::debug!("Linked profile {} to panel user {}", profile.id, user.remote_id);
            return Ok(());
        }

        let identity_id = self.identity.create_identity(&user.email).await?;
        let created = profiles
            .create(CreateProfileParam::from_remote(identity_id, user, started_at))
            .await;

        match created {
            Ok(profile) => {
                tracing::debug!("Created profile {} for panel user {}", profile.id, user.remote_id);
                Ok(())
            }
            Err(err) => {
                if let Err(cleanup) = self.identity.remove_identity(identity_id).await {
                    tracing::error!(
                        "Failed to remove identity {} after profile creation failed: {}",
                        identity_id,
                        cleanup
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Inserts or refreshes the local row for one panel server.
    async fn sync_server(
        &self,
        server: &RemoteServer,
        started_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let owner = UserProfileRepository::new(self.db)
            .find_by_pterodactyl_id(server.owner_remote_id)
            .await?
            .ok_or(SyncError::OwnerNotFound {
                server_remote_id: server.remote_id,
                owner_remote_id: server.owner_remote_id,
            })?;

        ServerRepository::new(self.db)
            .upsert(UpsertServerParam::from_remote(server, owner.id, started_at))
            .await?;

        Ok(())
    }

    async fn record_outcome(
        &self,
        entity_type: SyncEntityType,
        remote_id: i64,
        outcome: Result<Value, AppError>,
        context: Value,
        summary: &mut SyncSummary,
    ) {
        let (status, details) = match outcome {
            Ok(details) => {
                summary.succeeded += 1;
                (SyncStatus::Success, details)
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(
                    "Failed to sync {} {}: {}",
                    entity_type.as_str(),
                    remote_id,
                    err
                );
                let mut details = context;
                details["error"] = Value::String(err.to_string());
                (SyncStatus::Failure, details)
            }
        };

        self.append_log(entity_type, remote_id.to_string(), status, details)
            .await;
    }

    async fn record_rejected(
        &self,
        entity_type: SyncEntityType,
        rejected: RejectedRecord,
        summary: &mut SyncSummary,
    ) {
        summary.failed += 1;
        let entity_id = rejected
            .remote_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let error = SyncError::RejectedRecord(rejected.reason);

        self.append_log(
            entity_type,
            entity_id,
            SyncStatus::Failure,
            json!({ "error": error.to_string(), "record": rejected.raw }),
        )
        .await;
    }

    /// Appends an audit row; a failed write is traced and does not stop the run.
    async fn append_log(
        &self,
        entity_type: SyncEntityType,
        entity_id: String,
        status: SyncStatus,
        details: Value,
    ) {
        let result = SyncLogRepository::new(self.db)
            .create(CreateSyncLogParam {
                entity_type,
                entity_id: entity_id.clone(),
                action: SyncAction::Sync,
                status,
                details,
            })
            .await;

        if let Err(e) = result {
            tracing::error!(
                "Failed to write sync log for {} {}: {}",
                entity_type.as_str(),
                entity_id,
                e
            );
        }
    }
}

/// Read access to the checkpoint and audit trail.
pub struct SyncAuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncAuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn status(&self) -> Result<SyncCheckpoint, AppError> {
        Ok(PterodactylConfigRepository::new(self.db)
            .get_checkpoint()
            .await?)
    }

    /// Gets one page of the audit trail, newest first.
    pub async fn get_logs(&self, page: u64, per_page: u64) -> Result<PaginatedSyncLogs, AppError> {
        SyncLogRepository::new(self.db)
            .get_paginated(page, per_page)
            .await
    }
}
