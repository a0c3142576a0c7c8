//! Sync run and audit log domain models.
//!
//! The audit trail stores its enumerations as plain strings; the enums here are the
//! only values the application writes, and reading back anything else is treated
//! as an internal error.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::sync::{PaginatedSyncLogsDto, SyncLogDto, SyncStatsDto, SyncStatusDto},
    server::error::{internal::InternalError, AppError},
};

/// Kind of entity a sync log row refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEntityType {
    User,
    Server,
}

impl SyncEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Server => "server",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "user" => Ok(Self::User),
            "server" => Ok(Self::Server),
            other => Err(InternalError::UnknownSyncLogValue {
                column: "entity_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Operation that produced a sync log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Written by the reconciler
    Sync,
    /// Written by the registration bridge
    Create,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Create => "create",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "sync" => Ok(Self::Sync),
            "create" => Ok(Self::Create),
            other => Err(InternalError::UnknownSyncLogValue {
                column: "action",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Success,
    Failure,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            other => Err(InternalError::UnknownSyncLogValue {
                column: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// One audit row.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncLog {
    pub id: i32,
    pub entity_type: SyncEntityType,
    /// Panel id of the entity, or "unknown" for records rejected without one
    pub entity_id: String,
    pub action: SyncAction,
    pub status: SyncStatus,
    /// Remote data on success, `{ "error": ... }` on failure
    pub details: Value,
    pub created_at: DateTime<Utc>,
}

impl SyncLog {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(SyncLog)` - The converted log row
    /// - `Err(AppError::InternalErr(UnknownSyncLogValue))` - A stored enum column holds
    ///   a value this application never writes
    pub fn from_entity(entity: entity::sync_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            entity_type: SyncEntityType::parse(&entity.entity_type)?,
            entity_id: entity.entity_id,
            action: SyncAction::parse(&entity.action)?,
            status: SyncStatus::parse(&entity.status)?,
            details: entity.details,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SyncLogDto {
        SyncLogDto {
            id: self.id,
            entity_type: self.entity_type.as_str().to_string(),
            entity_id: self.entity_id,
            action: self.action.as_str().to_string(),
            status: self.status.as_str().to_string(),
            details: self.details,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending an audit row.
#[derive(Debug, Clone)]
pub struct CreateSyncLogParam {
    pub entity_type: SyncEntityType,
    pub entity_id: String,
    pub action: SyncAction,
    pub status: SyncStatus,
    pub details: Value,
}

/// Page of audit rows, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSyncLogs {
    pub logs: Vec<SyncLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSyncLogs {
    pub fn into_dto(self) -> PaginatedSyncLogsDto {
        PaginatedSyncLogsDto {
            logs: self.logs.into_iter().map(SyncLog::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Outcome of a full sync run.
///
/// `users` and `servers` count every remote record seen, rejected ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncSummary {
    pub users: usize,
    pub servers: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl SyncSummary {
    pub fn into_stats_dto(self) -> SyncStatsDto {
        SyncStatsDto {
            users: self.users,
            servers: self.servers,
        }
    }
}

/// Contents of the single checkpoint row.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncCheckpoint {
    /// Start time of the most recent run that fetched the panel successfully
    pub last_sync: Option<DateTime<Utc>>,
    /// Expiry of the lease held by an in-flight run
    pub sync_lease_until: Option<DateTime<Utc>>,
}

impl SyncCheckpoint {
    pub fn from_entity(entity: entity::pterodactyl_config::Model) -> Self {
        Self {
            last_sync: entity.last_sync,
            sync_lease_until: entity.sync_lease_until,
        }
    }

    /// Whether a run currently holds an unexpired lease.
    pub fn in_progress(&self, now: DateTime<Utc>) -> bool {
        self.sync_lease_until.is_some_and(|until| until > now)
    }

    pub fn into_status_dto(self, now: DateTime<Utc>) -> SyncStatusDto {
        SyncStatusDto {
            in_progress: self.in_progress(now),
            last_sync: self.last_sync,
        }
    }
}
