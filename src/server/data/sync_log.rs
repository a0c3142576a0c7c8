//! Sync log repository.
//!
//! The audit trail is append-only: rows are inserted and listed, never updated
//! or deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::sync::{CreateSyncLogParam, PaginatedSyncLogs, SyncLog},
};

pub struct SyncLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SyncLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one audit row stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(SyncLog)` - The inserted row
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn create(&self, param: CreateSyncLogParam) -> Result<SyncLog, AppError> {
        let entity = entity::sync_log::ActiveModel {
            entity_type: ActiveValue::Set(param.entity_type.as_str().to_string()),
            entity_id: ActiveValue::Set(param.entity_id),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            details: ActiveValue::Set(param.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        SyncLog::from_entity(entity)
    }

    /// Gets one page of the audit trail, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Rows per page
    ///
    /// # Returns
    /// - `Ok(PaginatedSyncLogs)` - The requested page with totals
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row holds an unknown enum value
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSyncLogs, AppError> {
        let paginator = entity::prelude::SyncLog::find()
            .order_by_desc(entity::sync_log::Column::CreatedAt)
            .order_by_desc(entity::sync_log::Column::Id)
            .paginate(self.db, per_page);

        let totals = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let logs = entities
            .into_iter()
            .map(SyncLog::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedSyncLogs {
            logs,
            total: totals.number_of_items,
            page,
            per_page,
            total_pages: totals.number_of_pages,
        })
    }

    /// Counts all audit rows.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::SyncLog::find().count(self.db).await
    }
}
