//! Checkpoint and lease storage for sync runs.
//!
//! A single row (id 1) holds the time the last run started and the expiry of the
//! lease held by the run in flight. The lease is claimed with a conditional update
//! so two processes sharing a database cannot both start a run.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::sync::SyncCheckpoint;

const CONFIG_ROW_ID: i32 = 1;

pub struct PterodactylConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PterodactylConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the checkpoint row if it is missing.
    ///
    /// Migrations seed the row; this covers databases created without them.
    async fn ensure_row(&self) -> Result<(), DbErr> {
        if entity::prelude::PterodactylConfig::find_by_id(CONFIG_ROW_ID)
            .one(self.db)
            .await?
            .is_some()
        {
            return Ok(());
        }

        entity::prelude::PterodactylConfig::insert(entity::pterodactyl_config::ActiveModel {
            id: ActiveValue::Set(CONFIG_ROW_ID),
            last_sync: ActiveValue::Set(None),
            sync_lease_until: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::pterodactyl_config::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Reads the checkpoint row.
    ///
    /// # Returns
    /// - `Ok(SyncCheckpoint)` - Stored values, or empty values when no row exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_checkpoint(&self) -> Result<SyncCheckpoint, DbErr> {
        let entity = entity::prelude::PterodactylConfig::find_by_id(CONFIG_ROW_ID)
            .one(self.db)
            .await?;

        Ok(entity
            .map(SyncCheckpoint::from_entity)
            .unwrap_or(SyncCheckpoint {
                last_sync: None,
                sync_lease_until: None,
            }))
    }

    /// Records the start time of a run.
    pub async fn update_last_sync(&self, at: DateTime<Utc>) -> Result<(), DbErr> {
        self.ensure_row().await?;

        entity::prelude::PterodactylConfig::update_many()
            .filter(entity::pterodactyl_config::Column::Id.eq(CONFIG_ROW_ID))
            .col_expr(
                entity::pterodactyl_config::Column::LastSync,
                sea_orm::sea_query::Expr::value(at),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Claims the run lease until `now + ttl`.
    ///
    /// Succeeds only when no lease is held or the held lease has expired. The
    /// returned expiry identifies this claim and must be passed back on release.
    ///
    /// # Returns
    /// - `Ok(Some(until))` - Lease claimed by this caller until `until`
    /// - `Ok(None)` - Another run holds an unexpired lease
    /// - `Err(DbErr)` - Expiry out of range, or database error during update
    pub async fn try_acquire_sync_lease(
        &self,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        // Postgres keeps microseconds; the stored value must compare equal on release.
        let until = now
            .checked_add_signed(ttl)
            .ok_or_else(|| DbErr::Custom(format!("Sync lease TTL {} is out of range", ttl)))?
            .trunc_subsecs(6);

        self.ensure_row().await?;

        let result = entity::prelude::PterodactylConfig::update_many()
            .filter(entity::pterodactyl_config::Column::Id.eq(CONFIG_ROW_ID))
            .filter(
                Condition::any()
                    .add(entity::pterodactyl_config::Column::SyncLeaseUntil.is_null())
                    .add(entity::pterodactyl_config::Column::SyncLeaseUntil.lte(now)),
            )
            .col_expr(
                entity::pterodactyl_config::Column::SyncLeaseUntil,
                sea_orm::sea_query::Expr::value(until),
            )
            .exec(self.db)
            .await?;

        Ok((result.rows_affected == 1).then_some(until))
    }

    /// Releases the lease claimed until `claimed_until`.
    ///
    /// A lease taken over by a later run after this one expired is left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - This claim was still held and is now released
    /// - `Ok(false)` - The lease had already passed to another run
    /// - `Err(DbErr)` - Database error during update
    pub async fn release_sync_lease(&self, claimed_until: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::PterodactylConfig::update_many()
            .filter(entity::pterodactyl_config::Column::Id.eq(CONFIG_ROW_ID))
            .filter(entity::pterodactyl_config::Column::SyncLeaseUntil.eq(claimed_until))
            .col_expr(
                entity::pterodactyl_config::Column::SyncLeaseUntil,
                sea_orm::sea_query::Expr::value(Option::<DateTime<Utc>>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
