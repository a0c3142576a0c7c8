use crate::server::{
    data::sync_log::SyncLogRepository,
    error::AppError,
    model::sync::{CreateSyncLogParam, SyncAction, SyncEntityType, SyncStatus},
};
use chrono::{Duration, Utc};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
