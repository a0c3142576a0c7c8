use crate::server::data::pterodactyl_config::PterodactylConfigRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, pterodactyl_config::create_config_with_lease},
};

mod get_checkpoint;
mod sync_lease;
mod update_last_sync;
