use crate::server::{
    data::server::ServerRepository,
    model::{
        pterodactyl::ServerLimits,
        server::UpsertServerParam,
    },
};
use chrono::Utc;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, server::ServerFactory},
};
use uuid::Uuid;

mod find_by_pterodactyl_id;
mod get_all;
mod upsert;

fn param(pterodactyl_server_id: i64, owner: Uuid) -> UpsertServerParam {
    UpsertServerParam {
        pterodactyl_server_id,
        user_id: owner,
        name: "alpha".to_string(),
        description: "first server".to_string(),
        identifier: "1a2b3c4d".to_string(),
        status: None,
        node: 1,
        limits: ServerLimits {
            cpu: 2,
            memory: 2048,
            disk: 20000,
        },
        synced_at: Utc::now(),
    }
}
