use crate::server::{
    data::user_profile::UserProfileRepository,
    model::{profile::CreateProfileParam, pterodactyl::RemoteUser},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user_profile::ProfileFactory};

mod create;
mod find_by_email;
mod find_by_pterodactyl_id;
mod link_by_email;
mod update_from_remote;

fn remote_user(remote_id: i64, email: &str) -> RemoteUser {
    RemoteUser {
        remote_id,
        email: email.to_string(),
        first_name: "Remote".to_string(),
        last_name: "User".to_string(),
        is_root_admin: false,
    }
}
