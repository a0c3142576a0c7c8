//! Database repository layer.
//!
//! Repositories hold a borrowed connection, use SeaORM entity models internally and
//! return domain models from `server::model`, so entity types never leave this
//! module.

pub mod auth_identity;
pub mod pterodactyl_config;
pub mod server;
pub mod sync_log;
pub mod user_profile;

#[cfg(test)]
mod test;
