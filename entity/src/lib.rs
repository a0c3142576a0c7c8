//! SeaORM entity models for the UltraVM panel mirror.
//!
//! Each module maps one table. The `prelude` re-exports the entity types under
//! their table names for use in repositories and test builders.

pub mod auth_identity;
pub mod prelude;
pub mod pterodactyl_config;
pub mod server;
pub mod sync_log;
pub mod user_profile;
