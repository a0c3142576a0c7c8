pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_auth_identity_table;
mod m20260301_000002_create_user_profiles_table;
mod m20260301_000003_create_servers_table;
mod m20260301_000004_create_sync_logs_table;
mod m20260301_000005_create_pterodactyl_config_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_auth_identity_table::Migration),
            Box::new(m20260301_000002_create_user_profiles_table::Migration),
            Box::new(m20260301_000003_create_servers_table::Migration),
            Box::new(m20260301_000004_create_sync_logs_table::Migration),
            Box::new(m20260301_000005_create_pterodactyl_config_table::Migration),
        ]
    }
}
