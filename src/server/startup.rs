use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, error::AppError, panel::PterodactylClient,
    service::identity::IdentityService, state::AppState,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema and the checkpoint row
/// exist before anything reads them.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the panel client.
///
/// Fails when the panel URL or API key is empty, which stops startup.
pub fn setup_panel_client(config: &Config) -> Result<PterodactylClient, AppError> {
    let client = PterodactylClient::new(&config.panel)?;

    tracing::info!("Panel client configured for {}", config.panel.url);

    Ok(client)
}

/// Assembles the shared application state.
pub fn build_state(
    db: DatabaseConnection,
    panel: PterodactylClient,
    config: &Config,
) -> AppState {
    let identity = IdentityService::new(db.clone());

    AppState::new(db, Arc::new(panel), Arc::new(identity), config)
}
