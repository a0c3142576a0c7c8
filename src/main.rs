mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, scheduler, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ultravm=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let db = startup::connect_to_database(&config).await?;
    let panel = startup::setup_panel_client(&config)?;
    let state = startup::build_state(db, panel, &config);

    // Held for the lifetime of the process
    let _scheduler = match config.sync_schedule.as_deref() {
        Some(schedule) => Some(scheduler::sync::start_scheduler(state.clone(), schedule).await?),
        None => {
            tracing::info!("SYNC_SCHEDULE not set, scheduled sync disabled");
            None
        }
    };

    let app = router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
