use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::{sync::SyncError, AppError},
    state::AppState,
};

/// Starts the scheduled panel sync
///
/// Runs the same full sync as `POST /api/sync` on the given cron schedule. A tick
/// that finds a run already holding the lease is skipped.
///
/// # Arguments
/// - `state`: Application state shared with the HTTP handlers
/// - `schedule`: Six-field cron expression (seconds first)
pub async fn start_scheduler(state: AppState, schedule: &str) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            match state.sync_service().run_full_sync().await {
                Ok(summary) => tracing::info!(
                    "Scheduled sync finished: {} succeeded, {} failed",
                    summary.succeeded,
                    summary.failed
                ),
                Err(AppError::SyncErr(SyncError::AlreadyRunning)) => {
                    tracing::info!("Skipping scheduled sync, another run is in progress")
                }
                Err(e) => tracing::error!("Scheduled sync failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduled sync started with schedule {}", schedule);

    Ok(scheduler)
}
