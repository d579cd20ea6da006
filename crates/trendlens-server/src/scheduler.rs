//! Background job scheduler.
//!
//! Registers the recurring best-100 refresh at server startup.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use trendlens_db::Storage;
use trendlens_scraper::Best100Scraper;

use crate::refresh::refresh_best100;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process. Dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// `schedule` is not a valid cron expression, or the scheduler fails to
/// start.
pub async fn build_scheduler(
    scraper: Arc<Best100Scraper>,
    storage: Storage,
    schedule: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_best100_job(&scheduler, scraper, storage, schedule).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

/// Scrapes the best-100 page on `schedule` (default daily at 03:00) and
/// replaces the stored `전체` batch.
async fn register_best100_job(
    scheduler: &JobScheduler,
    scraper: Arc<Best100Scraper>,
    storage: Storage,
    schedule: &str,
) -> Result<(), JobSchedulerError> {
    let storage = Arc::new(storage);

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let scraper = Arc::clone(&scraper);
        let storage = Arc::clone(&storage);

        Box::pin(async move {
            tracing::info!("scheduler: starting best-100 refresh");
            match refresh_best100(&scraper, &storage).await {
                Ok(outcome) => tracing::info!(
                    count = outcome.products.len(),
                    persisted = outcome.persisted,
                    "scheduler: best-100 refresh complete"
                ),
                Err(e) => tracing::error!(error = %e, "scheduler: best-100 refresh failed"),
            }
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(schedule, "scheduler: best-100 job registered");
    Ok(())
}
