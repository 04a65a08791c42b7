use crate::digest;
use crate::email::Mailer;
use crate::store::SubmissionStore;
use anyhow::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

/// Initialize and start the digest scheduler.
///
/// `digest_cron` uses the six-field form with a leading seconds column;
/// the default is `0 0 6 * * *`, daily at 06:00 UTC.
pub async fn start_scheduler(
    digest_cron: &str,
    store: Arc<SubmissionStore>,
    mailer: Arc<Mailer>,
    recipient: String,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    info!("scheduling digest job (cron: {digest_cron})");
    let job = Job::new_async(digest_cron, move |_uuid, _l| {
        let store = Arc::clone(&store);
        let mailer = Arc::clone(&mailer);
        let recipient = recipient.clone();

        Box::pin(async move {
            info!("scheduled digest triggered");
            if let Err(e) = digest::process_pending(&store, &mailer, &recipient).await {
                error!("scheduled digest failed: {e:#}");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("scheduler started");

    Ok(scheduler)
}
