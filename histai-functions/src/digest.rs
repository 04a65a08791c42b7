use crate::email::{Mailer, render_digest_html};
use crate::models::SubmissionStatus;
use crate::store::SubmissionStore;
use anyhow::Result;
use tracing::info;

/// Drain pending submissions into one digest mail.
///
/// Rows move `pending` → `processed` before the send and `processed` →
/// `emailed` after it, so a failed send leaves them visible as
/// `processed` rather than silently re-queued.
///
/// Returns the number of submissions that went out.
pub async fn process_pending(
    store: &SubmissionStore,
    mailer: &Mailer,
    recipient: &str,
) -> Result<usize> {
    let pending = store.fetch_pending().await?;
    if pending.is_empty() {
        info!("no pending submissions, skipping digest");
        return Ok(0);
    }

    let ids: Vec<i64> = pending.iter().map(|s| s.id).collect();
    store.mark_status(&ids, SubmissionStatus::Processed).await?;

    let html = render_digest_html(&pending);
    mailer
        .send_html(recipient, "New HistBench Submissions", &html)
        .await?;

    store.mark_status(&ids, SubmissionStatus::Emailed).await?;
    info!(count = ids.len(), "digest sent");
    Ok(ids.len())
}
