//! Report-status polling.
//!
//! While a report is generating, the detail view re-fetches it on a fixed
//! interval. The poller is a scoped resource: [`start_report_polling`]
//! hands back a [`PollHandle`] whose drop aborts the background task, so
//! leaving the view (or starting a new poll) tears the old one down and no
//! fetch can be issued afterwards.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::app::messages::AppMessage;
use crate::models::ReportStatus;
use crate::traits::HttpClient;

/// Handle to a running report poll. Aborts the poll task when dropped.
#[derive(Debug)]
pub struct PollHandle {
    report_id: String,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// The ID of the report being polled.
    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    /// Whether the poll task has stopped on its own.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop polling. Equivalent to dropping the handle.
    pub fn cancel(self) {
        // Drop aborts the task.
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start polling a report's status every `interval`.
///
/// Each poll fetches the report and forwards it as
/// [`AppMessage::ReportLoaded`]. The task stops itself on the first
/// status other than `processing`, on a fetch failure (forwarded as
/// [`AppMessage::ReportLoadFailed`]), or when the receiver is gone.
/// The first fetch happens one full `interval` after the call; the
/// view has already fetched once before deciding to poll.
pub fn start_report_polling<C>(
    api: ApiClient<C>,
    report_id: String,
    interval: Duration,
    tx: UnboundedSender<AppMessage>,
) -> PollHandle
where
    C: HttpClient + Clone + 'static,
{
    let id = report_id.clone();
    let task = tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            match api.get_report(&id).await {
                Ok(report) => {
                    let status = report.status;
                    if tx.send(AppMessage::ReportLoaded(report)).is_err() {
                        return;
                    }
                    if status != ReportStatus::Processing {
                        tracing::debug!("report {} reached {}, poll done", id, status.label());
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!("report {} poll failed: {}", id, e);
                    let _ = tx.send(AppMessage::ReportLoadFailed {
                        id: id.clone(),
                        error: e.to_string(),
                    });
                    return;
                }
            }
        }
    });

    PollHandle { report_id, task }
}
