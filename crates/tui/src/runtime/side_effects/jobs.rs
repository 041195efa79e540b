//! Job side effect handlers.
//!
//! Does NOT handle:
//! - Checking whether a job may be retried or cancelled; the UI only offers
//!   valid actions and the server has the final say.
//! - Refetching after an action (the app requests that on success).

use jobwatch_client::{ActionOutcome, JobAction};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use super::{SharedClient, TaskTracker};
use crate::action::Action;
use crate::polling::{JobsSource, RequestSequence};

/// Fetch the snapshot once, outside the poll schedule.
pub async fn handle_load_jobs(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    sequence: RequestSequence,
) {
    let ticket = sequence.next_ticket();
    task_tracker.spawn(async move {
        let result = client.fetch_jobs().await;
        if let Err(e) = &result {
            tracing::warn!(ticket, error = %e, "Manual job refresh failed");
        }
        let _ = tx
            .send(Action::JobsLoaded {
                ticket,
                result: result.map_err(Arc::new),
            })
            .await;
    });
}

/// Send a retry or cancel command and report its outcome.
pub async fn handle_job_action(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    id: String,
    action: JobAction,
) {
    task_tracker.spawn(async move {
        let outcome = client.job_action(&id, action).await;
        match &outcome {
            ActionOutcome::Completed => {
                tracing::info!(job_id = %id, action = %action, "Job action accepted")
            }
            ActionOutcome::DomainError(message) => {
                tracing::warn!(job_id = %id, action = %action, reason = %message, "Job action rejected")
            }
            ActionOutcome::TransportError(message) => {
                tracing::warn!(job_id = %id, action = %action, error = %message, "Job action failed")
            }
        }
        let _ = tx
            .send(Action::JobActionFinished {
                id,
                action,
                outcome,
            })
            .await;
    });
}
