//! Routes actions to their side effect handlers.

use jobwatch_client::JobAction;
use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use super::{SharedClient, TaskTracker, jobs};
use crate::action::Action;
use crate::polling::RequestSequence;

/// Start the async work an action needs, if any.
///
/// Returns once the work is spawned; results arrive later on `tx`. Actions
/// without side effects are ignored.
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    sequence: RequestSequence,
) {
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.type_name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::RefreshJobs => {
                jobs::handle_load_jobs(client, tx, task_tracker, sequence).await;
            }
            Action::RetryJob(id) => {
                jobs::handle_job_action(client, tx, task_tracker, id, JobAction::Retry).await;
            }
            Action::CancelJob(id) => {
                jobs::handle_job_action(client, tx, task_tracker, id, JobAction::Cancel).await;
            }
            _ => {}
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Whether `action` starts async work in [`handle_side_effects`].
pub fn has_side_effects(action: &Action) -> bool {
    matches!(
        action,
        Action::RefreshJobs | Action::RetryJob(_) | Action::CancelJob(_)
    )
}
