//! Action application.
//!
//! Responsibilities:
//! - Mutate `App` in response to an `Action`.
//! - Request at most one follow-up action (e.g. a refetch after a retry).
//!
//! Does NOT handle:
//! - Spawning network work; the runtime routes `RefreshJobs`, `RetryJob`,
//!   and `CancelJob` to side effects before calling `update`.
//!
//! Invariants:
//! - `JobsLoaded` with a ticket at or below `last_applied_ticket` is dropped.
//! - A failed poll keeps the previous snapshot and never raises a toast.
//! - A failed retry/cancel raises an error toast and never refetches.

use chrono::Utc;
use jobwatch_client::ActionOutcome;

use crate::action::{Action, JobsResult};
use crate::app::{App, InputMode};
use crate::ui::{Toast, ToastLevel};

impl App {
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::Resize(..) | Action::Input(_) => {}
            Action::Quit => self.should_quit = true,
            Action::Loading(loading) => self.loading = loading,
            Action::Notify(level, message) => self.push_toast(Toast::new(message, level)),

            Action::RefreshJobs => self.loading = true,
            Action::JobsLoaded { ticket, result } => self.apply_jobs(ticket, result),
            Action::ToggleAutoRefresh => {
                self.auto_refresh = !self.auto_refresh;
                let state = if self.auto_refresh { "on" } else { "off" };
                self.push_toast(Toast::info(format!("Auto-refresh {state}")));
            }

            Action::RetryJob(_) | Action::CancelJob(_) => self.close_detail(),
            Action::JobActionFinished {
                id,
                action,
                outcome,
            } => match outcome {
                ActionOutcome::Completed => {
                    self.push_toast(Toast::success(format!("Job {id} {}", action.past_tense())));
                    return Some(Action::RefreshJobs);
                }
                ActionOutcome::DomainError(message) | ActionOutcome::TransportError(message) => {
                    self.push_toast(Toast::error(format!(
                        "{} failed for job {id}: {message}",
                        action.verb()
                    )));
                }
            },

            Action::NavigateUp => self.move_selection(-1),
            Action::NavigateDown => self.move_selection(1),
            Action::NextPage => {
                self.table.next_page();
                self.reset_selection();
            }
            Action::PrevPage => {
                self.table.prev_page();
                self.reset_selection();
            }
            Action::OpenDetail => {
                if let Some(id) = self.selected_job().map(|job| job.id.clone()) {
                    self.detail_job_id = Some(id);
                    self.detail_scroll = 0;
                }
            }
            Action::CloseDetail => self.close_detail(),
            Action::ScrollDetail(delta) => {
                self.detail_scroll = self.detail_scroll.saturating_add_signed(delta);
            }
            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::EnterFilterMode => {
                self.input_mode = InputMode::Filter;
                self.filter_input = self.table.global_filter.clone();
            }
            Action::FilterInput(c) => self.filter_input.push(c),
            Action::FilterBackspace => {
                self.filter_input.pop();
            }
            Action::CommitFilter => {
                self.input_mode = InputMode::Normal;
                let text = std::mem::take(&mut self.filter_input);
                self.table.set_global_filter(text);
                self.reset_selection();
            }
            Action::CancelFilter => {
                self.input_mode = InputMode::Normal;
                self.filter_input.clear();
            }
            Action::CycleTypeFilter => {
                self.table.cycle_type_filter();
                self.reset_selection();
            }
            Action::CycleStatusFilter => {
                self.table.cycle_status_filter();
                self.reset_selection();
            }
            Action::ClearFilters => {
                self.table.clear_filters();
                self.reset_selection();
            }
            Action::SortBy(column) => {
                self.table.toggle_sort(column);
                self.reset_selection();
            }
        }
        None
    }

    fn apply_jobs(&mut self, ticket: u64, result: JobsResult) {
        if ticket <= self.last_applied_ticket {
            tracing::debug!(
                ticket,
                applied = self.last_applied_ticket,
                "Dropping stale jobs response"
            );
            return;
        }

        match result {
            Ok(snapshot) => {
                self.last_applied_ticket = ticket;
                self.snapshot = Some(snapshot);
                self.last_success_at = Some(Utc::now());
                self.last_poll_error = None;
                self.loading = false;

                if let Some(id) = self.detail_job_id.as_deref()
                    && self.snapshot.as_ref().and_then(|s| s.find(id)).is_none()
                {
                    tracing::debug!(job_id = id, "Detail job vanished from snapshot");
                    self.close_detail();
                }
                self.clamp_selection();
            }
            Err(e) => {
                self.loading = false;
                self.last_poll_error = Some(e.to_string());
            }
        }
    }

    fn close_detail(&mut self) {
        self.detail_job_id = None;
        self.detail_scroll = 0;
    }

    fn move_selection(&mut self, delta: isize) {
        let rows = self.view_at(Utc::now()).indices.len();
        if rows == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(rows - 1);
        self.table_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_client::testing::{JobBuilder, snapshot_of};
    use jobwatch_client::{ClientError, JobAction, JobStatus, JobsSnapshot};
    use std::sync::Arc;

    fn snapshot(ids: &[&str]) -> JobsSnapshot {
        snapshot_of(ids.iter().map(|id| JobBuilder::new(*id).build()).collect())
    }

    fn loaded(ticket: u64, snapshot: JobsSnapshot) -> Action {
        Action::JobsLoaded {
            ticket,
            result: Ok(snapshot),
        }
    }

    #[test]
    fn test_stale_ticket_never_overwrites_newer_snapshot() {
        let mut app = App::default();
        app.update(loaded(2, snapshot(&["new"])));
        app.update(loaded(1, snapshot(&["old"])));

        assert_eq!(app.last_applied_ticket, 2);
        assert_eq!(app.jobs()[0].id, "new");
    }

    #[test]
    fn test_poll_error_keeps_snapshot_without_toast() {
        let mut app = App::default();
        app.update(loaded(1, snapshot(&["a"])));
        app.update(Action::JobsLoaded {
            ticket: 2,
            result: Err(Arc::new(ClientError::Rejected {
                message: "db down".into(),
            })),
        });

        assert_eq!(app.jobs().len(), 1);
        assert!(app.last_poll_error.as_deref().is_some_and(|e| e.contains("db down")));
        assert!(app.toasts.is_empty());
        assert!(app.last_success_at.is_some());

        // The next success clears the stale marker.
        app.update(loaded(3, snapshot(&["a", "b"])));
        assert!(app.last_poll_error.is_none());
    }

    #[test]
    fn test_rejected_action_toasts_and_does_not_refetch() {
        let mut app = App::default();
        let follow_up = app.update(Action::JobActionFinished {
            id: "j1".into(),
            action: JobAction::Retry,
            outcome: ActionOutcome::DomainError("Job is not in a retryable state".into()),
        });

        assert!(follow_up.is_none());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].level, ToastLevel::Error);
        assert!(app.toasts[0].message.contains("not in a retryable state"));
    }

    #[test]
    fn test_completed_action_requests_one_refetch() {
        let mut app = App::default();
        let follow_up = app.update(Action::JobActionFinished {
            id: "j1".into(),
            action: JobAction::Cancel,
            outcome: ActionOutcome::Completed,
        });

        assert!(matches!(follow_up, Some(Action::RefreshJobs)));
        assert_eq!(app.toasts[0].level, ToastLevel::Success);
        assert_eq!(app.toasts[0].message, "Job j1 cancelled");
    }

    #[test]
    fn test_retry_closes_detail() {
        let mut app = App::default();
        app.update(loaded(
            1,
            snapshot_of(vec![JobBuilder::new("j1").status(JobStatus::Failed).build()]),
        ));
        app.update(Action::OpenDetail);
        assert_eq!(app.detail_job_id.as_deref(), Some("j1"));

        app.update(Action::RetryJob("j1".into()));
        assert!(!app.is_detail_open());
    }

    #[test]
    fn test_detail_follows_refresh_and_closes_when_job_vanishes() {
        let mut app = App::default();
        app.update(loaded(
            1,
            snapshot_of(vec![JobBuilder::new("j1").status(JobStatus::Processing).build()]),
        ));
        app.update(Action::OpenDetail);

        app.update(loaded(
            2,
            snapshot_of(vec![JobBuilder::new("j1").status(JobStatus::Completed).build()]),
        ));
        assert_eq!(
            app.detail_job().map(|job| job.status),
            Some(JobStatus::Completed)
        );

        app.update(loaded(3, snapshot(&["other"])));
        assert!(!app.is_detail_open());
    }

    #[test]
    fn test_filter_commit_and_cancel() {
        let mut app = App::default();
        app.update(loaded(1, snapshot(&["alpha", "beta"])));

        app.update(Action::EnterFilterMode);
        for c in "alp".chars() {
            app.update(Action::FilterInput(c));
        }
        app.update(Action::CommitFilter);
        assert_eq!(app.table.global_filter, "alp");
        assert_eq!(app.view_at(Utc::now()).filtered_len, 1);

        app.update(Action::EnterFilterMode);
        app.update(Action::FilterBackspace);
        app.update(Action::CancelFilter);
        assert_eq!(app.table.global_filter, "alp");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_clamps_to_page() {
        let mut app = App::default();
        app.update(loaded(1, snapshot(&["a", "b", "c"])));
        for _ in 0..10 {
            app.update(Action::NavigateDown);
        }
        assert_eq!(app.table_state.selected(), Some(2));

        app.update(loaded(2, snapshot(&["a"])));
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_toggle_auto_refresh() {
        let mut app = App::default();
        assert!(app.auto_refresh);
        app.update(Action::ToggleAutoRefresh);
        assert!(!app.auto_refresh);
        assert!(app.toasts[0].message.contains("off"));
    }
}
