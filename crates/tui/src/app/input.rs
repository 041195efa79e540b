//! Key handling.
//!
//! Maps key presses to actions based on the current mode: filter editing,
//! help popup, detail modal, or the table. Returns `None` for unbound keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jobwatch_client::SortColumn;

use crate::action::Action;
use crate::app::{App, InputMode};
use crate::ui::ToastLevel;
use crate::ui::detail::{DetailActions, RowActions};

impl App {
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }

        if self.input_mode == InputMode::Filter {
            return self.handle_filter_input(key);
        }
        if self.show_help {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
                _ => None,
            };
        }
        if self.is_detail_open() {
            return self.handle_detail_input(key);
        }
        self.handle_table_input(key)
    }

    fn handle_filter_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CancelFilter),
            KeyCode::Enter => Some(Action::CommitFilter),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Char(c) => Some(Action::FilterInput(c)),
            _ => None,
        }
    }

    fn handle_detail_input(&mut self, key: KeyEvent) -> Option<Action> {
        let job = self.detail_job()?;
        let allowed = DetailActions::for_job(job);
        let id = job.id.clone();

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseDetail),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollDetail(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDetail(1)),
            KeyCode::PageUp => Some(Action::ScrollDetail(-10)),
            KeyCode::PageDown => Some(Action::ScrollDetail(10)),
            KeyCode::Char('r') if allowed.retry => Some(Action::RetryJob(id)),
            _ => None,
        }
    }

    fn handle_table_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
            KeyCode::Left | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Right | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char('/') => Some(Action::EnterFilterMode),
            KeyCode::Char('t') => Some(Action::CycleTypeFilter),
            KeyCode::Char('s') => Some(Action::CycleStatusFilter),
            KeyCode::Char('x') => Some(Action::ClearFilters),
            KeyCode::Char('a') => Some(Action::ToggleAutoRefresh),
            KeyCode::Char('R') => Some(Action::RefreshJobs),
            KeyCode::Char('r') => self.row_action(true),
            KeyCode::Char('c') => self.row_action(false),
            KeyCode::Char(digit @ '1'..='8') => {
                let idx = digit as usize - '1' as usize;
                SortColumn::ALL.get(idx).copied().map(Action::SortBy)
            }
            _ => None,
        }
    }

    /// Retry or cancel the selected row, or explain why it is not offered.
    fn row_action(&mut self, retry: bool) -> Option<Action> {
        let job = self.selected_job()?;
        let allowed = RowActions::for_job(job);
        let id = job.id.clone();
        let status = job.status;

        match (retry, allowed.retry, allowed.cancel) {
            (true, true, _) => Some(Action::RetryJob(id)),
            (false, _, true) => Some(Action::CancelJob(id)),
            (true, false, _) => Some(Action::Notify(
                ToastLevel::Info,
                format!("Only failed jobs can be retried ({id} is {status})"),
            )),
            (false, _, false) => Some(Action::Notify(
                ToastLevel::Info,
                format!("Only pending or processing jobs can be cancelled ({id} is {status})"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_client::JobStatus;
    use jobwatch_client::testing::{JobBuilder, snapshot_of};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app_with(statuses: &[JobStatus]) -> App {
        let mut app = App::default();
        let jobs = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| JobBuilder::new(format!("j{i}")).status(*status).build())
            .collect();
        app.update(Action::JobsLoaded {
            ticket: 1,
            result: Ok(snapshot_of(jobs)),
        });
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert!(matches!(app.handle_input(key(KeyCode::Char('q'))), Some(Action::Quit)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(app.handle_input(ctrl_c), Some(Action::Quit)));
    }

    #[test]
    fn test_retry_on_failed_row() {
        let mut app = app_with(&[JobStatus::Failed]);
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('r'))),
            Some(Action::RetryJob(id)) if id == "j0"
        ));
    }

    #[test]
    fn test_retry_on_completed_row_explains() {
        let mut app = app_with(&[JobStatus::Completed]);
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('r'))),
            Some(Action::Notify(ToastLevel::Info, _))
        ));
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('c'))),
            Some(Action::Notify(ToastLevel::Info, _))
        ));
    }

    #[test]
    fn test_cancel_on_processing_row() {
        let mut app = app_with(&[JobStatus::Processing]);
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('c'))),
            Some(Action::CancelJob(id)) if id == "j0"
        ));
    }

    #[test]
    fn test_detail_hides_retry_unless_failed() {
        let mut app = app_with(&[JobStatus::Pending]);
        app.update(Action::OpenDetail);
        assert!(app.is_detail_open());
        assert!(app.handle_input(key(KeyCode::Char('r'))).is_none());
        assert!(app.handle_input(key(KeyCode::Char('c'))).is_none());
        assert!(matches!(
            app.handle_input(key(KeyCode::Esc)),
            Some(Action::CloseDetail)
        ));
    }

    #[test]
    fn test_detail_offers_retry_for_failed_job() {
        let mut app = app_with(&[JobStatus::Failed]);
        app.update(Action::OpenDetail);
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('r'))),
            Some(Action::RetryJob(id)) if id == "j0"
        ));
    }

    #[test]
    fn test_filter_mode_captures_keys() {
        let mut app = App::default();
        app.update(Action::EnterFilterMode);
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('q'))),
            Some(Action::FilterInput('q'))
        ));
        assert!(matches!(
            app.handle_input(key(KeyCode::Enter)),
            Some(Action::CommitFilter)
        ));
    }

    #[test]
    fn test_digit_sorts_by_column() {
        let mut app = App::default();
        assert!(matches!(
            app.handle_input(key(KeyCode::Char('7'))),
            Some(Action::SortBy(SortColumn::CreatedAt))
        ));
        assert!(app.handle_input(key(KeyCode::Char('9'))).is_none());
    }
}
