//! Dashboard application state.
//!
//! Responsibilities:
//! - Own the current snapshot, table state, selection, detail modal, toasts.
//! - Translate key presses into actions (`input`).
//! - Apply actions to state (`update`).
//! - Draw the frame (`render`).
//!
//! Does NOT handle:
//! - Network I/O (see `runtime::side_effects` and `polling`).
//! - Terminal setup (see `runtime::terminal`).
//!
//! Invariants:
//! - The snapshot is replaced only by a response with a newer ticket.
//! - The detail modal stores a job id, never a copy; the job is read from the
//!   current snapshot on every frame.

mod input;
mod render;
mod update;

use chrono::{DateTime, Utc};
use jobwatch_client::{Job, JobsSnapshot};
use jobwatch_config::{DashboardConfig, HealthThresholds};
use ratatui::widgets::TableState;

use crate::jobs::{HealthSummary, JobsTableState, TableView};
use crate::ui::Toast;
use crate::ui::theme::Theme;

/// Rows taken by the header (connection, status, health).
pub const HEADER_HEIGHT: u16 = 4;
/// Rows taken by the footer (paging and key hints).
pub const FOOTER_HEIGHT: u16 = 3;

/// Connection details shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionContext {
    pub profile_name: Option<String>,
    pub base_url: String,
    /// `token` when a bearer token is configured, otherwise `session`.
    pub auth_mode: String,
}

/// Whether keys edit the text filter or drive the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Dashboard state.
pub struct App {
    pub snapshot: Option<JobsSnapshot>,
    /// Ticket of the snapshot currently shown; 0 before the first load.
    pub last_applied_ticket: u64,
    pub last_success_at: Option<DateTime<Utc>>,
    /// Set when the latest poll failed; cleared by the next success.
    pub last_poll_error: Option<String>,
    pub table: JobsTableState,
    pub table_state: TableState,
    pub auto_refresh: bool,
    pub detail_job_id: Option<String>,
    pub detail_scroll: u16,
    pub input_mode: InputMode,
    pub filter_input: String,
    pub toasts: Vec<Toast>,
    pub loading: bool,
    pub should_quit: bool,
    pub show_help: bool,
    pub connection: ConnectionContext,
    pub thresholds: HealthThresholds,
    pub theme: Theme,
    pub spinner_frame: u8,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DashboardConfig::default(), ConnectionContext::default())
    }
}

impl App {
    pub fn new(dashboard: DashboardConfig, connection: ConnectionContext) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            snapshot: None,
            last_applied_ticket: 0,
            last_success_at: None,
            last_poll_error: None,
            table: JobsTableState::new(dashboard.page_size),
            table_state,
            auto_refresh: dashboard.auto_refresh,
            detail_job_id: None,
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            toasts: Vec::new(),
            loading: true,
            should_quit: false,
            show_help: false,
            connection,
            thresholds: dashboard.thresholds,
            theme: Theme::default(),
            spinner_frame: 0,
        }
    }

    pub fn jobs(&self) -> &[Job] {
        self.snapshot
            .as_ref()
            .map(|s| s.jobs.as_slice())
            .unwrap_or_default()
    }

    /// Current page of the table at `now`.
    pub fn view_at(&mut self, now: DateTime<Utc>) -> TableView {
        let jobs = self
            .snapshot
            .as_ref()
            .map(|s| s.jobs.as_slice())
            .unwrap_or_default();
        self.table.view(jobs, now)
    }

    /// Job under the cursor on the current page.
    pub fn selected_job(&mut self) -> Option<&Job> {
        let view = self.view_at(Utc::now());
        let row = self.table_state.selected()?;
        let idx = *view.indices.get(row)?;
        self.jobs().get(idx)
    }

    /// Job shown in the detail modal, looked up in the current snapshot.
    pub fn detail_job(&self) -> Option<&Job> {
        let id = self.detail_job_id.as_deref()?;
        self.snapshot.as_ref()?.find(id)
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_job_id.is_some()
    }

    pub fn health(&self) -> Option<HealthSummary> {
        self.snapshot
            .as_ref()
            .map(|s| HealthSummary::evaluate(&s.stats, &self.thresholds))
    }

    /// Keep the cursor inside the current page.
    fn clamp_selection(&mut self) {
        let rows = self.view_at(Utc::now()).indices.len();
        let selected = match (self.table_state.selected(), rows) {
            (_, 0) => None,
            (Some(row), n) => Some(row.min(n - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    fn reset_selection(&mut self) {
        self.table_state.select(Some(0));
        self.clamp_selection();
    }

    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}
