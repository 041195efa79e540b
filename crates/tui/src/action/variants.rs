//! The `Action` enum.

use crossterm::event::KeyEvent;
use jobwatch_client::{ActionOutcome, ClientError, JobAction, JobsSnapshot, SortColumn};
use std::sync::Arc;

use crate::ui::ToastLevel;

/// Result of one snapshot fetch. The error is shared so the action stays `Clone`.
pub type JobsResult = Result<JobsSnapshot, Arc<ClientError>>;

/// Unified action type for the dashboard.
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw key press from the terminal.
    Input(KeyEvent),
    Resize(u16, u16),
    /// UI tick for toast expiry and spinner animation.
    Tick,
    Quit,
    Loading(bool),
    Notify(ToastLevel, String),

    // Data
    /// Fetch the snapshot now, regardless of auto-refresh.
    RefreshJobs,
    /// A fetch finished. `ticket` orders responses; older tickets never
    /// overwrite newer data.
    JobsLoaded { ticket: u64, result: JobsResult },
    ToggleAutoRefresh,

    // Row actions
    RetryJob(String),
    CancelJob(String),
    JobActionFinished {
        id: String,
        action: JobAction,
        outcome: ActionOutcome,
    },

    // Navigation
    NavigateUp,
    NavigateDown,
    NextPage,
    PrevPage,
    OpenDetail,
    CloseDetail,
    ScrollDetail(i16),
    ToggleHelp,

    // Filtering and sorting
    EnterFilterMode,
    FilterInput(char),
    FilterBackspace,
    CommitFilter,
    CancelFilter,
    CycleTypeFilter,
    CycleStatusFilter,
    ClearFilters,
    SortBy(SortColumn),
}

impl Action {
    /// Stable variant name for tracing spans.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Input(_) => "Input",
            Action::Resize(..) => "Resize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
            Action::Loading(_) => "Loading",
            Action::Notify(..) => "Notify",
            Action::RefreshJobs => "RefreshJobs",
            Action::JobsLoaded { .. } => "JobsLoaded",
            Action::ToggleAutoRefresh => "ToggleAutoRefresh",
            Action::RetryJob(_) => "RetryJob",
            Action::CancelJob(_) => "CancelJob",
            Action::JobActionFinished { .. } => "JobActionFinished",
            Action::NavigateUp => "NavigateUp",
            Action::NavigateDown => "NavigateDown",
            Action::NextPage => "NextPage",
            Action::PrevPage => "PrevPage",
            Action::OpenDetail => "OpenDetail",
            Action::CloseDetail => "CloseDetail",
            Action::ScrollDetail(_) => "ScrollDetail",
            Action::ToggleHelp => "ToggleHelp",
            Action::EnterFilterMode => "EnterFilterMode",
            Action::FilterInput(_) => "FilterInput",
            Action::FilterBackspace => "FilterBackspace",
            Action::CommitFilter => "CommitFilter",
            Action::CancelFilter => "CancelFilter",
            Action::CycleTypeFilter => "CycleTypeFilter",
            Action::CycleStatusFilter => "CycleStatusFilter",
            Action::ClearFilters => "ClearFilters",
            Action::SortBy(_) => "SortBy",
        }
    }
}
