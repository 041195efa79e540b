//! Row formatting: status badges, type icons, durations, and timestamps.
//!
//! All functions are pure. Plain-text helpers shared with the CLI live in
//! [`jobwatch_client::display`] and are re-exported here.

use chrono::{DateTime, Utc};
use jobwatch_client::{Job, JobStatus, JobType};

pub use jobwatch_client::display::{
    format_result, format_span, format_timestamp, job_duration, type_label,
};

use crate::ui::theme::spinner_char;

/// Placeholder for values that do not exist yet (e.g. a duration before start).
pub const PLACEHOLDER: &str = "—";

/// Semantic colour of a badge; mapped to concrete colours by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Danger,
}

/// Visual status indicator for a table row or the detail header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub glyph: char,
    pub tone: Tone,
    /// The glyph cycles through spinner frames while rendering.
    pub animated: bool,
}

impl StatusBadge {
    /// Glyph for the given animation frame.
    pub fn glyph_at(&self, frame: u8) -> char {
        if self.animated {
            spinner_char(frame)
        } else {
            self.glyph
        }
    }
}

pub fn status_badge(status: JobStatus) -> StatusBadge {
    match status {
        JobStatus::Pending => StatusBadge {
            label: "Pending",
            glyph: '○',
            tone: Tone::Neutral,
            animated: false,
        },
        JobStatus::Processing => StatusBadge {
            label: "Processing",
            glyph: spinner_char(0),
            tone: Tone::Info,
            animated: true,
        },
        JobStatus::Completed => StatusBadge {
            label: "Completed",
            glyph: '✓',
            tone: Tone::Success,
            animated: false,
        },
        JobStatus::Failed => StatusBadge {
            label: "Failed",
            glyph: '✗',
            tone: Tone::Danger,
            animated: false,
        },
    }
}

pub fn type_icon(job_type: JobType) -> &'static str {
    match job_type {
        JobType::CrawlSite => "⌕",
        JobType::AnalyzeSite => "◈",
        JobType::CleanupRollbacks => "⟲",
        JobType::ResetUsage => "↺",
    }
}

pub fn format_duration(job: &Job, now: DateTime<Utc>) -> String {
    job_duration(job, now)
        .map(format_span)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Jobs that needed more than one attempt get the warning colour.
pub fn attempts_flagged(job: &Job) -> bool {
    job.attempts > 1
}

pub fn format_optional_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Short relative age, e.g. `3m ago`.
pub fn format_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} ago", format_span(now - ts))
}

/// Site column text: domain when known, else the id, else the placeholder.
pub fn site_label(job: &Job) -> &str {
    job.site_label().unwrap_or(PLACEHOLDER)
}
