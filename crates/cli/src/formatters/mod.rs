//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table, JSON, and CSV renderings of jobs, health, action results,
//!   and the effective configuration.
//!
//! Does NOT handle:
//! - Printing (commands write the returned string to stdout).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! Invariants:
//! - Tables are tab-separated with UPPERCASE headers.
//! - Durations and timestamps come from `jobwatch_client::display`, as in the dashboard.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty job list |
//! |--------|----------------|
//! | JSON   | `[]`           |
//! | CSV    | header only    |
//! | Table  | `No jobs found.` |
//!
//! ## Missing Values
//!
//! JSON keeps `null`; table and CSV use `N/A`.

use anyhow::Result;
use chrono::{DateTime, Utc};
use jobwatch_client::display::{format_span, format_timestamp, job_duration};
use jobwatch_client::{HealthSummary, Job, JobAction};
use jobwatch_config::{Config, HealthThresholds};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::OutputFormat;

mod csv;
mod json;
mod table;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// String used for missing values in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Result of a retry or cancel that the server accepted.
#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    pub id: String,
    pub action: JobAction,
    pub message: String,
}

impl ActionReport {
    pub fn completed(id: &str, action: JobAction) -> Self {
        Self {
            id: id.to_string(),
            action,
            message: format!("Job {id} {}", action.past_tense()),
        }
    }
}

/// One health metric with its band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BandReport {
    pub count: u64,
    pub band: &'static str,
}

/// Serializable health summary.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub overall: &'static str,
    pub queue_depth: BandReport,
    pub failed: BandReport,
    pub processing: BandReport,
    pub completed: u64,
    pub avg_processing_secs: Option<f64>,
    pub thresholds: HealthThresholds,
}

impl HealthReport {
    pub fn new(summary: &HealthSummary, thresholds: HealthThresholds) -> Self {
        Self {
            overall: summary.overall().as_str(),
            queue_depth: BandReport {
                count: summary.pending,
                band: summary.queue_depth.as_str(),
            },
            failed: BandReport {
                count: summary.failed,
                band: summary.error_rate.as_str(),
            },
            processing: BandReport {
                count: summary.processing_count,
                band: summary.processing.as_str(),
            },
            completed: summary.completed,
            avg_processing_secs: summary.avg_processing_secs,
            thresholds,
        }
    }
}

const REDACTED: &str = "********";

/// Effective configuration with the token redacted.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub profile: Option<String>,
    pub base_url: String,
    pub api_token: Option<&'static str>,
    pub skip_verify: bool,
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub poll_interval_secs: u64,
    pub page_size: usize,
    pub auto_refresh: bool,
    pub thresholds: HealthThresholds,
}

impl ConfigView {
    pub fn new(config: &Config, profile: Option<String>) -> Self {
        Self {
            profile,
            base_url: config.connection.base_url.clone(),
            api_token: config
                .auth
                .api_token
                .as_ref()
                .filter(|token| !token.expose_secret().is_empty())
                .map(|_| REDACTED),
            skip_verify: config.connection.skip_verify,
            timeout_secs: config.connection.timeout.as_secs(),
            max_retries: config.connection.max_retries,
            poll_interval_secs: config.dashboard.poll_interval_secs,
            page_size: config.dashboard.page_size,
            auto_refresh: config.dashboard.auto_refresh,
            thresholds: config.dashboard.thresholds,
        }
    }

    /// `(key, value)` pairs for flat formats.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let optional = |value: Option<u64>| {
            value.map_or_else(|| DEFAULT_MISSING_VALUE.to_string(), |v| v.to_string())
        };
        vec![
            (
                "profile",
                self.profile
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string()),
            ),
            ("base_url", self.base_url.clone()),
            (
                "api_token",
                self.api_token.unwrap_or(DEFAULT_MISSING_VALUE).to_string(),
            ),
            ("skip_verify", self.skip_verify.to_string()),
            ("timeout_secs", self.timeout_secs.to_string()),
            ("max_retries", self.max_retries.to_string()),
            ("poll_interval_secs", self.poll_interval_secs.to_string()),
            ("page_size", self.page_size.to_string()),
            ("auto_refresh", self.auto_refresh.to_string()),
            ("queue_warning", self.thresholds.queue_warning.to_string()),
            ("queue_critical", self.thresholds.queue_critical.to_string()),
            ("failed_warning", self.thresholds.failed_warning.to_string()),
            ("failed_critical", optional(self.thresholds.failed_critical)),
            ("processing_warning", optional(self.thresholds.processing_warning)),
        ]
    }
}

/// Flat row for one job in table and CSV output.
pub(crate) fn job_row(job: &Job, now: DateTime<Utc>) -> [String; 9] {
    [
        job.id.clone(),
        job.job_type.as_str().to_string(),
        job.status.as_str().to_string(),
        job.site_label().unwrap_or(DEFAULT_MISSING_VALUE).to_string(),
        format!("{}%", job.progress),
        job.attempts.to_string(),
        format_timestamp(job.created_at),
        duration_or_missing(job, now),
        job.error.clone().unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string()),
    ]
}

pub(crate) const JOB_HEADERS: [&str; 9] = [
    "id", "type", "status", "site", "progress", "attempts", "created", "duration", "error",
];

fn duration_or_missing(job: &Job, now: DateTime<Utc>) -> String {
    job_duration(job, now)
        .map(format_span)
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

/// Formatter trait for the supported output types.
pub trait Formatter {
    fn format_jobs(&self, jobs: &[&Job], now: DateTime<Utc>) -> Result<String>;

    fn format_job_details(&self, job: &Job, now: DateTime<Utc>) -> Result<String>;

    fn format_action(&self, report: &ActionReport) -> Result<String>;

    fn format_health(&self, health: &HealthReport) -> Result<String>;

    fn format_config(&self, config: &ConfigView) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
