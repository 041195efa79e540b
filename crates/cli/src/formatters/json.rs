//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all outputs as pretty-printed JSON using the wire field names.

use anyhow::Result;
use chrono::{DateTime, Utc};
use jobwatch_client::Job;

use super::{ActionReport, ConfigView, Formatter, HealthReport};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_jobs(&self, jobs: &[&Job], _now: DateTime<Utc>) -> Result<String> {
        Ok(serde_json::to_string_pretty(jobs)?)
    }

    fn format_job_details(&self, job: &Job, _now: DateTime<Utc>) -> Result<String> {
        Ok(serde_json::to_string_pretty(job)?)
    }

    fn format_action(&self, report: &ActionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_health(&self, health: &HealthReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(health)?)
    }

    fn format_config(&self, config: &ConfigView) -> Result<String> {
        Ok(serde_json::to_string_pretty(config)?)
    }
}
