//! Table formatter.
//!
//! Responsibilities:
//! - Format job lists as tab-separated tables with UPPERCASE headers.
//! - Format job details, health, action results, and config as key/value blocks.

use anyhow::Result;
use chrono::{DateTime, Utc};
use jobwatch_client::Job;
use jobwatch_client::display::{format_result, format_timestamp};

use super::{
    ActionReport, BandReport, ConfigView, DEFAULT_MISSING_VALUE, Formatter, HealthReport,
    JOB_HEADERS, duration_or_missing, job_row,
};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_jobs(&self, jobs: &[&Job], now: DateTime<Utc>) -> Result<String> {
        if jobs.is_empty() {
            return Ok("No jobs found.".to_string());
        }

        let mut output = String::new();
        let header: Vec<String> = JOB_HEADERS.iter().map(|h| h.to_uppercase()).collect();
        output.push_str(&header.join("\t"));
        output.push('\n');

        for job in jobs {
            output.push_str(&job_row(job, now).join("\t"));
            output.push('\n');
        }

        Ok(output)
    }

    fn format_job_details(&self, job: &Job, now: DateTime<Utc>) -> Result<String> {
        let mut output = String::new();

        output.push_str("--- Job Details ---\n");
        output.push_str(&format!("ID: {}\n", job.id));
        output.push_str(&format!("Type: {}\n", job.job_type.as_str()));
        output.push_str(&format!("Status: {}\n", job.status.as_str()));
        output.push_str(&format!(
            "Site: {}\n",
            job.site_label().unwrap_or(DEFAULT_MISSING_VALUE)
        ));
        output.push_str(&format!("Progress: {}%\n", job.progress));
        output.push_str(&format!("Attempts: {}\n", job.attempts));
        output.push_str(&format!("Created: {}\n", format_timestamp(job.created_at)));
        output.push_str(&format!("Started: {}\n", timestamp_or_missing(job.started_at)));
        output.push_str(&format!(
            "Completed: {}\n",
            timestamp_or_missing(job.completed_at)
        ));
        output.push_str(&format!("Duration: {}\n", duration_or_missing(job, now)));

        if let Some(error) = &job.error {
            output.push_str("\n--- Error ---\n");
            output.push_str(error);
            output.push('\n');
        }

        if let Some(result) = job.result.as_ref().filter(|r| !r.is_empty()) {
            output.push_str("\n--- Result ---\n");
            for line in format_result(result) {
                output.push_str(&line);
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn format_action(&self, report: &ActionReport) -> Result<String> {
        Ok(format!("{}\n", report.message))
    }

    fn format_health(&self, health: &HealthReport) -> Result<String> {
        let band = |b: &BandReport| format!("{}\t{}", b.count, b.band.to_uppercase());

        let mut output = String::new();
        output.push_str(&format!("Overall: {}\n\n", health.overall.to_uppercase()));
        output.push_str("METRIC\tCOUNT\tBAND\n");
        output.push_str(&format!("Queue depth\t{}\n", band(&health.queue_depth)));
        output.push_str(&format!("Failed\t{}\n", band(&health.failed)));
        output.push_str(&format!("Processing\t{}\n", band(&health.processing)));
        output.push_str(&format!("Completed\t{}\t-\n", health.completed));
        output.push_str(&format!(
            "\nAvg processing time: {}\n",
            health
                .avg_processing_secs
                .map(|secs| format!("{secs:.1}s"))
                .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
        ));
        Ok(output)
    }

    fn format_config(&self, config: &ConfigView) -> Result<String> {
        let fields = config.fields();
        let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let mut output = String::new();
        for (key, value) in fields {
            output.push_str(&format!("{key:<width$}  {value}\n"));
        }
        Ok(output)
    }
}

fn timestamp_or_missing(ts: Option<DateTime<Utc>>) -> String {
    ts.map(format_timestamp)
        .unwrap_or_else(|| DEFAULT_MISSING_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_client::JobStatus;
    use jobwatch_client::testing::{JobBuilder, reference_time};
    use serde_json::json;

    #[test]
    fn test_empty_jobs_message() {
        let output = TableFormatter.format_jobs(&[], reference_time()).unwrap();
        assert_eq!(output, "No jobs found.");
    }

    #[test]
    fn test_jobs_table_has_uppercase_headers() {
        let now = reference_time();
        let job = JobBuilder::new("j1")
            .status(JobStatus::Failed)
            .error("timeout")
            .created_minutes_ago(10, now)
            .run_secs(65)
            .build();

        let output = TableFormatter.format_jobs(&[&job], now).unwrap();
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("ID\tTYPE\tSTATUS\tSITE"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("j1\t"));
        assert!(row.contains("\tFAILED\t"));
        assert!(row.contains("\t65s\t"));
        assert!(row.ends_with("\ttimeout"));
    }

    #[test]
    fn test_pending_job_has_missing_duration() {
        let now = reference_time();
        let job = JobBuilder::new("j4").created_minutes_ago(1, now).build();

        let output = TableFormatter.format_job_details(&job, now).unwrap();
        assert!(output.contains("Status: PENDING"));
        assert!(output.contains("Started: N/A"));
        assert!(output.contains("Duration: N/A"));
        assert!(!output.contains("--- Error ---"));
    }

    #[test]
    fn test_details_include_result_block() {
        let now = reference_time();
        let job = JobBuilder::new("j3")
            .status(JobStatus::Completed)
            .result(json!({"deleted": 12, "scanned": 340}))
            .created_minutes_ago(30, now)
            .build();

        let output = TableFormatter.format_job_details(&job, now).unwrap();
        assert!(output.contains("--- Result ---"));
        assert!(output.contains("deleted  12"));
        assert!(output.contains("scanned  340"));
    }
}
