//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format outputs as RFC 4180 CSV via `csv::Writer`.
//! - Flatten job results into a single JSON-encoded column.
//!
//! Does NOT handle:
//! - Table-style headers or empty-state messages (empty lists are header only).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use jobwatch_client::Job;

use super::{
    ActionReport, BandReport, ConfigView, DEFAULT_MISSING_VALUE, Formatter, HealthReport,
    JOB_HEADERS, job_row,
};

/// CSV formatter.
pub struct CsvFormatter;

fn write_records<I, R>(header: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

impl Formatter for CsvFormatter {
    fn format_jobs(&self, jobs: &[&Job], now: DateTime<Utc>) -> Result<String> {
        write_records(&JOB_HEADERS, jobs.iter().map(|job| job_row(job, now)))
    }

    fn format_job_details(&self, job: &Job, now: DateTime<Utc>) -> Result<String> {
        let mut header = JOB_HEADERS.to_vec();
        header.push("result");

        let result = match &job.result {
            Some(map) => serde_json::to_string(map)?,
            None => DEFAULT_MISSING_VALUE.to_string(),
        };
        let mut row = job_row(job, now).to_vec();
        row.push(result);

        write_records(&header, [row])
    }

    fn format_action(&self, report: &ActionReport) -> Result<String> {
        write_records(
            &["id", "action", "message"],
            [[
                report.id.as_str(),
                report.action.path_suffix(),
                report.message.as_str(),
            ]],
        )
    }

    fn format_health(&self, health: &HealthReport) -> Result<String> {
        let row = |metric: &str, b: &BandReport| {
            vec![metric.to_string(), b.count.to_string(), b.band.to_string()]
        };
        write_records(
            &["metric", "count", "band"],
            [
                vec![
                    "overall".to_string(),
                    String::new(),
                    health.overall.to_string(),
                ],
                row("queue_depth", &health.queue_depth),
                row("failed", &health.failed),
                row("processing", &health.processing),
                vec![
                    "completed".to_string(),
                    health.completed.to_string(),
                    String::new(),
                ],
            ],
        )
    }

    fn format_config(&self, config: &ConfigView) -> Result<String> {
        write_records(
            &["key", "value"],
            config
                .fields()
                .into_iter()
                .map(|(key, value)| [key.to_string(), value]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobwatch_client::JobStatus;
    use jobwatch_client::testing::{JobBuilder, reference_time};

    #[test]
    fn test_empty_jobs_is_header_only() {
        let output = CsvFormatter.format_jobs(&[], reference_time()).unwrap();
        assert_eq!(
            output,
            "id,type,status,site,progress,attempts,created,duration,error\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let now = reference_time();
        let job = JobBuilder::new("j1")
            .status(JobStatus::Failed)
            .error("timeout, upstream closed")
            .created_minutes_ago(5, now)
            .build();

        let output = CsvFormatter.format_jobs(&[&job], now).unwrap();
        assert!(output.contains("\"timeout, upstream closed\""));
    }
}
