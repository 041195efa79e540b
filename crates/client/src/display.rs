//! Terminal-independent text for jobs: type labels, durations, timestamps,
//! and result payloads.
//!
//! Durations take `now` explicitly so callers and tests control the clock.

use chrono::{DateTime, Local, Utc};
use serde_json::{Map, Value};

use crate::models::{Job, JobType};

/// Human label for a job type, e.g. `Crawl site`.
pub fn type_label(job_type: JobType) -> &'static str {
    match job_type {
        JobType::CrawlSite => "Crawl site",
        JobType::AnalyzeSite => "Analyze site",
        JobType::CleanupRollbacks => "Cleanup rollbacks",
        JobType::ResetUsage => "Reset usage",
    }
}

/// Run time so far, or total run time for finished jobs. `None` before start.
pub fn job_duration(job: &Job, now: DateTime<Utc>) -> Option<chrono::Duration> {
    job.elapsed_at(now)
}

/// Compact duration: `65s`, `12m 5s`, `2h 3m`.
pub fn format_span(span: chrono::Duration) -> String {
    let secs = span.num_seconds().max(0);
    if secs < 120 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// One line per key, keys left-padded to the widest key.
///
/// Strings render verbatim; everything else renders as compact JSON.
pub fn format_result(result: &Map<String, Value>) -> Vec<String> {
    let width = result.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    result
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{key:<width$}  {rendered}")
        })
        .collect()
}
