//! Testing utilities for jobwatch client tests.
//!
//! Fixture loading plus a builder for lifecycle-consistent `Job` values.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use jobwatch_client::testing::{load_fixture, JobBuilder};
//! use jobwatch_client::JobStatus;
//!
//! let fixture = load_fixture("jobs/list_jobs.json");
//! let job = JobBuilder::new("j1").status(JobStatus::Failed).error("timeout").build();
//! ```

#[cfg(feature = "test-utils")]
pub mod strategies;

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::Path;

use crate::models::{Job, JobStatus, JobType, JobsSnapshot, JobsStats, Progress};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Fixed creation time used when a test does not care.
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0)
        .single()
        .expect("valid reference time")
}

/// Builds `Job` values whose timestamps agree with their status.
///
/// Timestamps derive from `created_at`: a started job began 5 s later and a
/// finished one completed 60 s after starting.
#[derive(Debug, Clone)]
pub struct JobBuilder {
    id: String,
    job_type: JobType,
    status: JobStatus,
    site_id: Option<String>,
    site_domain: Option<String>,
    result: Option<serde_json::Map<String, serde_json::Value>>,
    error: Option<String>,
    progress: u8,
    attempts: u32,
    created_at: DateTime<Utc>,
    run_secs: i64,
}

impl JobBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_type: JobType::CrawlSite,
            status: JobStatus::Pending,
            site_id: None,
            site_domain: None,
            result: None,
            error: None,
            progress: 0,
            attempts: 1,
            created_at: reference_time(),
            run_secs: 60,
        }
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn site(mut self, id: impl Into<String>, domain: impl Into<String>) -> Self {
        self.site_id = Some(id.into());
        self.site_domain = Some(domain.into());
        self
    }

    pub fn site_id(mut self, id: impl Into<String>) -> Self {
        self.site_id = Some(id.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn result(mut self, result: serde_json::Value) -> Self {
        self.result = result.as_object().cloned();
        self
    }

    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    pub fn attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn created_minutes_ago(self, minutes: i64, now: DateTime<Utc>) -> Self {
        self.created_at(now - Duration::minutes(minutes))
    }

    /// Seconds between start and completion for finished jobs.
    pub fn run_secs(mut self, secs: i64) -> Self {
        self.run_secs = secs;
        self
    }

    pub fn build(self) -> Job {
        let started_at =
            (self.status != JobStatus::Pending).then(|| self.created_at + Duration::seconds(5));
        let completed_at = if self.status.is_terminal() {
            started_at.map(|started| started + Duration::seconds(self.run_secs))
        } else {
            None
        };

        Job {
            id: self.id,
            job_type: self.job_type,
            status: self.status,
            site_id: self.site_id,
            site_domain: self.site_domain,
            result: self.result,
            error: self.error,
            progress: Progress::new(self.progress),
            attempts: self.attempts,
            created_at: self.created_at,
            started_at,
            completed_at,
        }
    }
}

/// Snapshot whose stats are counted from `jobs`.
pub fn snapshot_of(jobs: Vec<Job>) -> JobsSnapshot {
    let mut stats = JobsStats::default();
    for job in &jobs {
        match job.status {
            JobStatus::Pending => stats.pending += 1,
            JobStatus::Processing => stats.processing += 1,
            JobStatus::Completed => stats.completed += 1,
            JobStatus::Failed => stats.failed += 1,
        }
    }
    JobsSnapshot { jobs, stats }
}
