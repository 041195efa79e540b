//! Job record models.
//!
//! # What this module handles:
//! - The closed `JobType` and `JobStatus` enumerations and their wire names
//! - The `Job` record as delivered by `GET /api/admin/jobs`
//! - Lifecycle invariant checks on a received record
//! - `Progress`, which clamps a malformed percentage instead of rejecting the record
//!
//! # What this module does NOT handle:
//! - Presentation (see [`crate::display`] and the dashboard)
//! - HTTP transport (see [`crate::endpoints`])
//!
//! # Invariants
//! - Unknown `type` or `status` values fail deserialization; the enumerations are closed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    CrawlSite,
    AnalyzeSite,
    CleanupRollbacks,
    ResetUsage,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::CrawlSite,
        JobType::AnalyzeSite,
        JobType::CleanupRollbacks,
        JobType::ResetUsage,
    ];

    /// Wire name, e.g. `CRAWL_SITE`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            JobType::CrawlSite => "CRAWL_SITE",
            JobType::AnalyzeSite => "ANALYZE_SITE",
            JobType::CleanupRollbacks => "CLEANUP_ROLLBACKS",
            JobType::ResetUsage => "RESET_USAGE",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    /// Accepts the wire name in any case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown job type '{s}' (expected one of: crawl_site, analyze_site, cleanup_rollbacks, reset_usage)"
                )
            })
    }
}

/// Lifecycle state of a job.
///
/// Transitions are owned by the remote queue:
/// PENDING → PROCESSING → COMPLETED | FAILED, and FAILED → PENDING on retry.
/// Ordering follows the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Failed,
    ];

    /// Wire name, e.g. `PROCESSING`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }

    /// COMPLETED and FAILED are terminal until a retry.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Only failed jobs can be retried.
    pub const fn can_retry(&self) -> bool {
        matches!(self, JobStatus::Failed)
    }

    /// Jobs that have not finished can be cancelled.
    pub const fn can_cancel(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Processing)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown job status '{s}' (expected one of: pending, processing, completed, failed)"
                )
            })
    }
}

/// A unit of asynchronous work tracked by the remote queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    #[serde(default)]
    pub site_id: Option<String>,
    #[serde(default)]
    pub site_domain: Option<String>,
    /// Open key/value payload, only present on COMPLETED.
    #[serde(default)]
    pub result: Option<serde_json::Map<String, serde_json::Value>>,
    /// Failure text, only present on FAILED.
    #[serde(default)]
    pub error: Option<String>,
    /// Percentage 0–100, meaningful while PROCESSING.
    #[serde(default)]
    pub progress: Progress,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_attempts() -> u32 {
    1
}

/// Completion percentage as reported by the server.
///
/// Any JSON number (or `null`) is accepted. Display and sorting use the value
/// rounded and clamped to 0–100; a report that was not a whole number in that
/// range is kept so [`Job::lifecycle_violations`] can flag it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    percent: u8,
    malformed: Option<f64>,
}

impl Progress {
    pub fn new(percent: u8) -> Self {
        Self::from_reported(f64::from(percent))
    }

    pub fn from_reported(value: f64) -> Self {
        let whole_in_range = value.fract() == 0.0 && (0.0..=100.0).contains(&value);
        let percent = if value.is_nan() {
            0
        } else {
            value.round().clamp(0.0, 100.0) as u8
        };
        Self {
            percent,
            malformed: (!whole_in_range).then_some(value),
        }
    }

    /// Clamped percentage for display and sorting.
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// The raw report when it was not a whole number in 0–100.
    pub const fn malformed(&self) -> Option<f64> {
        self.malformed
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent)
    }
}

impl Serialize for Progress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.percent)
    }
}

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?
            .map(Progress::from_reported)
            .unwrap_or_default())
    }
}

/// A broken lifecycle invariant on a received job record.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleViolation {
    /// `startedAt` must be null exactly when the job is PENDING.
    StartedAt { status: JobStatus },
    /// `completedAt` must be set exactly when the job is COMPLETED or FAILED.
    CompletedAt { status: JobStatus },
    /// `result` and `error` are mutually exclusive.
    ResultAndError,
    /// `result`/`error` must be null while PENDING or PROCESSING.
    PayloadWhileActive { status: JobStatus },
    /// `progress` outside 0–100 or not a whole number.
    ProgressOutOfRange(f64),
    /// `attempts` must start at 1.
    ZeroAttempts,
}

impl fmt::Display for LifecycleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleViolation::StartedAt { status } => {
                write!(f, "startedAt inconsistent with status {status}")
            }
            LifecycleViolation::CompletedAt { status } => {
                write!(f, "completedAt inconsistent with status {status}")
            }
            LifecycleViolation::ResultAndError => write!(f, "both result and error are set"),
            LifecycleViolation::PayloadWhileActive { status } => {
                write!(f, "result/error set while {status}")
            }
            LifecycleViolation::ProgressOutOfRange(p) => {
                write!(f, "progress {p} is not a whole percentage in 0-100")
            }
            LifecycleViolation::ZeroAttempts => write!(f, "attempts is 0"),
        }
    }
}

impl Job {
    /// Check the record against the queue's lifecycle invariants.
    ///
    /// An empty list means the record is consistent.
    pub fn lifecycle_violations(&self) -> Vec<LifecycleViolation> {
        let mut violations = Vec::new();
        let status = self.status;

        if self.started_at.is_none() != (status == JobStatus::Pending) {
            violations.push(LifecycleViolation::StartedAt { status });
        }
        if self.completed_at.is_some() != status.is_terminal() {
            violations.push(LifecycleViolation::CompletedAt { status });
        }
        if self.result.is_some() && self.error.is_some() {
            violations.push(LifecycleViolation::ResultAndError);
        }
        if !status.is_terminal() && (self.result.is_some() || self.error.is_some()) {
            violations.push(LifecycleViolation::PayloadWhileActive { status });
        }
        if let Some(reported) = self.progress.malformed() {
            violations.push(LifecycleViolation::ProgressOutOfRange(reported));
        }
        if self.attempts == 0 {
            violations.push(LifecycleViolation::ZeroAttempts);
        }

        violations
    }

    /// Site label for display: domain, else id.
    pub fn site_label(&self) -> Option<&str> {
        self.site_domain.as_deref().or(self.site_id.as_deref())
    }

    /// Time spent running: `(completedAt or now) - startedAt`, clamped at zero.
    ///
    /// `None` until the job has started.
    pub fn elapsed_at(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let started = self.started_at?;
        let end = self.completed_at.unwrap_or(now);
        Some((end - started).max(chrono::Duration::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::JobBuilder;
    use serde_json::json;

    #[test]
    fn test_job_deserializes_camel_case_wire_format() {
        let job: Job = serde_json::from_value(json!({
            "id": "j1",
            "type": "CRAWL_SITE",
            "status": "FAILED",
            "siteId": "s1",
            "siteDomain": "shop.example.com",
            "error": "timeout",
            "progress": null,
            "attempts": 2,
            "createdAt": "2026-01-10T09:00:00Z",
            "startedAt": "2026-01-10T09:00:05Z",
            "completedAt": "2026-01-10T09:01:00Z"
        }))
        .unwrap();

        assert_eq!(job.job_type, JobType::CrawlSite);
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.site_label(), Some("shop.example.com"));
        assert_eq!(job.progress, Progress::default());
        assert_eq!(job.attempts, 2);
        assert!(job.lifecycle_violations().is_empty());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Job, _> = serde_json::from_value(json!({
            "id": "j1",
            "type": "CRAWL_SITE",
            "status": "PAUSED",
            "createdAt": "2026-01-10T09:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_capabilities() {
        assert!(JobStatus::Failed.can_retry());
        assert!(!JobStatus::Completed.can_retry());
        assert!(JobStatus::Pending.can_cancel());
        assert!(JobStatus::Processing.can_cancel());
        assert!(!JobStatus::Failed.can_cancel());
        assert!(!JobStatus::Completed.can_cancel());
    }

    #[test]
    fn test_from_str_accepts_cli_spellings() {
        assert_eq!("crawl-site".parse::<JobType>().unwrap(), JobType::CrawlSite);
        assert_eq!(
            "RESET_USAGE".parse::<JobType>().unwrap(),
            JobType::ResetUsage
        );
        assert_eq!("failed".parse::<JobStatus>().unwrap(), JobStatus::Failed);
        assert!("crawl".parse::<JobType>().is_err());
    }

    #[test]
    fn test_elapsed_uses_now_until_completed() {
        let job = JobBuilder::new("j1").status(JobStatus::Processing).build();
        let started = job.started_at.unwrap();
        let now = started + chrono::Duration::seconds(65);
        assert_eq!(job.elapsed_at(now), Some(chrono::Duration::seconds(65)));

        let pending = JobBuilder::new("j2").status(JobStatus::Pending).build();
        assert_eq!(pending.elapsed_at(now), None);

        // Clock skew never produces a negative span.
        let before_start = started - chrono::Duration::seconds(10);
        assert_eq!(job.elapsed_at(before_start), Some(chrono::Duration::zero()));
    }

    #[test]
    fn test_pending_with_started_at_is_flagged() {
        let mut job = JobBuilder::new("j1").status(JobStatus::Pending).build();
        assert!(job.lifecycle_violations().is_empty());

        job.started_at = Some(job.created_at);
        assert_eq!(
            job.lifecycle_violations(),
            vec![LifecycleViolation::StartedAt {
                status: JobStatus::Pending
            }]
        );
    }

    #[test]
    fn test_completed_without_completed_at_is_flagged() {
        let mut job = JobBuilder::new("j1").status(JobStatus::Completed).build();
        job.completed_at = None;
        assert!(job.lifecycle_violations().contains(&LifecycleViolation::CompletedAt {
            status: JobStatus::Completed
        }));
    }

    #[test]
    fn test_payload_rules() {
        let mut job = JobBuilder::new("j1")
            .status(JobStatus::Processing)
            .error("boom")
            .build();
        assert!(job.lifecycle_violations().contains(&LifecycleViolation::PayloadWhileActive {
            status: JobStatus::Processing
        }));

        job.status = JobStatus::Failed;
        job.completed_at = Some(job.created_at);
        job.result = Some(serde_json::Map::new());
        assert_eq!(
            job.lifecycle_violations(),
            vec![LifecycleViolation::ResultAndError]
        );
    }

    fn processing_with_progress(progress: serde_json::Value) -> Job {
        serde_json::from_value(json!({
            "id": "j2",
            "type": "ANALYZE_SITE",
            "status": "PROCESSING",
            "progress": progress,
            "createdAt": "2026-01-10T09:00:00Z",
            "startedAt": "2026-01-10T09:00:05Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_out_of_range_progress_is_clamped_and_flagged() {
        let job = processing_with_progress(json!(300));
        assert_eq!(job.progress.percent(), 100);
        assert_eq!(
            job.lifecycle_violations(),
            vec![LifecycleViolation::ProgressOutOfRange(300.0)]
        );

        let job = processing_with_progress(json!(-4));
        assert_eq!(job.progress.percent(), 0);
        assert_eq!(job.lifecycle_violations().len(), 1);
    }

    #[test]
    fn test_fractional_progress_is_rounded_and_flagged() {
        let job = processing_with_progress(json!(42.6));
        assert_eq!(job.progress.percent(), 43);
        assert_eq!(
            job.lifecycle_violations(),
            vec![LifecycleViolation::ProgressOutOfRange(42.6)]
        );
    }

    #[test]
    fn test_whole_progress_is_clean_and_serializes_as_integer() {
        let job = processing_with_progress(json!(55));
        assert_eq!(job.progress.percent(), 55);
        assert!(job.lifecycle_violations().is_empty());
        assert_eq!(serde_json::to_value(job.progress).unwrap(), json!(55));
    }
}
