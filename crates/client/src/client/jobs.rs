//! Job API methods for [`JobsClient`].
//!
//! # What this module handles:
//! - Fetching the job snapshot and logging lifecycle violations
//! - Issuing retry/cancel and folding the result into [`ActionOutcome`]
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints::jobs`])
//! - Deciding whether an action is allowed for a status (the caller's job)

use crate::client::JobsClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{ActionOutcome, Job, JobAction, JobsSnapshot};

impl JobsClient {
    /// Fetch every job plus aggregate stats.
    ///
    /// Records that break lifecycle invariants are kept and logged.
    pub async fn list_jobs(&self) -> Result<JobsSnapshot> {
        let snapshot = endpoints::list_jobs(
            &self.http,
            &self.base_url,
            self.token(),
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await?;

        let mut inconsistent = 0usize;
        for job in &snapshot.jobs {
            let violations = job.lifecycle_violations();
            if violations.is_empty() {
                continue;
            }
            inconsistent += 1;
            let details = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(job_id = %job.id, status = %job.status, %details, "Job violates lifecycle invariants");
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_lifecycle_violations(inconsistent);
        }

        tracing::debug!(
            jobs = snapshot.jobs.len(),
            pending = snapshot.stats.pending,
            failed = snapshot.stats.failed,
            "Fetched jobs snapshot"
        );
        Ok(snapshot)
    }

    /// Fetch the snapshot and pick one job out of it.
    ///
    /// The admin API has no single-job endpoint.
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        let snapshot = self.list_jobs().await?;
        snapshot
            .jobs
            .into_iter()
            .find(|job| job.id == job_id)
            .ok_or_else(|| ClientError::NotFound(job_id.to_string()))
    }

    /// Issue a retry or cancel and classify the result.
    ///
    /// The envelope's `success` flag is checked explicitly: a 2xx response
    /// with `success: false` is a [`ActionOutcome::DomainError`].
    pub async fn job_action(&self, job_id: &str, action: JobAction) -> ActionOutcome {
        let result = endpoints::send_job_action(
            &self.http,
            &self.base_url,
            self.token(),
            job_id,
            action,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await;

        match result {
            Ok(envelope) if envelope.success => ActionOutcome::Completed,
            Ok(envelope) => ActionOutcome::DomainError(envelope.failure_message()),
            Err(e) => ActionOutcome::TransportError(e.to_string()),
        }
    }

    /// Retry a FAILED job.
    pub async fn retry_job(&self, job_id: &str) -> ActionOutcome {
        self.job_action(job_id, JobAction::Retry).await
    }

    /// Cancel a PENDING or PROCESSING job.
    pub async fn cancel_job(&self, job_id: &str) -> ActionOutcome {
        self.job_action(job_id, JobAction::Cancel).await
    }
}
