//! Aggregate statistics and the poll snapshot.

use serde::{Deserialize, Serialize};

use crate::models::jobs::Job;

/// Per-status counts recomputed by the server on every poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsStats {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub processing: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub failed: u64,
    /// Average processing duration in seconds.
    #[serde(default)]
    pub avg_processing_time: Option<f64>,
}

impl JobsStats {
    pub fn total(&self) -> u64 {
        self.pending + self.processing + self.completed + self.failed
    }
}

/// The `data` payload of `GET /api/admin/jobs`: the complete job set plus stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsSnapshot {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub stats: JobsStats,
}

impl JobsSnapshot {
    /// Look a job up by id.
    pub fn find(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }
}
