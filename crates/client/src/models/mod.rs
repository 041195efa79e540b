//! Data models for the admin jobs API.
//!
//! Types are organized by concern in submodules and re-exported here.

pub mod action;
pub mod envelope;
pub mod jobs;
pub mod stats;

pub use action::{ActionOutcome, JobAction};
pub use envelope::ApiEnvelope;
pub use jobs::{Job, JobStatus, JobType, LifecycleViolation, Progress};
pub use stats::{JobsSnapshot, JobsStats};
