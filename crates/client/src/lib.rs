//! Admin jobs API client.
//!
//! This crate provides a typed client for the job-queue admin REST API:
//! listing the job snapshot and issuing retry/cancel commands. It also owns
//! the job data model plus the filtering/sorting rules, health bands, and
//! plain-text formatting shared by the CLI and the dashboard.

pub mod client;
pub mod display;
pub mod endpoints;
pub mod error;
pub mod health;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod query;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::JobsClient;
pub use client::builder::JobsClientBuilder;
pub use error::{ClientError, Result};
pub use health::{HealthBand, HealthSummary};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    ActionOutcome, ApiEnvelope, Job, JobAction, JobStatus, JobType, JobsSnapshot, JobsStats,
    LifecycleViolation, Progress,
};
pub use query::{JobQuery, SortColumn, SortDirection, SortSpec};
