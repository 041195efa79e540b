//! Proptest strategies for job records.

use chrono::Duration;
use proptest::prelude::*;

use super::{JobBuilder, reference_time};
use crate::models::{Job, JobStatus, JobType};

pub fn job_type() -> impl Strategy<Value = JobType> {
    prop::sample::select(JobType::ALL.to_vec())
}

pub fn job_status() -> impl Strategy<Value = JobStatus> {
    prop::sample::select(JobStatus::ALL.to_vec())
}

/// A lifecycle-consistent job with a random id, type, status, site and age.
pub fn job() -> impl Strategy<Value = Job> {
    (
        "[a-z0-9]{4,10}",
        job_type(),
        job_status(),
        prop::option::of("[a-z]{3,8}\\.example\\.com"),
        0u8..=100,
        1u32..5,
        0i64..10_000,
        0i64..600,
    )
        .prop_map(
            |(id, job_type, status, domain, progress, attempts, age_secs, run_secs)| {
                let mut builder = JobBuilder::new(id)
                    .job_type(job_type)
                    .status(status)
                    .progress(progress)
                    .attempts(attempts)
                    .run_secs(run_secs)
                    .created_at(reference_time() - Duration::seconds(age_secs));
                if let Some(domain) = domain {
                    builder = builder.site("site-1", domain);
                }
                if status == JobStatus::Failed {
                    builder = builder.error("worker crashed");
                }
                builder.build()
            },
        )
}

pub fn jobs(max: usize) -> impl Strategy<Value = Vec<Job>> {
    prop::collection::vec(job(), 0..max)
}
