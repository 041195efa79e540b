//! `health` command: band the current queue stats against the configured thresholds.

use anyhow::{Context, Result};
use jobwatch_client::{HealthSummary, JobsClient};
use jobwatch_config::HealthThresholds;
use tracing::info;

use crate::formatters::{Formatter, HealthReport};

pub async fn run(
    client: &JobsClient,
    thresholds: HealthThresholds,
    formatter: &dyn Formatter,
) -> Result<String> {
    info!("Checking queue health");
    let snapshot = client
        .list_jobs()
        .await
        .context("Failed to fetch job stats")?;

    let summary = HealthSummary::evaluate(&snapshot.stats, &thresholds);
    formatter.format_health(&HealthReport::new(&summary, thresholds))
}
