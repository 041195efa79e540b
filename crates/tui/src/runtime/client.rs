//! Admin API client construction for the dashboard.

use anyhow::{Context, Result};
use jobwatch_client::{JobsClient, MetricsCollector};
use jobwatch_config::Config;

/// Build the shared client from configuration.
pub fn create_client(config: &Config, metrics: Option<MetricsCollector>) -> Result<JobsClient> {
    let mut builder = JobsClient::builder().from_config(config);
    if let Some(metrics) = metrics {
        builder = builder.metrics(metrics);
    }
    builder.build().context("Failed to build admin API client")
}
