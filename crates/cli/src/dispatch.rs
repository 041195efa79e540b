//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Build the HTTP client for commands that talk to the server.
//! - Abort the running command when the cancellation token fires.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Printing results or mapping errors to exit codes (see `main`).

use anyhow::{Context, Result};
use jobwatch_client::JobsClient;
use jobwatch_config::Config;
use tokio_util::sync::CancellationToken;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::Cancelled;
use crate::formatters::{Formatter, get_formatter};

/// Run the selected command and return its formatted output.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    profile: Option<String>,
    cancel: &CancellationToken,
) -> Result<String> {
    let formatter = get_formatter(cli.output);

    tokio::select! {
        _ = cancel.cancelled() => Err(Cancelled.into()),
        result = execute(cli.command, &config, profile, formatter.as_ref()) => result,
    }
}

async fn execute(
    command: Commands,
    config: &Config,
    profile: Option<String>,
    formatter: &dyn Formatter,
) -> Result<String> {
    match command {
        Commands::Config { command } => commands::config::run(command, config, profile, formatter),
        Commands::Jobs { command } => {
            let client = build_client(config)?;
            commands::jobs::run(&client, command, formatter).await
        }
        Commands::Health => {
            let client = build_client(config)?;
            commands::health::run(&client, config.dashboard.thresholds, formatter).await
        }
    }
}

fn build_client(config: &Config) -> Result<JobsClient> {
    JobsClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create client")
}
