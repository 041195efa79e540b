//! Configuration loading for CLI commands.
//!
//! Responsibilities:
//! - Merge profile, environment, and global CLI flags into a `Config`.
//!
//! Does NOT handle:
//! - Loading `.env` (done in `main` before clap parses, so `.env` can feed
//!   clap's `env` defaults).
//!
//! Invariants:
//! - Precedence: CLI args > env vars > profile > defaults.

use anyhow::{Context, Result};
use jobwatch_config::{Config, ConfigLoader};
use std::time::Duration;

use crate::args::Cli;

/// Build the effective configuration and report the selected profile, if any.
pub fn load_config(cli: &Cli) -> Result<(Config, Option<String>)> {
    let mut loader = ConfigLoader::new();

    // Blank paths fall back to the env var / default location.
    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile) = &cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    let loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;
    let profile_name = loader.profile_name().cloned();
    let mut loader = loader
        .from_profile()
        .context("Failed to load configuration from profile")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(token) = &cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    let config = loader.build().context("Failed to build configuration")?;
    Ok((config, profile_name))
}
