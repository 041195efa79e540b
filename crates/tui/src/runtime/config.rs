//! Configuration loading for the dashboard.
//!
//! Invariants:
//! - Precedence: CLI args > env vars > profile > defaults.
//! - `load_dotenv()` runs before anything else reads the environment.

use anyhow::{Context, Result};
use jobwatch_config::{Config, ConfigLoader};

use crate::app::ConnectionContext;
use crate::cli::Cli;

/// Load configuration and report the profile that was selected, if any.
pub fn load_config(cli: &Cli) -> Result<(Config, Option<String>)> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(profile) = &cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    // Env first so JOBWATCH_PROFILE / JOBWATCH_CONFIG_PATH select the
    // profile, then again so env values win over the profile.
    let loader = loader.from_env()?;
    let profile_name = loader.profile_name().cloned();
    let mut loader = loader.from_profile()?.from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(token) = &cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(secs) = cli.poll_interval {
        loader = loader.with_poll_interval_secs(secs);
    }
    if let Some(size) = cli.page_size {
        loader = loader.with_page_size(size);
    }
    if cli.no_auto_refresh {
        loader = loader.with_auto_refresh(false);
    }

    let config = loader.build().context("Invalid configuration")?;
    Ok((config, profile_name))
}

/// Header details for the loaded configuration.
pub fn connection_context(config: &Config, profile_name: Option<String>) -> ConnectionContext {
    ConnectionContext {
        profile_name,
        base_url: config.connection.base_url.clone(),
        auth_mode: if config.auth.api_token.is_some() {
            "token".to_string()
        } else {
            "session".to_string()
        },
    }
}
