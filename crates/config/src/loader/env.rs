//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `JOBWATCH_*` variables and apply them to a `ConfigLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading from the profile file (see profile.rs).
//! - Range validation (done once in `ConfigLoader::build`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable values return `ConfigError::InvalidValue` naming the variable.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("JOBWATCH_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("JOBWATCH_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("JOBWATCH_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("JOBWATCH_TIMEOUT", "must be a number of seconds")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) =
        parse_env::<usize>("JOBWATCH_MAX_RETRIES", "must be a non-negative integer")?
    {
        loader.set_max_retries(Some(retries));
    }
    if let Some(secs) =
        parse_env::<u64>("JOBWATCH_POLL_INTERVAL", "must be a number of seconds")?
    {
        loader.set_poll_interval_secs(Some(secs));
    }
    if let Some(size) = parse_env::<usize>("JOBWATCH_PAGE_SIZE", "must be a positive integer")? {
        loader.set_page_size(Some(size));
    }

    // Only fill these when the caller has not already chosen them.
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("JOBWATCH_CONFIG_PATH")
    {
        loader.set_config_path(Some(PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none("JOBWATCH_PROFILE")
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}
