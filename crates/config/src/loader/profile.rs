//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the profile file path and read the named profile.
//! - Apply profile settings to a `ConfigLoader` instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//!
//! Invariants:
//! - Profile settings are applied before environment variables.
//! - A missing file or profile is recorded, and `build()` decides whether it is fatal.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{ProfilesFile, default_config_path};
use crate::types::ProfileConfig;

/// Apply the selected profile from the profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => {
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?
        }
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file does not exist");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = ProfilesFile::read(&config_path)?;
    match file.profiles.get(&profile_name) {
        Some(profile) => {
            apply_profile_config(loader, profile);
            Ok(())
        }
        None => {
            loader.set_profile_missing(Some(profile_name));
            Ok(())
        }
    }
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(token) = &profile.api_token {
        loader.set_api_token(Some(SecretString::new(token.clone().into())));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = profile.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(dashboard) = &profile.dashboard {
        loader.set_poll_interval_secs(Some(dashboard.poll_interval_secs));
        loader.set_page_size(Some(dashboard.page_size));
        loader.set_auto_refresh(Some(dashboard.auto_refresh));
        loader.set_thresholds(Some(dashboard.thresholds));
    }
}
