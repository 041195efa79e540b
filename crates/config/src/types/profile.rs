//! Profile configuration types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Support partial configuration (all fields optional).
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - ProfileConfig uses `#[serde(default)]` so older files keep parsing.

use crate::types::dashboard::DashboardConfig;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the web application
    pub base_url: Option<String>,
    /// Bearer token for the admin API
    pub api_token: Option<String>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of retries for failed requests
    pub max_retries: Option<usize>,
    /// Dashboard overrides for this profile
    pub dashboard: Option<DashboardConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_config_parses_partial_json() {
        let profile: ProfileConfig =
            serde_json::from_str(r#"{"base_url": "https://app.example.com"}"#).unwrap();
        assert_eq!(profile.base_url.as_deref(), Some("https://app.example.com"));
        assert!(profile.api_token.is_none());
        assert!(profile.dashboard.is_none());
    }
}
