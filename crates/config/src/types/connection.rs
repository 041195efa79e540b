//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection, auth, and dashboard.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` never carries a trailing slash once built by the loader.
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::dashboard::DashboardConfig;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Connection configuration for the admin API host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the web application (e.g., https://app.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or unavailable responses
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Authentication settings.
///
/// The admin API sits behind the host application's session layer. A bearer
/// token is sent when configured; otherwise requests go out unauthenticated
/// and the server decides.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub api_token: Option<SecretString>,
}

impl AuthConfig {
    /// Returns a display-safe description of the auth mode.
    pub fn mode_label(&self) -> &'static str {
        if self.api_token.is_some() {
            "token"
        } else {
            "none"
        }
    }

    /// Returns true when a non-empty token is configured.
    pub fn has_token(&self) -> bool {
        self.api_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Dashboard polling, paging, and health thresholds
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Create a config for the given base URL with all other settings defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }

    /// Create a config with a base URL and bearer token.
    pub fn with_api_token(base_url: impl Into<String>, token: SecretString) -> Self {
        let mut config = Self::with_base_url(base_url);
        config.auth.api_token = Some(token);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost:3000");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.auth.mode_label(), "none");
    }

    #[test]
    fn test_with_api_token_sets_token_mode() {
        let config = Config::with_api_token(
            "https://app.example.com",
            SecretString::new("secret".to_string().into()),
        );
        assert!(config.auth.has_token());
        assert_eq!(config.auth.mode_label(), "token");
    }

    #[test]
    fn test_empty_token_is_not_a_token() {
        let auth = AuthConfig {
            api_token: Some(SecretString::new(String::new().into())),
        };
        assert!(!auth.has_token());
    }
}
