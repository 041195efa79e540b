//! Main client for the admin jobs API.
//!
//! # What this module handles:
//! - The [`JobsClient`] handle shared by the dashboard and the CLI
//! - Bearer token exposure for endpoint calls
//!
//! # What this module does NOT handle:
//! - HTTP mechanics and retry (see [`crate::endpoints`])
//! - Client construction (see [`builder`])
//!
//! # Invariants
//! - `base_url` never ends with a slash
//! - The API token is only exposed at the call site of an endpoint function

pub mod builder;
mod jobs;

use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;

/// Admin jobs API client.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<SecretString>,
    max_retries: usize,
    metrics: Option<MetricsCollector>,
}

impl JobsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JobsClientBuilder {
        builder::JobsClientBuilder::new()
    }

    /// Get the base URL of the admin API host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    fn token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }
}
