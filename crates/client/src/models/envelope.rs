//! The `{ success, data, error }` envelope wrapping every admin API response.

use serde::{Deserialize, Serialize};

const DEFAULT_REJECTION: &str = "request was rejected by the server";

/// Response envelope used by all admin endpoints.
///
/// Retry and cancel responses carry no meaningful `data`; only `success`
/// and the optional message matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Human-readable reason for a `success: false` envelope.
    pub fn failure_message(&self) -> String {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTION)
            .to_string()
    }
}
