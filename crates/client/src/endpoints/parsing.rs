//! Response body decoding.

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Read the body as text and decode it as JSON.
///
/// Decoding failures become [`ClientError::InvalidResponse`] naming `model_type`
/// and are counted as deserialization failures.
pub async fn parse_json_body<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    model_type: &'static str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, model_type);
        }
        ClientError::InvalidResponse(format!("Failed to parse {model_type}: {e}"))
    })
}
