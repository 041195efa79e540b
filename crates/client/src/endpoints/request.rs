//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that come back with a transient status (429, 502, 503, 504) are
//! re-sent after `2^attempt` seconds until `max_retries` is exhausted. Every
//! other non-2xx status becomes [`ClientError::ApiError`] immediately.
//!
//! Commands that change server state use [`ResendPolicy::ThrottledOnly`]: a
//! gateway status may arrive after the backend already applied the command,
//! so only a 429 (refused before processing) is re-sent.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ApiEnvelope;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Which failed responses may be sent again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendPolicy {
    /// Reads: any transient status (429, 502, 503, 504).
    Transient,
    /// Non-idempotent commands: 429 only.
    ThrottledOnly,
}

impl ResendPolicy {
    pub fn allows(self, status: u16) -> bool {
        match self {
            Self::Transient => ClientError::is_retryable_status(status),
            Self::ThrottledOnly => status == 429,
        }
    }
}

/// Sends an HTTP request with automatic retry for transient statuses.
///
/// # Arguments
///
/// * `builder` - The request to execute
/// * `max_retries` - Number of re-sends after the first attempt (0 disables retry)
/// * `endpoint` - Templated path used as a metrics label
/// * `method` - HTTP method used as a metrics label
/// * `metrics` - Optional metrics collector
///
/// # Errors
///
/// - [`ClientError::MaxRetriesExceeded`] when a transient status persists.
/// - [`ClientError::ApiError`] for any other non-2xx response.
/// - [`ClientError::HttpError`] for transport failures, which are not retried.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    send_with_policy(
        builder,
        ResendPolicy::Transient,
        max_retries,
        endpoint,
        method,
        metrics,
    )
    .await
}

/// Like [`send_request_with_retry`], but only statuses allowed by `policy`
/// are re-sent. Any other transient status is returned as
/// [`ClientError::ApiError`] after a single attempt.
pub async fn send_with_policy(
    builder: RequestBuilder,
    policy: ResendPolicy,
    max_retries: usize,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    let mut attempt = 0usize;

    loop {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                return send_once(builder, endpoint, method, metrics).await;
            }
        };

        if attempt > 0
            && let Some(m) = metrics
        {
            m.record_retry(endpoint, method, attempt);
        }

        let response = match send_once(attempt_builder, endpoint, method, metrics).await {
            Err(ClientError::ApiError { status, .. }) if policy.allows(status) =>
            {
                if attempt < max_retries {
                    let backoff_secs = 2u64.pow(attempt as u32);
                    debug!(
                        attempt = attempt + 1,
                        max_retries = max_retries + 1,
                        status,
                        backoff_secs,
                        "Transient status, retrying with exponential backoff"
                    );
                    tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
                    attempt += 1;
                    continue;
                }
                debug!(
                    attempts = attempt + 1,
                    status, "Max retries exhausted for transient status"
                );
                return Err(ClientError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    status,
                });
            }
            other => other,
        };

        if response.is_ok() && attempt > 0 {
            debug!(attempt = attempt + 1, "Request succeeded after retry");
        }
        return response;
    }
}

async fn send_once(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let started = Instant::now();

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
                m.record_client_error(endpoint, method, &err);
            }
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
    }

    if response.status().is_success() {
        return Ok(response);
    }

    let err = api_error_from_response(response).await;
    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }
    Err(err)
}

async fn api_error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Admin endpoints usually answer errors with the same envelope.
    let message = match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
        Ok(envelope) => envelope.failure_message(),
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => body,
    };

    ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_policy_allows_gateway_statuses() {
        for status in [429, 502, 503, 504] {
            assert!(ResendPolicy::Transient.allows(status), "{status}");
        }
        assert!(!ResendPolicy::Transient.allows(500));
    }

    #[test]
    fn test_throttled_only_policy_allows_429_alone() {
        assert!(ResendPolicy::ThrottledOnly.allows(429));
        for status in [500, 502, 503, 504] {
            assert!(!ResendPolicy::ThrottledOnly.allows(status), "{status}");
        }
    }
}
