//! Metrics collection for admin API calls and the dashboard.
//!
//! This module records, through the `metrics` facade:
//! - Request latency histograms
//! - Request, retry, and error counters
//! - Decode failures and lifecycle-invariant violations
//! - Dashboard frame render time and stale-poll count
//!
//! # What this module does NOT handle:
//! - Exposition (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - Label names are consistent: `endpoint`, `method`, `status`, `error_category`
//! - Recording never fails and is a no-op when no recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "jobwatch_api_request_duration_seconds";

/// Request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "jobwatch_api_requests_total";

/// Retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "jobwatch_api_retries_total";

/// Error counter.
pub const METRIC_ERRORS_TOTAL: &str = "jobwatch_api_errors_total";

/// Response decode failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "jobwatch_api_deserialization_failures_total";

/// Jobs received with broken lifecycle invariants.
pub const METRIC_LIFECYCLE_VIOLATIONS: &str = "jobwatch_job_lifecycle_violations_total";

/// Dashboard frame render duration histogram.
pub const METRIC_TUI_FRAME_RENDER_DURATION: &str = "jobwatch_tui_frame_render_duration_seconds";

/// Dashboard polls that failed and left the snapshot stale.
pub const METRIC_TUI_STALE_POLLS: &str = "jobwatch_tui_stale_polls_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection refused, DNS, reset
    Transport,
    /// HTTP 4xx
    Http4xx,
    /// HTTP 5xx
    Http5xx,
    /// `success: false` envelope
    Rejected,
    /// Body could not be decoded
    Decode,
    /// Request timeout
    Timeout,
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Rejected => "rejected",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

fn category_for_status(status: u16) -> ErrorCategory {
    if (400..500).contains(&status) {
        ErrorCategory::Http4xx
    } else if (500..600).contains(&status) {
        ErrorCategory::Http5xx
    } else {
        ErrorCategory::Unknown
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::HttpError(e) if e.is_timeout() => ErrorCategory::Timeout,
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            ClientError::HttpError(e) if e.is_decode() || e.is_body() => ErrorCategory::Decode,
            ClientError::HttpError(_) => ErrorCategory::Unknown,
            ClientError::ApiError { status, .. } => category_for_status(*status),
            ClientError::MaxRetriesExceeded { status, .. } => category_for_status(*status),
            ClientError::Rejected { .. } => ErrorCategory::Rejected,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::InvalidUrl(_) | ClientError::NotFound(_) => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for API calls and dashboard events.
///
/// A thin wrapper around the `metrics` macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of one HTTP attempt.
    ///
    /// `status` is `None` when no response was received.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based, not counting the initial request).
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    pub fn record_deserialization_failure(&self, endpoint: &str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model_type" => model_type.to_string(),
        )
        .increment(1);
    }

    /// Record jobs that arrived with broken lifecycle invariants.
    pub fn record_lifecycle_violations(&self, count: usize) {
        if !self.enabled || count == 0 {
            return;
        }
        metrics::counter!(METRIC_LIFECYCLE_VIOLATIONS).increment(count as u64);
    }

    pub fn record_tui_frame_render_duration(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        metrics::histogram!(METRIC_TUI_FRAME_RENDER_DURATION).record(duration.as_secs_f64());
    }

    pub fn record_tui_stale_poll(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_TUI_STALE_POLLS).increment(1);
    }
}
