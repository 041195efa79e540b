//! Error types for the admin jobs client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, DNS, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// HTTP 2xx with `success: false` in the envelope.
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Body could not be decoded into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Retryable status persisted through every attempt.
    #[error("Maximum retries exceeded ({attempts} attempts, last status {status})")]
    MaxRetriesExceeded { attempts: usize, status: u16 },

    /// Invalid or missing base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A job id that is not in the current snapshot.
    #[error("Job not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect(),
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            Self::MaxRetriesExceeded { .. } => true,
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable: 429 (rate limiting), 502/503/504 (transient gateway errors).
    /// Everything else fails immediately, including 500.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if this error is a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_timeout())
    }

    /// Check if this error is a connection failure.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect())
    }

    /// HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::MaxRetriesExceeded { status, .. } => {
                Some(*status)
            }
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost/api/admin/jobs".to_string(),
            message: "boom".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(api_error(503).is_retryable());
        assert!(!api_error(400).is_retryable());
        assert!(!ClientError::Rejected {
            message: "no".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(!api_error(404).is_auth_error());
        assert!(!ClientError::InvalidResponse("x".into()).is_auth_error());
    }

    #[test]
    fn test_is_retryable_status() {
        for status in [429, 502, 503, 504] {
            assert!(ClientError::is_retryable_status(status), "{status}");
        }
        for status in [200, 201, 400, 401, 403, 404, 500, 501] {
            assert!(!ClientError::is_retryable_status(status), "{status}");
        }
    }

    #[test]
    fn test_api_error_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://x".into(),
            message: "kaput".into(),
            request_id: Some("req-42".into()),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("kaput"));
        assert!(text.contains("[Request ID: req-42]"));
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(api_error(404).status(), Some(404));
        assert_eq!(
            ClientError::MaxRetriesExceeded {
                attempts: 4,
                status: 429
            }
            .status(),
            Some(429)
        );
        assert_eq!(ClientError::NotFound("j1".into()).status(), None);
    }
}
