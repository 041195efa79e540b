//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and rejected job actions to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `main`).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use jobwatch_client::{ActionOutcome, ClientError, JobAction};
use thiserror::Error;

/// Structured exit codes for jobwatch-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// HTTP 401. Scripts should refresh the token.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure. Scripts may retry with backoff.
    ConnectionError = 3,

    /// Unknown job id.
    NotFound = 4,

    /// The server rejected the request (`success: false`, HTTP 400, or a
    /// body that could not be decoded). Retrying the same request won't help.
    ValidationError = 5,

    /// HTTP 403.
    PermissionDenied = 6,

    /// HTTP 429 after retries.
    RateLimited = 7,

    /// HTTP 502/503/504 after retries.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Whether scripts may retry the same command later.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }

    fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ExitCode::ValidationError,
            401 => ExitCode::AuthenticationFailed,
            403 => ExitCode::PermissionDenied,
            404 => ExitCode::NotFound,
            429 => ExitCode::RateLimited,
            502..=504 => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() || e.is_request() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
            ClientError::ApiError { status, .. } => Self::from_status(*status),
            ClientError::MaxRetriesExceeded { status, .. } => Self::from_status(*status),
            ClientError::Rejected { .. } | ClientError::InvalidResponse(_) => {
                ExitCode::ValidationError
            }
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::NotFound(_) => ExitCode::NotFound,
        }
    }
}

/// A retry or cancel that did not complete.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{verb} rejected for job {id}: {message}")]
    Rejected {
        verb: &'static str,
        id: String,
        message: String,
    },

    #[error("{verb} failed for job {id}: {message}")]
    Transport {
        verb: &'static str,
        id: String,
        message: String,
    },
}

impl ActionError {
    /// `None` when the outcome is a success.
    pub fn from_outcome(id: &str, action: JobAction, outcome: ActionOutcome) -> Option<Self> {
        match outcome {
            ActionOutcome::Completed => None,
            ActionOutcome::DomainError(message) => Some(ActionError::Rejected {
                verb: action.verb(),
                id: id.to_string(),
                message,
            }),
            ActionOutcome::TransportError(message) => Some(ActionError::Transport {
                verb: action.verb(),
                id: id.to_string(),
                message,
            }),
        }
    }
}

impl From<&ActionError> for ExitCode {
    fn from(err: &ActionError) -> Self {
        match err {
            ActionError::Rejected { .. } => ExitCode::ValidationError,
            ActionError::Transport { .. } => ExitCode::ConnectionError,
        }
    }
}

/// Marker error for user-initiated cancellation (Ctrl+C).
#[derive(Debug, Clone, Copy, Error)]
#[error("cancelled")]
pub struct Cancelled;

/// Extract the appropriate exit code from an `anyhow::Error`.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(action_err) = cause.downcast_ref::<ActionError>() {
                return ExitCode::from(action_err);
            }
        }
        ExitCode::GeneralError
    }
}
