//! Retry/cancel commands and their outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle command sent to the remote queue for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Retry,
    Cancel,
}

impl JobAction {
    /// Final path segment: `/api/admin/jobs/{id}/{suffix}`.
    pub const fn path_suffix(&self) -> &'static str {
        match self {
            JobAction::Retry => "retry",
            JobAction::Cancel => "cancel",
        }
    }

    /// Imperative label, e.g. for buttons.
    pub const fn verb(&self) -> &'static str {
        match self {
            JobAction::Retry => "Retry",
            JobAction::Cancel => "Cancel",
        }
    }

    /// Past tense, for confirmations.
    pub const fn past_tense(&self) -> &'static str {
        match self {
            JobAction::Retry => "retried",
            JobAction::Cancel => "cancelled",
        }
    }

    /// Templated endpoint used as a metrics label.
    pub const fn endpoint_template(&self) -> &'static str {
        match self {
            JobAction::Retry => "/api/admin/jobs/{id}/retry",
            JobAction::Cancel => "/api/admin/jobs/{id}/cancel",
        }
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_suffix())
    }
}

/// Result of a retry/cancel command.
///
/// `success` is checked explicitly: an HTTP 2xx with `success: false` is a
/// [`ActionOutcome::DomainError`], not a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the command; the snapshot must be refetched.
    Completed,
    /// HTTP 2xx with `success: false`.
    DomainError(String),
    /// Network failure, non-2xx status, or an unreadable body.
    TransportError(String),
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }

    /// Failure text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Completed => None,
            ActionOutcome::DomainError(message) | ActionOutcome::TransportError(message) => {
                Some(message)
            }
        }
    }
}
