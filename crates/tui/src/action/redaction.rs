//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so job payloads, error text and filter
//! input are replaced with size indicators before they reach the log file.
//!
//! # Invariants
//!
//! - Variants carrying server text or user input are handled explicitly
//! - Job ids are not sensitive and are logged as-is
//! - Simple variants fall through to the default Debug
//!
//! ```ignore
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Handling action: JobsLoaded(ticket=4, <12 jobs>)
//! ```

use jobwatch_client::ActionOutcome;

use crate::action::variants::Action;

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
pub struct RedactedAction<'a>(pub &'a Action);

fn redact_outcome(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Completed => "Completed".to_string(),
        ActionOutcome::DomainError(message) => format!("DomainError(<{} chars>)", message.len()),
        ActionOutcome::TransportError(message) => {
            format!("TransportError(<{} chars>)", message.len())
        }
    }
}

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::JobsLoaded { ticket, result } => match result {
                Ok(snapshot) => write!(
                    f,
                    "JobsLoaded(ticket={}, <{} jobs>)",
                    ticket,
                    snapshot.jobs.len()
                ),
                Err(_) => write!(f, "JobsLoaded(ticket={}, <error>)", ticket),
            },
            Action::JobActionFinished {
                id,
                action,
                outcome,
            } => write!(
                f,
                "JobActionFinished({}, {}, {})",
                id,
                action,
                redact_outcome(outcome)
            ),
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }
            Action::FilterInput(_) => write!(f, "FilterInput(<char>)"),
            Action::Input(key) if key.code.as_char().is_some() => {
                write!(f, "Input(<char>, {:?})", key.modifiers)
            }
            other => write!(f, "{:?}", other),
        }
    }
}
