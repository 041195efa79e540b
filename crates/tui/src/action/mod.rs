//! Action protocol for async TUI event handling.
//!
//! Actions represent both user intent and the results of async API work.
//!
//! # Module Structure
//!
//! - `variants`: the `Action` enum
//! - `redaction`: logging wrapper (`RedactedAction`)
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so job payloads and error text are not written to log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `App::update`)
//! - Async task execution (see the runtime module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, JobsResult};
