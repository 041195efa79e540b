//! Runtime components for the dashboard.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading and client construction
//! - Async side effects for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `app` and `ui`).
//!
//! Invariants:
//! - Side effects run in tracked tokio tasks so the UI never blocks on I/O.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
