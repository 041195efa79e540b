//! Job list view logic: table state and row formatting.
//!
//! Everything here is pure and synchronous so it can be unit tested without a
//! terminal or a runtime.

pub mod format;
pub mod table;

pub use format::{StatusBadge, Tone, format_duration, status_badge, type_icon};
pub use jobwatch_client::{HealthBand, HealthSummary};
pub use table::{JobsTableState, TableView};
