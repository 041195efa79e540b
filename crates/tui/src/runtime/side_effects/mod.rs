//! Async side effect handlers for dashboard actions.
//!
//! Responsibilities:
//! - Run API calls for `RefreshJobs`, `RetryJob`, and `CancelJob` in tracked
//!   background tasks.
//! - Report results back on the action channel.
//!
//! Does NOT handle:
//! - State changes (the app applies the resulting actions).
//! - Scheduled polling (see `polling`).
//!
//! Invariants:
//! - Every API call runs in a task spawned on the shared `TaskTracker`.
//! - Every snapshot fetch takes a ticket from the shared `RequestSequence`.
//! - Retry/cancel tasks send exactly one `JobActionFinished` and nothing else.

mod dispatcher;
mod jobs;

use jobwatch_client::JobsClient;
use std::sync::Arc;

pub use dispatcher::{handle_side_effects, has_side_effects};
pub use tokio_util::task::TaskTracker;

/// Client handle shared with spawned tasks.
///
/// `JobsClient` needs only `&self`, so no lock is involved.
pub type SharedClient = Arc<JobsClient>;
