//! Polling data source for the job snapshot.
//!
//! Responsibilities:
//! - Fetch the snapshot immediately and then on a fixed interval.
//! - Tag every fetch with a ticket from a shared [`RequestSequence`].
//! - Deliver results as `Action::JobsLoaded` on the action channel.
//!
//! Does NOT handle:
//! - Applying results to app state (see `App::update`, which drops stale tickets).
//! - Manual refresh (see the runtime side effects, which share the sequence).
//!
//! Invariants:
//! - A [`PollHandle`] owns its timer; dropping or stopping it ends polling.
//! - No process-wide state: each dashboard builds its own poller.
//! - Fetches within one poller never overlap.

mod poller;
mod source;

pub use poller::{AutoRefresh, PollHandle, Poller};
pub use source::{JobsSource, RequestSequence};
