//! Snapshot source trait and request ticketing.

use jobwatch_client::{ClientError, JobsClient, JobsSnapshot};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Anything that can produce a fresh job snapshot.
pub trait JobsSource: Send + Sync + 'static {
    fn fetch_jobs(&self) -> impl Future<Output = Result<JobsSnapshot, ClientError>> + Send;
}

impl JobsSource for JobsClient {
    fn fetch_jobs(&self) -> impl Future<Output = Result<JobsSnapshot, ClientError>> + Send {
        self.list_jobs()
    }
}

/// Monotonic ticket counter shared by every snapshot fetch.
///
/// Tickets start at 1, so 0 means "nothing applied yet".
#[derive(Debug, Clone, Default)]
pub struct RequestSequence(Arc<AtomicU64>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Later calls always return larger tickets.
    pub fn next_ticket(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Most recently issued ticket.
    pub fn latest(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic_across_clones() {
        let sequence = RequestSequence::new();
        let other = sequence.clone();
        assert_eq!(sequence.latest(), 0);
        assert_eq!(sequence.next_ticket(), 1);
        assert_eq!(other.next_ticket(), 2);
        assert_eq!(sequence.latest(), 2);
    }
}
