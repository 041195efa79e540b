//! Interval poller and its cancellable handle.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::source::{JobsSource, RequestSequence};
use crate::action::Action;

/// Owned handle to a running poll loop.
///
/// Stopping is idempotent. Dropping the handle stops the loop.
#[derive(Debug)]
pub struct PollHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn stop(&mut self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled() && self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop and wait for the loop to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!(error = %e, "Poll task ended abnormally");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Fetches the snapshot immediately and then every `interval`.
pub struct Poller<S> {
    source: Arc<S>,
    sequence: RequestSequence,
    tx: Sender<Action>,
    interval: Duration,
}

impl<S: JobsSource> Poller<S> {
    pub fn new(
        source: Arc<S>,
        sequence: RequestSequence,
        tx: Sender<Action>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            sequence,
            tx,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn the poll loop. The first fetch happens right away.
    pub fn start(&self) -> PollHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let source = Arc::clone(&self.source);
        let sequence = self.sequence.clone();
        let tx = self.tx.clone();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let ticket = sequence.next_ticket();
                let result = tokio::select! {
                    _ = token.cancelled() => break,
                    result = source.fetch_jobs() => result,
                };

                match &result {
                    Ok(snapshot) => {
                        tracing::debug!(ticket, jobs = snapshot.jobs.len(), "Polled job snapshot")
                    }
                    Err(e) => {
                        tracing::warn!(ticket, error = %e, "Job poll failed; keeping previous snapshot")
                    }
                }

                let action = Action::JobsLoaded {
                    ticket,
                    result: result.map_err(Arc::new),
                };
                if tx.send(action).await.is_err() {
                    tracing::debug!("Action channel closed; stopping poller");
                    break;
                }
            }
        });

        PollHandle {
            cancel,
            task: Some(task),
        }
    }
}

/// Keeps a poll loop running exactly while auto-refresh is enabled.
pub struct AutoRefresh<S> {
    poller: Poller<S>,
    handle: Option<PollHandle>,
}

impl<S: JobsSource> AutoRefresh<S> {
    pub fn new(poller: Poller<S>) -> Self {
        Self {
            poller,
            handle: None,
        }
    }

    /// Start or stop polling to match `enabled`.
    ///
    /// Enabling a stopped loop fetches immediately.
    pub fn sync(&mut self, enabled: bool) {
        let running = self.handle.as_ref().is_some_and(PollHandle::is_running);
        match (enabled, running) {
            (true, false) => {
                tracing::info!(interval_secs = self.poller.interval().as_secs(), "Auto-refresh started");
                self.handle = Some(self.poller.start());
            }
            (false, true) => {
                tracing::info!("Auto-refresh stopped");
                if let Some(mut handle) = self.handle.take() {
                    handle.stop();
                }
            }
            _ => {}
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(PollHandle::is_running)
    }

    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.shutdown().await;
        }
    }
}
