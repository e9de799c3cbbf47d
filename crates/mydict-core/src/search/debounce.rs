use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Runs at most one delayed task at a time.
///
/// Scheduling again before the delay elapses drops the earlier task. Once a
/// task's delay has elapsed it runs to completion; superseding it after that
/// point is the caller's business (see generation tagging in `SearchState`).
pub struct Debouncer {
    interval: Duration,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawn `task` on the current tokio runtime after the quiet interval
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let interval = self.interval;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!("Debounced task superseded");
                }
                _ = tokio::time::sleep(interval) => {
                    task.await;
                }
            }
        });
    }

    /// Drop the pending task if its timer has not fired yet
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
