//! Debounced re-synchronization.
//!
//! Collaborative edits from other participants arrive in bursts. The
//! coalescer collapses every burst into a single resync callback, and the
//! callback recomputes all derived state (layout, blocks, verdicts) from
//! the latest snapshot rather than patching it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Quiet window after the last notification before a resync fires.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// Collapses bursts of change notifications into one resync per quiet
/// window. Dropping the coalescer stops its background task.
pub struct ChangeCoalescer {
    tx: mpsc::UnboundedSender<()>,
}

impl ChangeCoalescer {
    /// Spawn the coalescing task with the default quiet window. Must be
    /// called from within a tokio runtime.
    pub fn new(resync: impl Fn() + Send + Sync + 'static) -> Self {
        Self::with_window(DEFAULT_QUIET_WINDOW, resync)
    }

    /// Spawn the coalescing task with a custom quiet window.
    pub fn with_window(window: Duration, resync: impl Fn() + Send + Sync + 'static) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();

        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                // Drain follow-up notifications until the burst goes quiet.
                loop {
                    match timeout(window, rx.recv()).await {
                        Ok(Some(())) => continue,
                        Ok(None) | Err(_) => break,
                    }
                }
                resync();
            }
        });

        Self { tx }
    }

    /// Record one external change. Cheap, non-blocking, callable from any
    /// context.
    pub fn notify(&self) {
        // A closed channel only means the task is gone; nothing to do.
        let _ = self.tx.send(());
    }
}
