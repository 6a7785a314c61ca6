//! Shutdown coordination.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Every long-running task subscribes; a single `trigger` stops them all.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. Returns how many subscribers were notified.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Wait for an OS termination signal, then trigger.
    pub async fn trigger_on_signal(self) {
        super::signals::shutdown_signal().await;
        let notified = self.trigger();
        tracing::info!(subscribers = notified, "Shutdown triggered");
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
