//! Graceful shutdown trigger shared by `main.rs` and the integration tests.
//!
//! `HttpServer::run` takes a receiver from [`Shutdown::subscribe`]; the signal
//! listener (or a test's `TestRelay` on drop) calls [`Shutdown::trigger`] and
//! axum stops accepting, then drains requests still waiting on Prosody.

use tokio::sync::broadcast;

/// One-shot fan-out of the stop request to every running relay task.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. A no-op once all servers are gone.
    pub fn trigger(&self) {
        if self.tx.send(()).is_err() {
            tracing::debug!("Shutdown requested with no running server");
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
