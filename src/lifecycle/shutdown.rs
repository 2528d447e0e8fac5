//! Shutdown coordination.

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Cloneable; any holder may trigger. Long-running tasks take a
/// [`ShutdownHandle`] and await it.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Obtain a handle that resolves once shutdown is triggered.
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            rx: self.tx.subscribe(),
        }
    }

    /// Signal every outstanding handle.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Await-able side of a [`Shutdown`].
pub struct ShutdownHandle {
    rx: broadcast::Receiver<()>,
}

impl ShutdownHandle {
    /// Wait until shutdown is triggered.
    ///
    /// Also resolves if every coordinator clone is dropped, so a lost
    /// coordinator cannot leave the server running unsupervised.
    pub async fn wait(mut self) {
        let _ = self.rx.recv().await;
    }
}
