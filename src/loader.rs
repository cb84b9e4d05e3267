// src/loader.rs
//
// One-shot background load. The UI thread owns the view-model; a worker
// thread runs the fetch and hands the result back over a channel.
// Dropping the `PendingLoad` (view torn down) just makes the worker's send
// fail, so a late result never reaches any state.

use std::sync::{
    Arc,
    mpsc::{self, Receiver, TryRecvError},
};
use std::thread;

use crate::{error::LoadError, model::Certificate, net::CertificateSource};

pub type LoadResult = Result<Vec<Certificate>, LoadError>;

/// Handle to an in-flight load.
pub struct PendingLoad {
    rx: Receiver<LoadResult>,
}

/// Start the load on a worker thread. `on_done` runs on the worker after the
/// result has been handed over (the GUI uses it to request a repaint).
pub fn spawn_load<F>(source: Arc<dyn CertificateSource>, on_done: F) -> PendingLoad
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(s!("cert-load"))
        .spawn(move || {
            let result = source.fetch();
            if tx.send(result).is_err() {
                log::debug!("Load: View gone before the result arrived; discarded");
                return;
            }
            on_done();
        });

    if let Err(e) = spawned {
        // Sender was moved into the closure and dropped with it,
        // so poll() will report Interrupted.
        log::error!("Load: Could not start worker thread: {e}");
    }

    PendingLoad { rx }
}

impl PendingLoad {
    /// Non-blocking check. `None` while the fetch is still running.
    pub fn poll(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }

    /// Block until the fetch settles (CLI and tests).
    pub fn wait(self) -> LoadResult {
        self.rx.recv().unwrap_or(Err(LoadError::Interrupted))
    }
}
