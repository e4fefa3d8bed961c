//! Render Signal: One-shot stop signal from the coordinator to the render thread.
//!
//! Backed by a crossbeam channel rather than a bare flag so the render
//! thread can sleep between frames and still wake up the moment the
//! signal is set.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

/// Writing half of the stop signal, held by the coordinator.
///
/// [`RenderSignal::set`] consumes the handle, so the signal is set at most
/// once. Dropping the handle without setting it also counts as set, which
/// stops the render thread even if the coordinator unwinds.
#[derive(Debug)]
pub struct RenderSignal {
    tx: Sender<()>,
}

/// Reading half of the stop signal, held by the render loop.
#[derive(Debug)]
pub struct SignalReceiver {
    rx: Receiver<()>,
}

/// Create a fresh, unset signal.
pub fn render_signal() -> (RenderSignal, SignalReceiver) {
    let (tx, rx) = bounded(1);
    (RenderSignal { tx }, SignalReceiver { rx })
}

impl RenderSignal {
    /// Set the signal.
    pub fn set(self) {
        // The receiver may already be gone if the render loop failed.
        let _ = self.tx.send(());
    }
}

impl SignalReceiver {
    /// Check the signal without blocking.
    pub fn is_set(&self) -> bool {
        !matches!(self.rx.try_recv(), Err(TryRecvError::Empty))
    }

    /// Block until the signal is set or `timeout` elapses.
    ///
    /// Returns `true` if the signal is set.
    pub fn wait(&self, timeout: Duration) -> bool {
        !matches!(self.rx.recv_timeout(timeout), Err(RecvTimeoutError::Timeout))
    }
}
