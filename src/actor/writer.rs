//! Shared handle to the coordinator's output stream.
//!
//! The coordinator writes annotations before the render thread starts and
//! after it has joined; the render thread writes frames in between. The
//! mutex only serializes those phases, it is never contended.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable [`Write`] wrapper around one output stream.
#[derive(Debug)]
pub(crate) struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedWriter<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Poisoning only means the render thread panicked; the stream is intact.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_stream() {
        let mut first = SharedWriter::new(Vec::new());
        let mut second = first.clone();
        first.write_all(b"ab").unwrap();
        second.write_all(b"cd").unwrap();
        second.flush().unwrap();

        let bytes = first.inner.lock().unwrap().clone();
        assert_eq!(bytes, b"abcd");
    }
}
