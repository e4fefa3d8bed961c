//! Writers for exercising the render path in tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct CaptureState {
    bytes: Vec<u8>,
    flushes: usize,
}

/// In-memory output stream that records every byte and counts flushes.
///
/// Every render step ends with exactly one flush, so `flushes()` counts
/// frame writes plus the cleanup write.
#[derive(Debug, Clone, Default)]
pub(crate) struct Capture {
    state: Arc<Mutex<CaptureState>>,
}

impl Capture {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bytes(&self) -> Vec<u8> {
        self.state.lock().unwrap().bytes.clone()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    pub(crate) fn flushes(&self) -> usize {
        self.state.lock().unwrap().flushes
    }

    /// Replay the captured output into a terminal emulator, translating
    /// `\n` the way a tty with `onlcr` does.
    pub(crate) fn screen(&self) -> vt100::Parser {
        let mut parser = vt100::Parser::new(24, 80, 0);
        parser.process(self.contents().replace('\n', "\r\n").as_bytes());
        parser
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.lock().unwrap().bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().unwrap().flushes += 1;
        Ok(())
    }
}

/// Output stream whose reader has gone away.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
    }
}
