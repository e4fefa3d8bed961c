//! `OutputBuffer`: Single-syscall output buffer for animation frames.

use super::cursor::cursor_reset;
use crate::animation::AnimatedFrame;
use crate::frame::{Frame, Shape};
use std::io::Write;

/// Pre-allocated buffer for one render step.
///
/// A frame, its cursor-reset suffix and any cursor visibility change are
/// accumulated here, then flushed in a single `write()` call so that a
/// half-written frame is never visible.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical animation frame (1KB).
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a frame followed by its cursor-reset suffix.
    #[inline]
    pub fn write_frame(&mut self, frame: &AnimatedFrame) {
        self.write_str(frame.frame().as_str());
        self.write_str(frame.suffix());
    }

    /// Overwrite a visible frame of `shape` with spaces and return the
    /// cursor to the frame's top-left corner.
    pub fn erase(&mut self, shape: Shape) {
        self.write_str(Frame::blank(shape).as_str());
        self.write_str(&cursor_reset(shape));
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
