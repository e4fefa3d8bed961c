//! Error types for frame validation and rendering.
//!
//! Failures of the caller's task are never wrapped in these types: the
//! coordinator hands the task's return value back verbatim and resumes a
//! task panic with its original payload.

use crate::frame::Shape;
use std::io;
use thiserror::Error;

/// A frame, or a sequence of frames, is not dimensionally uniform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// A line of a frame differs in width from the frame's first line.
    #[error("line {line} is {found} columns wide, expected {expected}")]
    RaggedLine {
        /// Zero-based line index within the frame.
        line: usize,
        /// Width of the first line.
        expected: usize,
        /// Width of the offending line.
        found: usize,
    },

    /// A frame is too large for terminal cursor movement to cross.
    #[error("frame has shape {found}, larger than {max} columns or lines")]
    Oversized {
        /// Shape of the offending frame.
        found: Shape,
        /// Largest width and height accepted.
        max: u16,
    },

    /// A frame differs in shape from the first frame of its sequence.
    #[error("frame {frame} has shape {found}, expected {expected}")]
    ShapeMismatch {
        /// Zero-based index of the offending frame in pull order.
        frame: u64,
        /// Shape of the first frame.
        expected: Shape,
        /// Shape of the offending frame.
        found: Shape,
    },
}

/// The render path stopped abnormally.
///
/// These errors never replace the task's outcome; the coordinator logs
/// them and reports them next to the task's value.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The frame source produced a malformed frame.
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// The frame source produced no frames at all.
    #[error("animation produced no frames")]
    EmptyAnimation,

    /// Writing to the output stream failed.
    #[error("failed to write animation frame: {0}")]
    Write(#[from] io::Error),

    /// The OS refused to start the render thread.
    #[error("failed to spawn render thread: {0}")]
    Spawn(#[source] io::Error),

    /// The frame source panicked, or the render thread died.
    #[error("render thread panicked")]
    Panicked,
}

impl RenderError {
    /// Returns `true` if the output stream rejected a write.
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}
