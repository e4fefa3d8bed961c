//! `AnimationSequence`: The infinite, cursor-aware frame stream.

use crate::error::DimensionError;
use crate::frame::{Frame, Shape};
use crate::terminal::cursor_reset;
use std::fmt;
use std::sync::Arc;

/// A boxed pass over the user's frame source.
pub(crate) type FrameStream = Box<dyn Iterator<Item = String> + Send>;

/// Factory for fresh passes over the user's frame source.
pub(crate) type FrameSource = Arc<dyn Fn() -> FrameStream + Send + Sync>;

/// A validated frame together with the control sequence that returns the
/// cursor to the frame's top-left corner after it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedFrame {
    frame: Frame,
    suffix: Arc<str>,
}

impl AnimatedFrame {
    /// The frame content.
    #[inline]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The cursor-reset control sequence.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Shape of the frame.
    #[inline]
    pub const fn shape(&self) -> Shape {
        self.frame.shape()
    }
}

impl fmt::Display for AnimatedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.frame.as_str())?;
        f.write_str(&self.suffix)
    }
}

/// An unbounded stream of [`AnimatedFrame`]s.
///
/// When the underlying source ends, a fresh pass is requested from the
/// source factory and the stream carries on. Every frame is validated as
/// it is pulled and checked against the shape of the first frame; the
/// first violation is yielded as an error and the stream then ends. The
/// stream also ends if the source yields nothing at all.
pub struct AnimationSequence {
    source: FrameSource,
    /// Pass in progress; `None` until the first pull.
    current: Option<FrameStream>,
    /// Frames pulled from `current`.
    cycle_len: u64,
    /// Frames pulled in total, across cycles.
    pulled: u64,
    shape: Option<Shape>,
    suffix: Arc<str>,
    done: bool,
}

impl AnimationSequence {
    pub(crate) fn new(source: FrameSource) -> Self {
        Self {
            source,
            current: None,
            cycle_len: 0,
            pulled: 0,
            shape: None,
            suffix: Arc::from(""),
            done: false,
        }
    }

    /// Shape shared by all frames, known once the first frame is pulled.
    pub const fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Number of frames pulled so far.
    pub const fn frames_pulled(&self) -> u64 {
        self.pulled
    }

    /// Pull the next raw frame, starting a new cycle if needed.
    fn pull(&mut self) -> Option<String> {
        let current = self.current.get_or_insert_with(|| (self.source)());
        if let Some(text) = current.next() {
            self.cycle_len += 1;
            return Some(text);
        }

        // An empty cycle would restart forever.
        if self.cycle_len == 0 {
            return None;
        }

        let current = self.current.insert((self.source)());
        self.cycle_len = 0;
        let text = current.next()?;
        self.cycle_len = 1;
        Some(text)
    }

    fn accept(&mut self, text: String) -> Result<AnimatedFrame, DimensionError> {
        let index = self.pulled;
        self.pulled += 1;

        let frame = Frame::new(text)?;
        match self.shape {
            None => {
                self.shape = Some(frame.shape());
                self.suffix = Arc::from(cursor_reset(frame.shape()));
            }
            Some(expected) if expected != frame.shape() => {
                return Err(DimensionError::ShapeMismatch {
                    frame: index,
                    expected,
                    found: frame.shape(),
                });
            }
            Some(_) => {}
        }

        Ok(AnimatedFrame {
            frame,
            suffix: Arc::clone(&self.suffix),
        })
    }
}

impl Iterator for AnimationSequence {
    type Item = Result<AnimatedFrame, DimensionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(text) = self.pull() else {
            self.done = true;
            return None;
        };

        let result = self.accept(text);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl fmt::Debug for AnimationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationSequence")
            .field("shape", &self.shape)
            .field("pulled", &self.pulled)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
