//! Annotation: Messages written before and after an animated task.

use std::io::{self, Write};

/// Optional start and end messages around an animated task.
///
/// The start message is written before the first frame. The end message
/// is written after the animation has been erased, and only if the task
/// finished normally.
///
/// # Example
///
/// ```
/// use reelkit::Annotation;
///
/// let annotation = Annotation::new().start_inline("Fetching ").end("done");
/// assert_eq!(annotation.start_message(), Some("Fetching "));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    start: Option<String>,
    end: Option<String>,
    start_inline: bool,
}

impl Annotation {
    /// An annotation without messages.
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
            start_inline: false,
        }
    }

    /// Write `message` and a newline before the animation starts.
    #[must_use]
    pub fn start(mut self, message: impl Into<String>) -> Self {
        self.start = Some(message.into());
        self.start_inline = false;
        self
    }

    /// Write `message` before the animation starts, without a newline, so
    /// that the animation is drawn right after it on the same line.
    #[must_use]
    pub fn start_inline(mut self, message: impl Into<String>) -> Self {
        self.start = Some(message.into());
        self.start_inline = true;
        self
    }

    /// Write `message` and a newline after the task has finished.
    #[must_use]
    pub fn end(mut self, message: impl Into<String>) -> Self {
        self.end = Some(message.into());
        self
    }

    /// The start message, if any.
    pub fn start_message(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// The end message, if any.
    pub fn end_message(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Check if neither message is set.
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn write_start<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let Some(message) = &self.start else {
            return Ok(());
        };
        output.write_all(message.as_bytes())?;
        if !self.start_inline {
            output.write_all(b"\n")?;
        }
        output.flush()
    }

    pub(crate) fn write_end<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let Some(message) = &self.end else {
            return Ok(());
        };
        writeln!(output, "{message}")?;
        output.flush()
    }
}
