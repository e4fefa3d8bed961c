//! Frame: One dimensionally uniform block of animation text.
//!
//! Widths are measured in terminal columns, grapheme by grapheme, so a
//! wide CJK character counts as two columns and a combining sequence as
//! one. Frames are never padded implicitly: every line must already be
//! exactly as wide as the first.

use crate::error::DimensionError;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The only line separator recognised inside a frame.
pub const LINE_SEPARATOR: char = '\n';

/// Height and width of a frame, in lines and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    /// Number of lines.
    pub height: usize,
    /// Columns per line.
    pub width: usize,
}

impl Shape {
    /// Create a new shape.
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Check if frames of this shape occupy a single line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.height <= 1
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Display width of a single line in terminal columns.
pub fn line_width(line: &str) -> usize {
    line.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Check that every line of `text` has the same width.
///
/// # Errors
///
/// Returns [`DimensionError::RaggedLine`] for the first line whose width
/// differs from the first line's, and [`DimensionError::Oversized`] if the
/// frame is wider or taller than `u16::MAX`.
pub fn validate(text: &str) -> Result<Shape, DimensionError> {
    let mut lines = text.split(LINE_SEPARATOR);
    // `split` always yields at least one (possibly empty) line.
    let width = lines.next().map_or(0, line_width);
    let mut height = 1;

    for (index, line) in lines.enumerate() {
        let found = line_width(line);
        if found != width {
            return Err(DimensionError::RaggedLine {
                line: index + 1,
                expected: width,
                found,
            });
        }
        height += 1;
    }

    let shape = Shape::new(height, width);
    if u16::try_from(height).is_err() || u16::try_from(width).is_err() {
        return Err(DimensionError::Oversized {
            found: shape,
            max: u16::MAX,
        });
    }
    Ok(shape)
}

/// Check that every frame is uniform and all frames share one shape.
///
/// Returns the common shape, or `None` if `frames` is empty. Validation
/// stops at the first inconsistency, so later frames are never pulled.
pub fn validate_all<I, S>(frames: I) -> Result<Option<Shape>, DimensionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut expected: Option<Shape> = None;

    for (index, frame) in (0u64..).zip(frames) {
        let found = validate(frame.as_ref())?;
        match expected {
            None => expected = Some(found),
            Some(shape) if shape != found => {
                return Err(DimensionError::ShapeMismatch {
                    frame: index,
                    expected: shape,
                    found,
                });
            }
            Some(_) => {}
        }
    }

    Ok(expected)
}

/// An immutable, validated block of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    text: String,
    shape: Shape,
}

impl Frame {
    /// Validate `text` and wrap it as a frame.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::RaggedLine`] if the lines differ in width.
    pub fn new(text: impl Into<String>) -> Result<Self, DimensionError> {
        let text = text.into();
        let shape = validate(&text)?;
        Ok(Self { text, shape })
    }

    /// A frame of spaces with the given shape.
    ///
    /// Written over a visible frame of the same shape, it erases it.
    pub fn blank(shape: Shape) -> Self {
        let line = " ".repeat(shape.width);
        let text = vec![line; shape.height].join("\n");
        Self { text, shape }
    }

    /// The frame text, lines separated by [`LINE_SEPARATOR`].
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Height and width of the frame.
    #[inline]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of lines.
    #[inline]
    pub const fn height(&self) -> usize {
        self.shape.height
    }

    /// Columns per line.
    #[inline]
    pub const fn width(&self) -> usize {
        self.shape.width
    }

    /// Iterate over the lines of the frame.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(LINE_SEPARATOR)
    }

    /// Consume the frame, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl TryFrom<&str> for Frame {
    type Error = DimensionError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<String> for Frame {
    type Error = DimensionError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl AsRef<str> for Frame {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
