//! Frames: Validated, dimensionally uniform blocks of text.
//!
//! A frame is one step of an animation. All frames of one animation must
//! share a [`Shape`]; otherwise the cursor-reset suffix computed from the
//! first frame would leave the cursor in the wrong place.

#[allow(clippy::module_inception)]
mod frame;
mod stack;

pub use frame::{line_width, validate, validate_all, Frame, Shape, LINE_SEPARATOR};
pub use stack::{stack_lines, Stacked};
