//! Cursor-reset suffixes built from crossterm commands.

use crate::frame::Shape;
use crossterm::{cursor, Command};

fn push_ansi(seq: &mut String, command: &impl Command) {
    // `fmt::Write` for `String` never fails.
    let _ = command.write_ansi(seq);
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Control sequence that moves the cursor from the end of a just-written
/// frame of `shape` back to the frame's top-left corner.
///
/// Single-line frames step back `width` columns, so text to the left of
/// the frame on the same line is preserved. Multi-line frames return to
/// column zero and rise `height - 1` lines; they are expected to start at
/// column zero.
///
/// Dimensions above `u16::MAX` are clamped. Frames accepted by
/// [`validate`](crate::frame::validate) never exceed it.
pub fn cursor_reset(shape: Shape) -> String {
    let mut seq = String::new();

    if shape.is_single_line() {
        if shape.width > 0 {
            push_ansi(&mut seq, &cursor::MoveLeft(clamp_u16(shape.width)));
        }
    } else {
        seq.push('\r');
        push_ansi(&mut seq, &cursor::MoveUp(clamp_u16(shape.height - 1)));
    }

    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_reset() {
        assert_eq!(cursor_reset(Shape::new(1, 5)), "\x1b[5D");
    }

    #[test]
    fn test_zero_width_reset_is_empty() {
        assert_eq!(cursor_reset(Shape::new(1, 0)), "");
    }

    #[test]
    fn test_oversized_reset_is_clamped() {
        assert_eq!(cursor_reset(Shape::new(1, 70_000)), "\x1b[65535D");
    }

    #[test]
    fn test_multi_line_reset() {
        assert_eq!(cursor_reset(Shape::new(3, 4)), "\r\x1b[2A");
    }
}
