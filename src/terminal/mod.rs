//! Terminal output: cursor control and buffered frame writes.

mod cursor;
mod output;

pub use cursor::cursor_reset;
pub use output::OutputBuffer;
