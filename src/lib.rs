//! # Reelkit
//!
//! Terminal animations that play while a blocking task runs.
//!
//! Reelkit draws a sequence of text frames in place on the terminal, on a
//! dedicated render thread, for exactly as long as a task runs on the
//! calling thread. When the task finishes, the animation is erased and the
//! task's value is returned unchanged.
//!
//! ## Core Concepts
//!
//! - **Frames**: Blocks of text where every line has the same display width
//! - **Animations**: Restartable frame sources cycled forever, with a
//!   cursor-reset suffix appended to each frame
//! - **Actor model**: The task runs on the caller's thread while a render
//!   thread draws frames until it is signalled to stop
//! - **Single syscall output**: Each frame and the final cleanup are
//!   written with one flush
//!
//! ## Example
//!
//! ```rust,no_run
//! use reelkit::{Animation, Animator, Annotation};
//! use std::time::Duration;
//!
//! let spinner = Animation::cycle(["|", "/", "-", "\\"]);
//! let animator = Animator::new(spinner)
//!     .interval(Duration::from_millis(80))
//!     .annotate(Annotation::new().start_inline("Crunching ").end("done"));
//!
//! let answer = animator.run(|| {
//!     std::thread::sleep(Duration::from_secs(1));
//!     42
//! });
//! assert_eq!(answer, 42);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod animation;
pub mod error;
pub mod frame;
pub mod terminal;

// Re-exports for convenience
pub use actor::{run, Animated, Animator, Annotation, RenderConfig, RenderReport};
pub use animation::{normalize, AnimatedFrame, Animation, AnimationSequence, DEFAULT_FRAMES};
pub use error::{DimensionError, RenderError};
pub use frame::{stack_lines, Frame, Shape};
