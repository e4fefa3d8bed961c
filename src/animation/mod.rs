//! Animations: Frame sources normalized into infinite, cursor-aware streams.
//!
//! An [`Animation`] is a factory. Each call to [`Animation::sequence`]
//! yields a fresh [`AnimationSequence`] that cycles the source forever and
//! appends to every frame the control sequence that puts the cursor back
//! where the frame began. Writing frame after frame therefore draws every
//! frame in the same place.

#[allow(clippy::module_inception)]
mod animation;
mod replay;
mod sequence;

pub use animation::{normalize, Animation, DEFAULT_FRAMES};
pub use sequence::{AnimatedFrame, AnimationSequence};
