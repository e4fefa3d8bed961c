//! `Animation`: A factory of fresh, infinite, cursor-aware frame streams.

use super::replay::Replay;
use super::sequence::{AnimationSequence, FrameSource, FrameStream};
use std::fmt;
use std::sync::Arc;

/// Frames of the default animation: a five-column bar filling with `#`.
pub const DEFAULT_FRAMES: [&str; 5] = ["     ", "#    ", "##   ", "###  ", "#### "];

/// A stateless factory of [`AnimationSequence`]s.
///
/// Cloning is cheap; clones share the same frame source.
///
/// # Example
///
/// ```
/// use reelkit::Animation;
///
/// let spinner = Animation::cycle(["|", "/", "-", "\\"]);
/// let frames: Vec<String> = spinner
///     .sequence()
///     .take(6)
///     .map(|frame| frame.unwrap().frame().to_string())
///     .collect();
/// assert_eq!(frames, ["|", "/", "-", "\\", "|", "/"]);
/// ```
#[derive(Clone)]
pub struct Animation {
    source: FrameSource,
}

impl Animation {
    /// Build an animation from a restartable frame function.
    ///
    /// `factory` is called when a sequence pulls its first frame and
    /// again each time the frames it returned run out.
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<String> + 'static,
        I::IntoIter: Send + 'static,
    {
        let source: FrameSource = Arc::new(move || {
            let frames = factory().into_iter().map(Into::<String>::into);
            Box::new(frames) as FrameStream
        });
        Self { source }
    }

    /// Build an animation that cycles a known list of frames.
    pub fn cycle<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: Arc<[String]> = frames.into_iter().map(Into::<String>::into).collect();
        Self::from_fn(move || {
            let frames = Arc::clone(&frames);
            (0..frames.len()).map(move |i| frames[i].clone())
        })
    }

    /// Build an animation from a single-pass, possibly infinite iterator.
    ///
    /// Frames are recorded as they are first pulled and replayed on later
    /// cycles, so a finite iterator still animates forever.
    ///
    /// The recording is never trimmed: an infinite iterator keeps growing
    /// it by one frame per frame drawn. Use [`Animation::from_fn`] for
    /// endless sources that can be restarted.
    pub fn buffered<I>(frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String> + 'static,
        I::IntoIter: Send + 'static,
    {
        let replay = Arc::new(Replay::new(frames.into_iter().map(Into::<String>::into)));
        Self::from_fn(move || replay.stream())
    }

    /// Start a fresh sequence from the first frame.
    pub fn sequence(&self) -> AnimationSequence {
        AnimationSequence::new(Arc::clone(&self.source))
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::cycle(DEFAULT_FRAMES)
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation").finish_non_exhaustive()
    }
}

/// Turn a frame-producing function into an [`Animation`].
///
/// Validation is lazy: each frame is checked as the render loop pulls it.
/// Equivalent to [`Animation::from_fn`].
pub fn normalize<F, I>(frames: F) -> Animation
where
    F: Fn() -> I + Send + Sync + 'static,
    I: IntoIterator,
    I::Item: Into<String> + 'static,
    I::IntoIter: Send + 'static,
{
    Animation::from_fn(frames)
}
