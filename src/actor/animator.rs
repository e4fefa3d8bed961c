//! Animator: Runs a task while the renderer actor draws an animation.
//!
//! The task runs on the calling thread; the animation runs on the render
//! thread. When the task returns, the render thread is stopped and joined
//! before the task's value is handed back, so the terminal is clean by the
//! time the caller sees the result. A panicking task is caught, the render
//! thread is stopped and joined, and the panic is then resumed with its
//! original payload.
//!
//! The panic hook runs when the task panics, before the animation is
//! erased, so the default hook's message may be followed by one more
//! frame and the cleanup write on the same terminal.

use super::annotate::Annotation;
use super::renderer::{RenderConfig, RenderReport, RendererActor};
use super::writer::SharedWriter;
use crate::animation::Animation;
use crate::error::RenderError;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use tracing::warn;

/// A task's value together with the outcome of its animation.
#[derive(Debug)]
pub struct Animated<T> {
    /// The task's return value, untouched.
    pub value: T,
    /// How the render thread finished.
    pub render: Result<RenderReport, RenderError>,
}

impl<T> Animated<T> {
    /// Discard the render outcome.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Builder for running tasks with an animation.
///
/// # Example
///
/// ```
/// use reelkit::{Animation, Animator, Annotation};
/// use std::time::Duration;
///
/// let animator = Animator::new(Animation::cycle(["|", "/", "-", "\\"]))
///     .interval(Duration::from_millis(50))
///     .annotate(Annotation::new().start_inline("Counting ").end("done"));
///
/// let total: u64 = animator.run(|| (1..=1_000u64).sum());
/// assert_eq!(total, 500_500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Animator {
    animation: Animation,
    config: RenderConfig,
    annotation: Annotation,
}

impl Animator {
    /// Create an animator with the default configuration.
    pub fn new(animation: Animation) -> Self {
        Self::with_config(animation, RenderConfig::default())
    }

    /// Create an animator with a custom configuration.
    pub fn with_config(animation: Animation, config: RenderConfig) -> Self {
        Self {
            animation,
            config,
            annotation: Annotation::new(),
        }
    }

    /// Set the delay between frames.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    /// Hide the cursor while the animation is visible.
    #[must_use]
    pub fn hide_cursor(mut self, hide: bool) -> Self {
        self.config.hide_cursor = hide;
        self
    }

    /// Write messages before and after the task.
    #[must_use]
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotation = annotation;
        self
    }

    /// The animation drawn while a task runs.
    pub const fn animation(&self) -> &Animation {
        &self.animation
    }

    /// The render configuration.
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Run `task` while animating on standard output.
    ///
    /// Returns exactly what `task` returns. Render failures are logged and
    /// otherwise ignored; use [`Animator::run_on`] to inspect them.
    pub fn run<T, F>(&self, task: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.supervise(io::stdout(), task, |_| true).into_value()
    }

    /// Run a fallible `task` while animating on standard output.
    ///
    /// Like [`Animator::run`], but the end message is only written if the
    /// task returns `Ok`. The task's error is returned as is.
    pub fn try_run<T, E, F>(&self, task: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.supervise(io::stdout(), task, Result::is_ok).into_value()
    }

    /// Run `task` while animating on `output`.
    pub fn run_on<W, T, F>(&self, output: W, task: F) -> Animated<T>
    where
        W: Write + Send + 'static,
        F: FnOnce() -> T,
    {
        self.supervise(output, task, |_| true)
    }

    fn supervise<W, T, F, S>(&self, output: W, task: F, succeeded: S) -> Animated<T>
    where
        W: Write + Send + 'static,
        F: FnOnce() -> T,
        S: FnOnce(&T) -> bool,
    {
        let mut output = SharedWriter::new(output);
        if let Err(e) = self.annotation.write_start(&mut output) {
            warn!(error = %e, "failed to write start message");
        }

        let actor = RendererActor::spawn(self.animation.clone(), self.config, output.clone());
        let outcome = panic::catch_unwind(AssertUnwindSafe(task));
        let render = actor.and_then(RendererActor::join);
        if let Err(e) = &render {
            warn!(error = %e, "animation failed");
        }

        let value = match outcome {
            Ok(value) => value,
            Err(payload) => panic::resume_unwind(payload),
        };

        if succeeded(&value) {
            if let Err(e) = self.annotation.write_end(&mut output) {
                warn!(error = %e, "failed to write end message");
            }
        }

        Animated { value, render }
    }
}

/// Run `task` while `animation` plays on standard output.
///
/// Frames are drawn every `interval` (at least [`MIN_INTERVAL`]) until the
/// task returns. The animation is erased before the task's value is
/// returned. If the task panics, the animation is erased and the panic
/// continues with its original payload.
///
/// # Example
///
/// ```
/// use reelkit::{run, Animation};
/// use std::time::Duration;
///
/// let spinner = Animation::cycle(["|", "/", "-", "\\"]);
/// let word = run(
///     || {
///         std::thread::sleep(Duration::from_millis(30));
///         "ready"
///     },
///     &spinner,
///     Duration::from_millis(10),
/// );
/// assert_eq!(word, "ready");
/// ```
///
/// [`MIN_INTERVAL`]: super::MIN_INTERVAL
pub fn run<T, F>(task: F, animation: &Animation, interval: Duration) -> T
where
    F: FnOnce() -> T,
{
    Animator::new(animation.clone()).interval(interval).run(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::testing::{BrokenPipe, Capture};
    use crate::error::DimensionError;
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    fn animator(frames: &[&str], interval_ms: u64) -> Animator {
        Animator::new(Animation::cycle(frames.to_vec()))
            .interval(Duration::from_millis(interval_ms))
    }

    #[test]
    fn test_returns_task_value() {
        let capture = Capture::new();
        let animated = animator(&["AA", "BB"], 100).run_on(capture.clone(), || {
            thread::sleep(Duration::from_millis(250));
            42
        });

        assert_eq!(animated.value, 42);
        let report = animated.render.unwrap();
        assert!(report.frames >= 2);
        assert_eq!(capture.flushes() as u64, report.frames + 1);
    }

    #[test]
    fn test_render_stopped_before_return() {
        let capture = Capture::new();
        let animator = animator(&["ab"], 10);
        animator.run_on(capture.clone(), || thread::sleep(Duration::from_millis(30)));

        let flushes = capture.flushes();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(capture.flushes(), flushes);

        let parser = capture.screen();
        assert_eq!(parser.screen().contents().trim(), "");
        assert_eq!(parser.screen().cursor_position(), (0, 0));
    }

    #[test]
    fn test_instant_task_still_cleans_up_once() {
        let capture = Capture::new();
        let animated = animator(&["ab"], 10).run_on(capture.clone(), || "quick");

        assert_eq!(animated.value, "quick");
        let report = animated.render.unwrap();
        assert!(report.frames <= 1);
        assert_eq!(capture.flushes() as u64, report.frames + 1);
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Failure(&'static str);

    #[test]
    fn test_task_error_is_returned_verbatim() {
        let capture = Capture::new();
        let animator =
            animator(&["ab"], 10).annotate(Annotation::new().start("Go").end("Done"));
        let animated = animator.supervise(
            capture.clone(),
            || -> Result<u32, Failure> {
                thread::sleep(Duration::from_millis(20));
                Err(Failure("disk full"))
            },
            Result::is_ok,
        );

        assert_eq!(animated.value, Err(Failure("disk full")));
        assert!(animated.render.is_ok());
        let contents = capture.contents();
        assert!(contents.starts_with("Go\n"));
        assert!(!contents.contains("Done"));
    }

    #[test]
    fn test_task_panic_is_resumed_after_cleanup() {
        let capture = Capture::new();
        let animator = animator(&["ab", "cd"], 10);
        let sink = capture.clone();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            animator.run_on(sink, || -> u32 {
                thread::sleep(Duration::from_millis(30));
                panic!("task exploded")
            })
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"task exploded"));

        let flushes = capture.flushes();
        assert!(flushes >= 1);
        thread::sleep(Duration::from_millis(40));
        assert_eq!(capture.flushes(), flushes);
        assert_eq!(capture.screen().screen().contents().trim(), "");
    }

    #[test]
    fn test_bad_animation_does_not_hide_task_value() {
        let capture = Capture::new();
        let animated = animator(&["AB", "CDE"], 10).run_on(capture, || {
            thread::sleep(Duration::from_millis(50));
            "finished"
        });

        assert_eq!(animated.value, "finished");
        assert!(matches!(
            animated.render,
            Err(RenderError::Dimension(DimensionError::ShapeMismatch { .. }))
        ));
    }

    #[test]
    fn test_broken_output_does_not_hide_task_value() {
        let animated = animator(&["ab"], 10).run_on(BrokenPipe, || {
            thread::sleep(Duration::from_millis(20));
            7
        });

        assert_eq!(animated.value, 7);
        assert!(animated.render.unwrap_err().is_write());
    }

    #[test]
    fn test_inline_annotation() {
        let capture = Capture::new();
        let animator = Animator::default()
            .interval(Duration::from_millis(10))
            .annotate(Annotation::new().start_inline("Working ").end("done"));
        animator.run_on(capture.clone(), || thread::sleep(Duration::from_millis(40)));

        let contents = capture.contents();
        assert!(contents.starts_with("Working "));
        assert!(contents.ends_with("done\n"));

        let parser = capture.screen();
        let first_line = parser.screen().contents();
        assert_eq!(first_line.lines().next().unwrap().trim_end(), "Working done");
    }

    #[test]
    fn test_builder() {
        let animator = Animator::default()
            .interval(Duration::from_millis(250))
            .hide_cursor(true);
        assert_eq!(animator.config().interval, Duration::from_millis(250));
        assert!(animator.config().hide_cursor);
    }
}
