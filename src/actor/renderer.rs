//! Renderer Actor: Dedicated thread that draws the animation.
//!
//! The render loop pulls frames from a fresh [`AnimationSequence`], writes
//! each one with a single flush and sleeps on the stop signal between
//! frames. When the signal is set, or the loop fails, it overwrites the
//! last visible frame with blanks and returns.
//!
//! [`AnimationSequence`]: crate::animation::AnimationSequence

use super::signal::{render_signal, RenderSignal, SignalReceiver};
use crate::animation::{AnimatedFrame, Animation, AnimationSequence};
use crate::error::RenderError;
use crate::frame::Shape;
use crate::terminal::OutputBuffer;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace};

/// Delay between frames when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest delay between frames; shorter intervals are raised to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Configuration for the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Delay between frames.
    pub interval: Duration,
    /// Hide the terminal cursor while the animation is visible.
    pub hide_cursor: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            hide_cursor: false,
        }
    }
}

impl RenderConfig {
    /// The configured interval, raised to [`MIN_INTERVAL`] if needed.
    pub fn effective_interval(&self) -> Duration {
        self.interval.max(MIN_INTERVAL)
    }
}

/// Statistics of one finished render loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Frames written, not counting the cleanup write.
    pub frames: u64,
    /// Bytes written, including the cleanup write.
    pub bytes_written: u64,
    /// Shape blanked by the cleanup write, if any frame was visible.
    pub erased: Option<Shape>,
}

/// Pull the next frame, turning a panic in the frame source into an error.
fn next_frame(sequence: &mut AnimationSequence) -> Result<AnimatedFrame, RenderError> {
    match panic::catch_unwind(AssertUnwindSafe(|| sequence.next())) {
        Ok(Some(Ok(frame))) => Ok(frame),
        Ok(Some(Err(e))) => Err(RenderError::from(e)),
        Ok(None) => Err(RenderError::EmptyAnimation),
        Err(_) => Err(RenderError::Panicked),
    }
}

/// Draw `animation` to `output` until `signal` is set.
///
/// The signal is checked before every frame and the loop sleeps on it
/// between frames, so it returns within one interval of the signal being
/// set. Exactly one cleanup write follows the last frame, even when no
/// frame was drawn at all.
///
/// # Errors
///
/// Returns the first frame validation or write failure, or
/// [`RenderError::Panicked`] if the frame source panics. The cleanup write
/// is still attempted first.
pub fn render<W: Write>(
    animation: &Animation,
    config: &RenderConfig,
    signal: &SignalReceiver,
    output: &mut W,
) -> Result<RenderReport, RenderError> {
    let interval = config.effective_interval();
    let mut sequence = animation.sequence();
    let mut buffer = OutputBuffer::new();
    let mut report = RenderReport::default();
    let mut visible: Option<Shape> = None;
    let mut cursor_hidden = false;

    debug!(?interval, "render loop started");

    let outcome = loop {
        if signal.is_set() {
            break Ok(());
        }

        let frame = match next_frame(&mut sequence) {
            Ok(frame) => frame,
            Err(e) => break Err(e),
        };

        buffer.clear();
        if config.hide_cursor && !cursor_hidden {
            buffer.cursor_hide();
            cursor_hidden = true;
        }
        buffer.write_frame(&frame);

        // A failed write may still have reached the terminal in part.
        visible = Some(frame.shape());
        if let Err(e) = buffer.flush_to(output) {
            break Err(RenderError::Write(e));
        }

        report.frames += 1;
        report.bytes_written += buffer.len() as u64;
        trace!(frame = report.frames, "frame drawn");

        if signal.wait(interval) {
            break Ok(());
        }
    };

    buffer.clear();
    if let Some(shape) = visible {
        buffer.erase(shape);
    }
    if cursor_hidden {
        buffer.cursor_show();
    }
    let cleanup = buffer.flush_to(output);
    report.erased = visible;
    if cleanup.is_ok() {
        report.bytes_written += buffer.len() as u64;
    }

    debug!(frames = report.frames, "render loop stopped");

    outcome?;
    cleanup?;
    Ok(report)
}

/// Renderer actor that runs [`render`] on its own thread.
///
/// Dropping the actor stops and joins the thread, so the cleanup write
/// always happens before the actor is gone.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<Result<RenderReport, RenderError>>>,
    /// Stop signal; `None` once set.
    signal: Option<RenderSignal>,
}

impl RendererActor {
    /// Spawn the render thread.
    ///
    /// # Arguments
    ///
    /// * `animation` - Frames to draw.
    /// * `config` - Interval and cursor handling.
    /// * `output` - Stream the render thread writes to.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Spawn`] if the OS fails to start the thread.
    pub fn spawn<W>(
        animation: Animation,
        config: RenderConfig,
        mut output: W,
    ) -> Result<Self, RenderError>
    where
        W: Write + Send + 'static,
    {
        let (signal, receiver) = render_signal();

        let handle = thread::Builder::new()
            .name("reelkit-render".to_string())
            .spawn(move || render(&animation, &config, &receiver, &mut output))
            .map_err(RenderError::Spawn)?;

        Ok(Self {
            handle: Some(handle),
            signal: Some(signal),
        })
    }

    /// Signal the render thread to stop.
    pub fn stop(&mut self) {
        if let Some(signal) = self.signal.take() {
            signal.set();
        }
    }

    /// Stop the render thread and wait for its cleanup write.
    ///
    /// # Errors
    ///
    /// Returns the render loop's error, or [`RenderError::Panicked`] if the
    /// thread panicked.
    pub fn join(mut self) -> Result<RenderReport, RenderError> {
        self.stop();
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or(Err(RenderError::Panicked)),
            None => Ok(RenderReport::default()),
        }
    }
}

impl Drop for RendererActor {
    fn drop(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
