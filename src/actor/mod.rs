//! Actors: The render thread and the coordinator that supervises it.
//!
//! Each animated task uses exactly two threads of control:
//! - **Task path**: The calling thread, running the caller's task
//! - **Render path**: A dedicated thread drawing frames at a fixed cadence
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   RenderSignal (set once)   ┌──────────────┐
//! │  Task Path   │ ──────────────────────────▶ │ Render Path  │
//! │ (Animator)   │                             │  (renderer)  │
//! │              │ ◀────────────────────────── │              │
//! └──────────────┘     join: RenderReport      └──────────────┘
//!                                                     │
//!                                                     │ frames + cleanup
//!                                                     ▼
//!                                              ┌──────────────┐
//!                                              │    Output    │
//!                                              └──────────────┘
//! ```
//!
//! Running one animated task inside another is not supported: both render
//! threads would draw over each other.

mod animator;
mod annotate;
mod renderer;
mod signal;
#[cfg(test)]
mod testing;
mod writer;

pub use animator::{run, Animated, Animator};
pub use annotate::Annotation;
pub use renderer::{
    render, RenderConfig, RenderReport, RendererActor, DEFAULT_INTERVAL, MIN_INTERVAL,
};
pub use signal::{render_signal, RenderSignal, SignalReceiver};
