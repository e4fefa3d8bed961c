//! Replay buffer that makes a single-pass frame source restartable.
//!
//! The first pass over the source records every frame it yields. Streams
//! created afterwards replay the recording and only pull from the source
//! once they run past its end, so any number of streams can share one
//! source without skipping frames.

use std::sync::{Arc, Mutex, PoisonError};

struct ReplayState<I> {
    /// `None` once the source has been exhausted.
    source: Option<I>,
    recorded: Vec<String>,
}

/// Shared recording of a single-pass source.
pub(crate) struct Replay<I> {
    state: Mutex<ReplayState<I>>,
}

impl<I> Replay<I>
where
    I: Iterator<Item = String>,
{
    pub(crate) const fn new(source: I) -> Self {
        Self {
            state: Mutex::new(ReplayState {
                source: Some(source),
                recorded: Vec::new(),
            }),
        }
    }

    /// A fresh stream positioned at the first frame.
    pub(crate) fn stream(self: &Arc<Self>) -> ReplayStream<I> {
        ReplayStream {
            replay: Arc::clone(self),
            position: 0,
        }
    }

    fn get(&self, position: usize) -> Option<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(frame) = state.recorded.get(position) {
            return Some(frame.clone());
        }

        // Streams advance one frame at a time, so `position` is exactly
        // the length of the recording here.
        match state.source.as_mut()?.next() {
            Some(frame) => {
                state.recorded.push(frame.clone());
                Some(frame)
            }
            None => {
                state.source = None;
                None
            }
        }
    }
}

/// One pass over a [`Replay`].
pub(crate) struct ReplayStream<I> {
    replay: Arc<Replay<I>>,
    position: usize,
}

impl<I> Iterator for ReplayStream<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let frame = self.replay.get(self.position)?;
        self.position += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_replay_records_first_pass() {
        let pulls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulls);
        let source = ["a", "b", "c"].into_iter().map(move |s| {
            counter.fetch_add(1, Ordering::Relaxed);
            s.to_string()
        });
        let replay = Arc::new(Replay::new(source));

        assert_eq!(replay.stream().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(replay.stream().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(pulls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_replay_interleaved_streams() {
        let replay = Arc::new(Replay::new((0..4).map(|i| i.to_string())));
        let mut first = replay.stream();
        let mut second = replay.stream();

        assert_eq!(first.next().as_deref(), Some("0"));
        assert_eq!(first.next().as_deref(), Some("1"));
        assert_eq!(second.next().as_deref(), Some("0"));
        assert_eq!(second.next().as_deref(), Some("1"));
        assert_eq!(second.next().as_deref(), Some("2"));
        assert_eq!(first.next().as_deref(), Some("2"));
        assert_eq!(first.next().as_deref(), Some("3"));
        assert_eq!(first.next(), None);
        assert_eq!(second.next().as_deref(), Some("3"));
        assert_eq!(second.next(), None);
    }

    #[test]
    fn test_replay_infinite_source_keeps_recording() {
        let replay = Arc::new(Replay::new((0u64..).map(|i| i.to_string())));
        assert_eq!(replay.stream().take(50).count(), 50);
        assert_eq!(replay.stream().take(80).count(), 80);

        let state = replay.state.lock().unwrap();
        assert_eq!(state.recorded.len(), 80);
        assert!(state.source.is_some());
    }

    #[test]
    fn test_replay_empty_source() {
        let replay = Arc::new(Replay::new(std::iter::empty::<String>()));
        assert_eq!(replay.stream().next(), None);
        assert_eq!(replay.stream().next(), None);
    }
}
