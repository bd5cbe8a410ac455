//! Step-by-step replay of a trace.
//!
//! A [`Playback`] is a cursor over the events of one mutation. It does no
//! timing of its own; a viewer calls [`Playback::step`] whenever it is ready
//! to show the next step.

use std::fmt;

use avltrace_trace::{Trace, TraceEvent};

/// Whether a playback is advancing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Steps remain and the viewer is advancing.
    Playing,
    /// Steps remain but the viewer has paused.
    Paused,
    /// Every step has been shown.
    Finished,
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// A cursor over a trace's events.
#[derive(Clone, Debug)]
pub struct Playback<K> {
    trace: Trace<K>,
    /// Number of steps already shown.
    position: usize,
    status: PlaybackStatus,
}

impl<K> Playback<K> {
    /// Starts playing `trace` from its first step.
    #[must_use]
    pub fn new(trace: Trace<K>) -> Self {
        let status = if trace.is_empty() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Playing
        };
        Self {
            trace,
            position: 0,
            status,
        }
    }

    /// Returns the next step and advances past it.
    ///
    /// Once every step has been shown, the first further call marks the
    /// playback finished and returns `None`.
    pub fn step(&mut self) -> Option<&TraceEvent<K>> {
        if self.position >= self.trace.len() {
            self.status = PlaybackStatus::Finished;
            return None;
        }
        self.position += 1;
        self.trace.get(self.position - 1)
    }

    /// Returns the next step without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&TraceEvent<K>> {
        self.trace.get(self.position)
    }

    /// Shows every remaining step at once and finishes.
    pub fn play_to_end(&mut self) -> &[TraceEvent<K>] {
        let start = self.position;
        self.position = self.trace.len();
        self.status = PlaybackStatus::Finished;
        &self.trace.events()[start..]
    }

    /// Returns to the first step.
    pub fn rewind(&mut self) {
        self.position = 0;
        self.status = if self.trace.is_empty() {
            PlaybackStatus::Finished
        } else {
            PlaybackStatus::Playing
        };
    }

    /// Pauses an unfinished playback.
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Resumes a paused playback.
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Playing;
        }
    }

    /// Toggles between playing and paused.
    pub fn toggle(&mut self) {
        match self.status {
            PlaybackStatus::Playing => self.pause(),
            PlaybackStatus::Paused => self.resume(),
            PlaybackStatus::Finished => {}
        }
    }

    /// Returns the number of steps already shown.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.position
    }

    /// Returns the total number of steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Returns the number of steps not yet shown.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.position
    }

    /// Returns the number of rotations in the whole trace.
    #[must_use]
    pub fn rotation_count(&self) -> usize {
        self.trace.rotation_count()
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Returns true once playback has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == PlaybackStatus::Finished
    }

    /// Returns the key to highlight for the step last shown.
    ///
    /// Nothing is highlighted before the first step or after finishing.
    #[must_use]
    pub fn focus(&self) -> Option<&K> {
        if self.is_finished() {
            return None;
        }
        self.position
            .checked_sub(1)
            .and_then(|i| self.trace.get(i))
            .and_then(TraceEvent::focus)
    }

    /// Returns the trace being played.
    #[must_use]
    pub fn trace(&self) -> &Trace<K> {
        &self.trace
    }
}

impl<K> Default for Playback<K> {
    fn default() -> Self {
        Self::new(Trace::default())
    }
}
