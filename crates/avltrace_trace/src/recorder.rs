//! Per-call trace accumulation.
//!
//! A [`TraceRecorder`] is created fresh for each mutation and passed by
//! exclusive reference down the recursion. When the call returns, the
//! recorder is turned into a [`Trace`] that the caller owns outright.

use std::ops::Index;

use super::record::{Direction, RotationKind, TraceEvent};
use super::stats::TraceStats;

// =============================================================================
// Trace Recorder
// =============================================================================

/// Accumulates the events of a single tree mutation, in order.
#[derive(Clone, Debug)]
pub struct TraceRecorder<K> {
    events: Vec<TraceEvent<K>>,
    /// Event types to keep (empty = all).
    event_filter: Vec<String>,
}

impl<K> TraceRecorder<K> {
    /// Creates an empty, unfiltered recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            event_filter: Vec::new(),
        }
    }

    /// Builder method to keep only the given event types.
    ///
    /// An empty list keeps everything.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }

    /// Records an event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent<K>) {
        if !self.event_filter.is_empty()
            && !self.event_filter.iter().any(|t| t == event.event_type())
        {
            return;
        }
        self.events.push(event);
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent<K>] {
        &self.events
    }

    /// Finishes recording and hands the events to the caller.
    #[must_use]
    pub fn into_trace(self) -> Trace<K> {
        Trace {
            events: self.events,
        }
    }

    // -------------------------------------------------------------------------
    // Convenience methods for each event kind
    // -------------------------------------------------------------------------

    /// Records a node creation.
    #[inline]
    pub fn insert(&mut self, key: K) {
        self.record(TraceEvent::Insert { key });
    }

    /// Records a descent past `at`.
    #[inline]
    pub fn traverse(&mut self, key: K, at: K, direction: Direction) {
        self.record(TraceEvent::Traverse { key, at, direction });
    }

    /// Records a duplicate insertion attempt.
    #[inline]
    pub fn duplicate(&mut self, key: K) {
        self.record(TraceEvent::Duplicate { key });
    }

    /// Records that the node to delete was found.
    #[inline]
    pub fn delete(&mut self, key: K) {
        self.record(TraceEvent::Delete { key });
    }

    /// Records a successor key overwrite.
    #[inline]
    pub fn replace(&mut self, from: K, to: K) {
        self.record(TraceEvent::Replace { from, to });
    }

    /// Records a rotation about to happen at `at`.
    #[inline]
    pub fn rotation(&mut self, kind: RotationKind, at: K) {
        self.record(TraceEvent::Rotation { kind, at });
    }

    /// Records a deletion of a missing key.
    #[inline]
    pub fn not_found(&mut self, key: K) {
        self.record(TraceEvent::NotFound { key });
    }
}

impl<K> Default for TraceRecorder<K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Trace
// =============================================================================

/// The complete, ordered event sequence produced by one mutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trace<K> {
    events: Vec<TraceEvent<K>>,
}

impl<K> Trace<K> {
    /// Creates a trace from an existing event sequence.
    #[must_use]
    pub fn from_events(events: Vec<TraceEvent<K>>) -> Self {
        Self { events }
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events, in execution order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent<K>] {
        &self.events
    }

    /// Consumes the trace, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent<K>> {
        self.events
    }

    /// Returns an iterator over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent<K>> {
        self.events.iter()
    }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TraceEvent<K>> {
        self.events.get(index)
    }

    /// Returns the last step.
    #[must_use]
    pub fn last(&self) -> Option<&TraceEvent<K>> {
        self.events.last()
    }

    /// Returns the rotation events.
    #[must_use]
    pub fn rotations(&self) -> Vec<&TraceEvent<K>> {
        self.events.iter().filter(|e| e.is_rotation()).collect()
    }

    /// Returns the number of rotations performed.
    #[must_use]
    pub fn rotation_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_rotation()).count()
    }

    /// Returns events of a specific type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceEvent<K>> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Returns the event type names, in order.
    #[must_use]
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.iter().map(TraceEvent::event_type).collect()
    }

    /// Returns statistics about the trace.
    #[must_use]
    pub fn stats(&self) -> TraceStats {
        TraceStats::from_events(&self.events)
    }
}

impl<K> Default for Trace<K> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<K> Index<usize> for Trace<K> {
    type Output = TraceEvent<K>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.events[index]
    }
}

impl<K> IntoIterator for Trace<K> {
    type Item = TraceEvent<K>;
    type IntoIter = std::vec::IntoIter<TraceEvent<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Trace<K> {
    type Item = &'a TraceEvent<K>;
    type IntoIter = std::slice::Iter<'a, TraceEvent<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<K> From<TraceRecorder<K>> for Trace<K> {
    fn from(recorder: TraceRecorder<K>) -> Self {
        recorder.into_trace()
    }
}

// =============================================================================
// Tests
// =============================================================================
