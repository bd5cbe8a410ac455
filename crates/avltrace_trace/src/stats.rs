//! Trace statistics.

use std::collections::HashMap;

use super::record::{RotationKind, TraceEvent};

/// Summary counts over an event sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Total number of steps.
    pub total_steps: usize,
    /// Number of rotation events.
    pub rotations: usize,
    /// Number of traverse events.
    pub traversals: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
    /// Count of each rotation kind.
    pub rotation_counts: HashMap<RotationKind, usize>,
}

impl TraceStats {
    /// Computes statistics for a slice of events.
    #[must_use]
    pub fn from_events<K>(events: &[TraceEvent<K>]) -> Self {
        let mut stats = Self {
            total_steps: events.len(),
            ..Self::default()
        };

        for event in events {
            *stats.event_counts.entry(event.event_type()).or_insert(0) += 1;
            if let Some(kind) = event.rotation() {
                stats.rotations += 1;
                *stats.rotation_counts.entry(kind).or_insert(0) += 1;
            }
            if event.is_search() {
                stats.traversals += 1;
            }
        }

        stats
    }

    /// Returns how many events of `event_type` were seen.
    #[must_use]
    pub fn count(&self, event_type: &str) -> usize {
        self.event_counts.get(event_type).copied().unwrap_or(0)
    }

    /// Merges another summary into this one.
    pub fn merge(&mut self, other: &Self) {
        self.total_steps += other.total_steps;
        self.rotations += other.rotations;
        self.traversals += other.traversals;
        for (name, count) in &other.event_counts {
            *self.event_counts.entry(name).or_insert(0) += count;
        }
        for (kind, count) in &other.rotation_counts {
            *self.rotation_counts.entry(*kind).or_insert(0) += count;
        }
    }
}
