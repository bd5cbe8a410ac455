//! Session state for the REPL.
//!
//! The session holds the tree being edited, the playback of the most recent
//! mutation, and the random source used to suggest keys. Text input is
//! validated here before it reaches the engine.

use std::io::{self, Write};

use avltrace_trace::{
    HumanFormatter, JsonFormatter, Trace, TraceEvent, TraceFormatter, TraceStats,
};
use avltrace_tree::AvlTree;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::playback::{Playback, PlaybackStatus};

/// A snapshot of the figures a viewer shows next to the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStats {
    /// Height of the whole tree.
    pub height: u32,
    /// Number of keys in the tree.
    pub node_count: usize,
    /// Steps of the last mutation already shown.
    pub current_step: usize,
    /// Steps in the last mutation.
    pub total_steps: usize,
    /// Rotations in the last mutation.
    pub rotations: usize,
    /// Playback status of the last mutation.
    pub status: PlaybackStatus,
}

/// An interactive editing session over an integer-keyed tree.
pub struct Session {
    /// The tree being edited.
    tree: AvlTree<i64>,

    /// Key range, seed, and output settings.
    config: SessionConfig,

    /// Source for `random_key`.
    rng: ChaCha8Rng,

    /// Replay cursor over the last mutation's trace.
    playback: Playback<i64>,

    /// Counts accumulated over every mutation since the last reset.
    totals: TraceStats,
}

impl Session {
    /// Creates a session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            tree: AvlTree::new(),
            config,
            rng,
            playback: Playback::default(),
            totals: TraceStats::default(),
        }
    }

    /// Returns the tree.
    #[must_use]
    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// Returns the playback of the last mutation.
    #[must_use]
    pub fn playback(&self) -> &Playback<i64> {
        &self.playback
    }

    /// Returns a mutable reference to the playback.
    pub fn playback_mut(&mut self) -> &mut Playback<i64> {
        &mut self.playback
    }

    /// Returns counts accumulated since the session started or was reset.
    #[must_use]
    pub fn totals(&self) -> &TraceStats {
        &self.totals
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Parses and range-checks `input`, then inserts it.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a whole number or is outside the
    /// configured key range. The tree is untouched in that case.
    pub fn insert_input(&mut self, input: &str) -> Result<&Trace<i64>> {
        let key = parse_key(input)?;
        if !self.config.accepts(key) {
            return Err(Error::out_of_range(
                key,
                self.config.min_key,
                self.config.max_key,
            ));
        }
        Ok(self.insert(key))
    }

    /// Parses `input`, then deletes it.
    ///
    /// Deletion skips the range check: a key outside the range simply
    /// reports `notfound`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not a whole number.
    pub fn delete_input(&mut self, input: &str) -> Result<&Trace<i64>> {
        let key = parse_key(input)?;
        Ok(self.delete(key))
    }

    /// Inserts `key` and starts playing its trace.
    pub fn insert(&mut self, key: i64) -> &Trace<i64> {
        let trace = self.tree.insert(key);
        self.start(trace)
    }

    /// Deletes `key` and starts playing its trace.
    pub fn delete(&mut self, key: i64) -> &Trace<i64> {
        let trace = self.tree.delete(&key);
        self.start(trace)
    }

    /// Inserts a random in-range key.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured key range is empty.
    pub fn insert_random(&mut self) -> Result<(i64, &Trace<i64>)> {
        let key = self.random_key()?;
        Ok((key, self.insert(key)))
    }

    /// Returns a uniformly random key in the configured range.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured key range is empty
    /// (`min_key > max_key`).
    pub fn random_key(&mut self) -> Result<i64> {
        self.config.validate()?;
        Ok(self
            .rng
            .gen_range(self.config.min_key..=self.config.max_key))
    }

    /// Empties the tree and forgets the last trace.
    pub fn reset(&mut self) {
        self.tree.clear();
        self.playback = Playback::default();
        self.totals = TraceStats::default();
    }

    fn start(&mut self, trace: Trace<i64>) -> &Trace<i64> {
        self.totals.merge(&trace.stats());
        if self.config.trace_to_stderr {
            let _ = writeln!(io::stderr(), "{}", self.format_events(trace.events()));
        }
        self.playback = Playback::new(trace);
        self.playback.trace()
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// Returns the figures shown next to the tree.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            height: self.tree.height(),
            node_count: self.tree.len(),
            current_step: self.playback.current_step(),
            total_steps: self.playback.total_steps(),
            rotations: self.playback.rotation_count(),
            status: self.playback.status(),
        }
    }

    /// Formats events with the configured formatter.
    #[must_use]
    pub fn format_events(&self, events: &[TraceEvent<i64>]) -> String {
        if self.config.json_output {
            JsonFormatter::new().format_many(events)
        } else {
            self.human_formatter().format_many(events)
        }
    }

    /// Formats one step with the configured formatter.
    #[must_use]
    pub fn format_event(&self, index: usize, event: &TraceEvent<i64>) -> String {
        if self.config.json_output {
            JsonFormatter::new().format(index, event)
        } else {
            self.human_formatter().format(index, event)
        }
    }

    /// Renders the tree, highlighting the current playback focus.
    #[must_use]
    pub fn render(&self) -> String {
        self.tree.render(self.playback.focus())
    }

    fn human_formatter(&self) -> HumanFormatter {
        let formatter = HumanFormatter::new();
        if self.config.show_step_numbers {
            formatter.with_step_numbers()
        } else {
            formatter
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a whole-number key, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `InvalidKey` for anything that is not a base-10 integer.
pub fn parse_key(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::invalid_key(trimmed))
}
