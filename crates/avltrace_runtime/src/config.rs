//! Configuration for an interactive session.

use crate::error::{Error, ErrorKind, Result};

/// Configuration for a [`Session`](crate::Session).
///
/// Controls the accepted key range, randomness, and how traces are printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Smallest key accepted by `insert` (inclusive).
    pub min_key: i64,

    /// Largest key accepted by `insert` (inclusive).
    pub max_key: i64,

    /// Seed for random key generation (`None` = seeded from the OS).
    pub seed: Option<u64>,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Echo every recorded step to stderr as it is produced.
    pub trace_to_stderr: bool,

    /// Prefix printed steps with their step number.
    pub show_step_numbers: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_key: 0,
            max_key: 99,
            seed: None,
            json_output: false,
            trace_to_stderr: false,
            show_step_numbers: true,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reproducible configuration for tests and scripted runs.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Creates a configuration that echoes every step to stderr.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            trace_to_stderr: true,
            ..Self::default()
        }
    }

    /// Builder method to set the accepted key range.
    #[must_use]
    pub fn with_key_range(mut self, min: i64, max: i64) -> Self {
        self.min_key = min;
        self.max_key = max;
        self
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }

    /// Builder method to show/hide step numbers.
    #[must_use]
    pub fn with_step_numbers(mut self, show: bool) -> Self {
        self.show_step_numbers = show;
        self
    }

    /// Checks that the key range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `Internal` when `min_key > max_key`.
    pub fn validate(&self) -> Result<()> {
        if self.min_key > self.max_key {
            return Err(Error::new(ErrorKind::Internal(format!(
                "empty key range: {} > {}",
                self.min_key, self.max_key
            ))));
        }
        Ok(())
    }

    /// Returns true if `key` is inside the accepted range.
    #[must_use]
    pub fn accepts(&self, key: i64) -> bool {
        (self.min_key..=self.max_key).contains(&key)
    }
}
