//! Error types for the avltrace runtime.
//!
//! The tree engine itself never fails; these errors come from validating
//! user input and from the terminal.

use thiserror::Error;

/// The main error type for runtime operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context, such as the file and line a command came from.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid key error.
    #[must_use]
    pub fn invalid_key(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKey(input.into()))
    }

    /// Creates a key out of range error.
    #[must_use]
    pub fn out_of_range(key: i64, min: i64, max: i64) -> Self {
        Self::new(ErrorKind::KeyOutOfRange { key, min, max })
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Formats the error with its context, if any.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.context {
            Some(ctx) => format!("{ctx}: {}", self.kind),
            None => self.kind.to_string(),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input was not a whole number.
    #[error("please enter a valid number (got {0:?})")]
    InvalidKey(String),

    /// Key outside the session's accepted range.
    #[error("please enter a valid number between {min} and {max} (got {key})")]
    KeyOutOfRange {
        /// The rejected key.
        key: i64,
        /// Smallest accepted key.
        min: i64,
        /// Largest accepted key.
        max: i64,
    },

    /// The REPL did not recognize a command.
    #[error("unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    /// A command was given without its required argument.
    #[error("{0} requires a key")]
    MissingArgument(&'static str),

    /// A command was given more words than it takes.
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    /// A filesystem or terminal I/O failure.
    #[error("i/o error: {0}")]
    Io(std::io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
