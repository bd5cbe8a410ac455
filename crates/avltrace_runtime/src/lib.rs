//! Session, step playback, REPL, and CLI for avltrace.
//!
//! This crate provides:
//! - [`Session`] - A tree being edited, with input validation and a seeded
//!   random source
//! - [`Playback`] - A step cursor over the trace of the last mutation
//! - [`Repl`] - Interactive read-eval-print loop over one-line commands
//! - The `avltrace` binary
//!
//! # Example
//!
//! ```
//! use avltrace_runtime::{Session, SessionConfig};
//!
//! let mut session = Session::with_config(SessionConfig::deterministic(1));
//! session.insert_input("30").unwrap();
//! session.insert_input("20").unwrap();
//! let trace = session.insert_input("10").unwrap();
//! assert_eq!(trace.rotation_count(), 1);
//! assert_eq!(session.tree().shape(), "{20:[10,30]}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod error;
pub mod playback;
pub mod repl;
pub mod session;

pub use config::SessionConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use error::{Error, ErrorKind, Result};
pub use playback::{Playback, PlaybackStatus};
pub use repl::Repl;
pub use session::{Session, SessionStats, parse_key};
