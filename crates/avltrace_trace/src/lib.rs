//! Step-trace event model for avltrace.
//!
//! This crate provides:
//! - [`TraceEvent`] - One micro-step of a tree mutation
//! - [`TraceRecorder`] - The per-call accumulator threaded through the engine
//! - [`Trace`] - The ordered, caller-owned result of one mutation
//! - Human-readable and JSON formatters ([`HumanFormatter`], [`JsonFormatter`])
//! - [`TraceStats`] - Summary counts over a trace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod record;
pub mod recorder;
pub mod stats;

pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{Direction, RotationKind, TraceEvent};
pub use recorder::{Trace, TraceRecorder};
pub use stats::TraceStats;
