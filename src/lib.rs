//! avltrace - AVL tree engine with step-by-step traces
//!
//! This crate re-exports all layers of the avltrace system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: avltrace_runtime - Session, step playback, REPL, CLI
//! Layer 1: avltrace_tree    - AVL engine, invariant checks, rendering
//! Layer 0: avltrace_trace   - Trace events, recorder, formatters, stats
//! ```

pub use avltrace_runtime as runtime;
pub use avltrace_trace as trace;
pub use avltrace_tree as tree;
