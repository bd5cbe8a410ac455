//! Integration tests for Layer 2: Runtime
//!
//! Tests for sessions, playback, and scripted REPL runs.

mod repl;
mod session;
