//! Integration tests for Layer 0: Trace
//!
//! Tests for the event vocabulary, recording, statistics, and formatting.

mod events;
mod formatting;
