//! Integration tests for Layer 1: Tree
//!
//! Tests for traced insertion, deletion, rendering, and the AVL properties.

mod insertion;
mod properties;
mod rendering;
