//! AVL tree engine for avltrace.
//!
//! This crate provides:
//! - [`AvlTree`] - The owning tree handle with traced `insert`/`delete`
//! - [`Node`] and the [`height`]/[`balance_factor`] queries
//! - Rotation primitives in [`rotate`]
//! - [`InvariantError`] and structural validation
//! - Compact and decorated text rendering
//!
//! # Example
//!
//! ```
//! use avltrace_tree::AvlTree;
//! use avltrace_trace::RotationKind;
//!
//! let mut tree = AvlTree::new();
//! let _ = tree.insert(30);
//! let _ = tree.insert(20);
//! let trace = tree.insert(10);
//!
//! assert_eq!(trace.rotations()[0].rotation(), Some(RotationKind::Right));
//! assert_eq!(tree.shape(), "{20:[10,30]}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod delete;
pub mod insert;
pub mod node;
pub mod pretty;
pub mod rotate;
pub mod tree;
pub mod validate;

pub use node::{Link, Node, balance_factor, height};
pub use pretty::EMPTY_TREE;
pub use tree::AvlTree;
pub use validate::InvariantError;
