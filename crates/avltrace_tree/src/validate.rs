//! Structural invariant checks.
//!
//! Used by tests and by callers that want to assert a tree is a valid AVL
//! tree after a sequence of mutations.

use std::cmp::max;
use std::fmt::Debug;

use thiserror::Error;

use crate::node::Link;
use crate::tree::AvlTree;

/// A violated tree invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError<K: Debug> {
    /// A key sits on the wrong side of an ancestor.
    #[error("key {key:?} is out of order relative to ancestor {bound:?}")]
    Unordered {
        /// The misplaced key.
        key: K,
        /// The ancestor key it violates.
        bound: K,
    },

    /// A cached height disagrees with the children.
    #[error("node {key:?} caches height {cached} but its subtree has height {actual}")]
    HeightMismatch {
        /// The node's key.
        key: K,
        /// The stored height.
        cached: u32,
        /// The height computed from the children.
        actual: u32,
    },

    /// A balance factor is outside `[-1, 1]`.
    #[error("node {key:?} has balance factor {balance}")]
    Unbalanced {
        /// The node's key.
        key: K,
        /// The offending balance factor.
        balance: i64,
    },
}

impl<K: Ord + Clone + Debug> AvlTree<K> {
    /// Checks ordering, cached heights, and the AVL balance bound on every node.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in a post-order walk.
    pub fn check_invariants(&self) -> Result<(), InvariantError<K>> {
        validate(self.link()).map(|_| ())
    }
}

/// Validates a subtree, returning its true height.
///
/// # Errors
///
/// Returns the first violation found in a post-order walk.
pub fn validate<K: Ord + Clone + Debug>(link: &Link<K>) -> Result<u32, InvariantError<K>> {
    check(link, None, None)
}

fn check<K: Ord + Clone + Debug>(
    link: &Link<K>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<u32, InvariantError<K>> {
    let Some(node) = link else {
        return Ok(0);
    };

    if let Some(bound) = lower.filter(|b| node.key <= **b) {
        return Err(InvariantError::Unordered {
            key: node.key.clone(),
            bound: bound.clone(),
        });
    }
    if let Some(bound) = upper.filter(|b| node.key >= **b) {
        return Err(InvariantError::Unordered {
            key: node.key.clone(),
            bound: bound.clone(),
        });
    }

    let left = check(&node.left, lower, Some(&node.key))?;
    let right = check(&node.right, Some(&node.key), upper)?;

    let actual = 1 + max(left, right);
    if node.height != actual {
        return Err(InvariantError::HeightMismatch {
            key: node.key.clone(),
            cached: node.height,
            actual,
        });
    }

    let balance = i64::from(left) - i64::from(right);
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced {
            key: node.key.clone(),
            balance,
        });
    }

    Ok(actual)
}
