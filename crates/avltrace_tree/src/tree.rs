//! The owning AVL tree handle.

use avltrace_trace::{Trace, TraceRecorder};

use crate::delete::delete;
use crate::insert::insert;
use crate::node::{self, Link, Node};

/// A self-balancing binary search tree whose mutations report their steps.
///
/// The tree exclusively owns every node. `insert` and `delete` are the only
/// mutators; each returns a fresh [`Trace`] describing how the new shape was
/// reached.
///
/// Equality is structural: two trees are equal when they hold the same keys
/// in the same shape with the same cached heights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlTree<K> {
    root: Link<K>,
}

impl<K> AvlTree<K> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns true if the tree holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the root's key, if any.
    #[must_use]
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|n| &n.key)
    }

    /// Returns the tree's height (`0` when empty).
    #[must_use]
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Returns the root's balance factor (`0` when empty).
    #[must_use]
    pub fn balance_factor(&self) -> i32 {
        node::balance_factor(&self.root)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        node::count(&self.root)
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = None;
    }

    pub(crate) fn link(&self) -> &Link<K> {
        &self.root
    }
}

impl<K: Ord> AvlTree<K> {
    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        node::find(&self.root, key).is_some()
    }

    /// Returns the height of the subtree rooted at `key` (`0` if absent).
    #[must_use]
    pub fn height_of(&self, key: &K) -> u32 {
        node::find(&self.root, key).map_or(0, |n| n.height)
    }

    /// Returns the balance factor of the node holding `key` (`0` if absent).
    #[must_use]
    pub fn balance_factor_of(&self, key: &K) -> i32 {
        node::find(&self.root, key).map_or(0, Node::balance_factor)
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Inserts `key`, returning the steps taken.
    ///
    /// Inserting a key that is already present leaves the tree unchanged and
    /// reports a `duplicate` step.
    pub fn insert(&mut self, key: K) -> Trace<K> {
        let mut trace = TraceRecorder::new();
        self.insert_with(&key, &mut trace);
        trace.into_trace()
    }

    /// Removes `key`, returning the steps taken.
    ///
    /// Removing a missing key leaves the tree unchanged and reports a
    /// `notfound` step.
    pub fn delete(&mut self, key: &K) -> Trace<K> {
        let mut trace = TraceRecorder::new();
        self.delete_with(key, &mut trace);
        trace.into_trace()
    }

    /// Inserts `key`, appending steps to a caller-owned recorder.
    pub fn insert_with(&mut self, key: &K, trace: &mut TraceRecorder<K>) {
        self.root = insert(self.root.take(), key, trace);
    }

    /// Removes `key`, appending steps to a caller-owned recorder.
    pub fn delete_with(&mut self, key: &K, trace: &mut TraceRecorder<K>) {
        self.root = delete(self.root.take(), key, trace);
    }

    /// Returns all keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::new();
        node::collect_keys(&self.root, &mut out);
        out
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
