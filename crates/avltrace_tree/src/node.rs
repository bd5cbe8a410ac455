//! Tree nodes and the height/balance queries defined over them.
//!
//! Every node owns its children outright. A subtree is a [`Link`]: either
//! absent or a boxed node.

use std::cmp::max;

/// An owned, possibly absent subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single AVL node.
///
/// `height` is cached and must equal `1 + max(height(left), height(right))`
/// whenever the node is reachable from a tree between public operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    /// The node's key. Unique within a tree.
    pub key: K,
    /// Subtree of smaller keys.
    pub left: Link<K>,
    /// Subtree of larger keys.
    pub right: Link<K>,
    /// Cached subtree height (a leaf has height 1).
    pub height: u32,
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    #[must_use]
    pub fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Recomputes the cached height from the children.
    pub fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    /// Returns `height(left) - height(right)`.
    #[must_use]
    pub fn balance_factor(&self) -> i32 {
        signed(height(&self.left)) - signed(height(&self.right))
    }

    /// Returns true if neither child is present.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Height of a subtree; `0` for an absent one.
#[must_use]
pub fn height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balance factor of a subtree; `0` for an absent one.
#[must_use]
pub fn balance_factor<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Key of the leftmost node of a non-empty subtree.
#[must_use]
pub fn min_key<K>(node: &Node<K>) -> &K {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    &current.key
}

/// Finds the node holding `key`.
#[must_use]
pub fn find<'a, K: Ord>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            std::cmp::Ordering::Less => node.left.as_deref(),
            std::cmp::Ordering::Greater => node.right.as_deref(),
            std::cmp::Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Number of nodes in a subtree.
#[must_use]
pub fn count<K>(link: &Link<K>) -> usize {
    link.as_ref()
        .map_or(0, |n| 1 + count(&n.left) + count(&n.right))
}

/// Appends the subtree's keys to `out` in sorted order.
pub fn collect_keys<K: Clone>(link: &Link<K>, out: &mut Vec<K>) {
    if let Some(node) = link {
        collect_keys(&node.left, out);
        out.push(node.key.clone());
        collect_keys(&node.right, out);
    }
}

/// Heights never approach `i32::MAX` for a tree that fits in memory.
#[allow(clippy::cast_possible_wrap)]
fn signed(h: u32) -> i32 {
    h as i32
}
