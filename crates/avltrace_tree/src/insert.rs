//! Traced insertion.

use std::cmp::Ordering;

use avltrace_trace::{Direction, RotationKind, TraceRecorder};

use crate::node::{Link, Node};
use crate::rotate;

/// Inserts `key` into the subtree, returning the new subtree root.
///
/// Records a `traverse` for every node passed, then either `insert` for the
/// new leaf or `duplicate` if the key is already present. A duplicate hit
/// returns its node as-is: no height update and no rebalancing at that node.
/// Ancestors are still re-heighted and checked as the recursion unwinds.
pub fn insert<K: Ord + Clone>(link: Link<K>, key: &K, trace: &mut TraceRecorder<K>) -> Link<K> {
    let Some(mut node) = link else {
        trace.insert(key.clone());
        return Some(Node::leaf(key.clone()));
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            trace.traverse(key.clone(), node.key.clone(), Direction::Left);
            node.left = insert(node.left.take(), key, trace);
        }
        Ordering::Greater => {
            trace.traverse(key.clone(), node.key.clone(), Direction::Right);
            node.right = insert(node.right.take(), key, trace);
        }
        Ordering::Equal => {
            trace.duplicate(key.clone());
            return Some(node);
        }
    }

    node.update_height();
    Some(rebalance(node, key, trace))
}

/// Picks the rotation for a node on the insertion path.
///
/// Cases are checked in order Left-Left, Right-Right, Left-Right, Right-Left;
/// the first match wins.
fn rebalance<K: Ord + Clone>(
    node: Box<Node<K>>,
    key: &K,
    trace: &mut TraceRecorder<K>,
) -> Box<Node<K>> {
    let balance = node.balance_factor();
    let left_key = node.left.as_ref().map(|n| &n.key);
    let right_key = node.right.as_ref().map(|n| &n.key);

    let kind = if balance > 1 && left_key.is_some_and(|k| key < k) {
        RotationKind::Right
    } else if balance < -1 && right_key.is_some_and(|k| key > k) {
        RotationKind::Left
    } else if balance > 1 && left_key.is_some_and(|k| key > k) {
        RotationKind::LeftRight
    } else if balance < -1 && right_key.is_some_and(|k| key < k) {
        RotationKind::RightLeft
    } else {
        return node;
    };

    trace.rotation(kind, node.key.clone());
    rotate::apply(node, kind)
}
