//! Traced deletion.

use std::cmp::Ordering;

use avltrace_trace::{Direction, RotationKind, TraceRecorder};

use crate::node::{Link, Node, balance_factor, min_key};
use crate::rotate;

/// Removes `key` from the subtree, returning the new subtree root.
///
/// A node with two children keeps its place in the tree: its key is
/// overwritten with the in-order successor's key (recorded as `replace`) and
/// the successor's own node is the one unlinked from the right subtree.
/// Every ancestor on the way back up is re-heighted and rebalanced
/// independently, so one deletion may record several rotations.
pub fn delete<K: Ord + Clone>(link: Link<K>, key: &K, trace: &mut TraceRecorder<K>) -> Link<K> {
    let Some(mut node) = link else {
        trace.not_found(key.clone());
        return None;
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            trace.traverse(key.clone(), node.key.clone(), Direction::Left);
            node.left = delete(node.left.take(), key, trace);
        }
        Ordering::Greater => {
            trace.traverse(key.clone(), node.key.clone(), Direction::Right);
            node.right = delete(node.right.take(), key, trace);
        }
        Ordering::Equal => {
            trace.delete(key.clone());
            match (node.left.take(), node.right.take()) {
                (Some(left), Some(right)) => {
                    let successor = min_key(&right).clone();
                    let from = std::mem::replace(&mut node.key, successor.clone());
                    trace.replace(from, successor.clone());
                    node.left = Some(left);
                    node.right = delete(Some(right), &successor, trace);
                }
                (Some(child), None) | (None, Some(child)) => node = child,
                (None, None) => return None,
            }
        }
    }

    node.update_height();
    Some(rebalance(node, trace))
}

/// Picks the rotation for a node on the deletion path.
///
/// The choice depends on the heavy child's own balance rather than on the
/// deleted key.
fn rebalance<K: Clone>(node: Box<Node<K>>, trace: &mut TraceRecorder<K>) -> Box<Node<K>> {
    let balance = node.balance_factor();

    let kind = if balance > 1 && balance_factor(&node.left) >= 0 {
        RotationKind::Right
    } else if balance > 1 && balance_factor(&node.left) < 0 {
        RotationKind::LeftRight
    } else if balance < -1 && balance_factor(&node.right) <= 0 {
        RotationKind::Left
    } else if balance < -1 && balance_factor(&node.right) > 0 {
        RotationKind::RightLeft
    } else {
        return node;
    };

    trace.rotation(kind, node.key.clone());
    rotate::apply(node, kind)
}
