//! Single rotations.
//!
//! Both primitives preserve the in-order key sequence, update the heights of
//! the two nodes whose subtree roots change (lower node first), and return the
//! new subtree root. They never record trace events; callers record the
//! rotation before invoking them.

use avltrace_trace::RotationKind;

use crate::node::Node;

/// Rotates `y` right, promoting its left child.
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
///
/// Returns `y` unchanged if it has no left child.
#[must_use]
pub fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Rotates `x` left, promoting its right child.
///
/// ```text
///     x                y
///    / \              / \
///   A   y    ==>     x   C
///      / \          / \
///     B   C        A   B
/// ```
///
/// Returns `x` unchanged if it has no right child.
#[must_use]
pub fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Applies a named rotation at `node`, returning the new subtree root.
///
/// Double rotations first rotate the child on the heavy side, then `node`.
#[must_use]
pub fn apply<K>(mut node: Box<Node<K>>, kind: RotationKind) -> Box<Node<K>> {
    match kind {
        RotationKind::Right => rotate_right(node),
        RotationKind::Left => rotate_left(node),
        RotationKind::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        RotationKind::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}
