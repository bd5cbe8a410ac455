//! Trace event types.
//!
//! This module defines the micro-steps an AVL mutation can report, in the
//! vocabulary consumers replay: `insert`, `traverse`, `duplicate`, `delete`,
//! `replace`, `rotation`, and `notfound`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Direction
// =============================================================================

/// Which child a search descends into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Toward smaller keys.
    Left,
    /// Toward larger keys.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

// =============================================================================
// Rotation Kind
// =============================================================================

/// The named rebalancing rotation applied at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RotationKind {
    /// Single right rotation (Left-Left case).
    Right,
    /// Single left rotation (Right-Right case).
    Left,
    /// Left rotation on the left child, then right rotation (Left-Right case).
    #[cfg_attr(feature = "serde", serde(rename = "Left-Right"))]
    LeftRight,
    /// Right rotation on the right child, then left rotation (Right-Left case).
    #[cfg_attr(feature = "serde", serde(rename = "Right-Left"))]
    RightLeft,
}

impl RotationKind {
    /// Returns true for the two-step rotations.
    #[must_use]
    pub fn is_double(self) -> bool {
        matches!(self, Self::LeftRight | Self::RightLeft)
    }
}

impl fmt::Display for RotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "Right"),
            Self::Left => write!(f, "Left"),
            Self::LeftRight => write!(f, "Left-Right"),
            Self::RightLeft => write!(f, "Right-Left"),
        }
    }
}

// =============================================================================
// Trace Event
// =============================================================================

/// One micro-step performed by a tree mutation.
///
/// Events are emitted in the order the engine performs the corresponding
/// actions. A `Rotation` event always precedes the rotation it names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TraceEvent<K> {
    /// A new node was created for `key`.
    Insert {
        /// The inserted key.
        key: K,
    },

    /// The search for `key` descends past the node holding `at`.
    Traverse {
        /// The key being searched for.
        key: K,
        /// The key of the node being passed.
        at: K,
        /// The child the search continues into.
        direction: Direction,
    },

    /// `key` is already present; nothing changes.
    Duplicate {
        /// The rejected key.
        key: K,
    },

    /// The node holding `key` was located for removal.
    Delete {
        /// The key being removed.
        key: K,
    },

    /// A two-children node now holds its in-order successor's key.
    Replace {
        /// The key that was overwritten.
        from: K,
        /// The successor key written in its place.
        to: K,
    },

    /// A rotation is about to be applied at the node holding `at`.
    Rotation {
        /// Which rotation.
        kind: RotationKind,
        /// The key of the unbalanced node.
        at: K,
    },

    /// A deletion was requested for a key that is not present.
    #[cfg_attr(feature = "serde", serde(rename = "notfound"))]
    NotFound {
        /// The missing key.
        key: K,
    },
}

impl<K> TraceEvent<K> {
    /// Returns the short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Traverse { .. } => "traverse",
            Self::Duplicate { .. } => "duplicate",
            Self::Delete { .. } => "delete",
            Self::Replace { .. } => "replace",
            Self::Rotation { .. } => "rotation",
            Self::NotFound { .. } => "notfound",
        }
    }

    /// Returns the key a viewer should highlight while this step is shown.
    ///
    /// Replacements have no single focus and return `None`.
    #[must_use]
    pub fn focus(&self) -> Option<&K> {
        match self {
            Self::Traverse { at, .. } | Self::Rotation { at, .. } => Some(at),
            Self::Insert { key }
            | Self::Duplicate { key }
            | Self::Delete { key }
            | Self::NotFound { key } => Some(key),
            Self::Replace { .. } => None,
        }
    }

    /// Returns the rotation kind if this is a rotation event.
    #[must_use]
    pub fn rotation(&self) -> Option<RotationKind> {
        match self {
            Self::Rotation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if this is a rotation event.
    #[must_use]
    pub fn is_rotation(&self) -> bool {
        matches!(self, Self::Rotation { .. })
    }

    /// Returns true if this is a search step.
    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(self, Self::Traverse { .. })
    }

    /// Returns true if the step changes the tree's structure or contents.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Insert { .. } | Self::Delete { .. } | Self::Replace { .. } | Self::Rotation { .. }
        )
    }
}

impl<K: fmt::Display> TraceEvent<K> {
    /// Returns the human-readable description of the step.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl<K: fmt::Display> fmt::Display for TraceEvent<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert { key } => write!(f, "Inserting {key}"),
            Self::Traverse { at, direction, .. } => {
                write!(f, "Traversing {direction} from {at}")
            }
            Self::Duplicate { key } => write!(f, "{key} already exists"),
            Self::Delete { key } => write!(f, "Deleting {key}"),
            Self::Replace { from, to } => write!(f, "Replacing {from} with {to}"),
            Self::Rotation { kind, at } => write!(f, "{kind} rotation at {at}"),
            Self::NotFound { key } => write!(f, "{key} not found"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
