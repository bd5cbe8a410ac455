//! Integration tests for traced insertion
//!
//! Tests the four rotation triggers, duplicates, and the search path.

use avltrace_trace::{Direction, RotationKind, TraceEvent};
use avltrace_tree::AvlTree;

fn build(keys: &[i32]) -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for &key in keys {
        let _ = tree.insert(key);
    }
    tree
}

fn rotations_of_last_insert(keys: &[i32]) -> Vec<TraceEvent<i32>> {
    let (last, rest) = keys.split_last().expect("non-empty keys");
    let mut tree = build(rest);
    let trace = tree.insert(*last);
    trace.rotations().into_iter().cloned().collect()
}

// =============================================================================
// Rotation Triggers
// =============================================================================

#[test]
fn left_left_case_rotates_right() {
    let mut tree = build(&[30, 20]);
    let trace = tree.insert(10);

    assert_eq!(
        trace.events(),
        &[
            TraceEvent::Traverse {
                key: 10,
                at: 30,
                direction: Direction::Left
            },
            TraceEvent::Traverse {
                key: 10,
                at: 20,
                direction: Direction::Left
            },
            TraceEvent::Insert { key: 10 },
            TraceEvent::Rotation {
                kind: RotationKind::Right,
                at: 30
            },
        ]
    );
    assert_eq!(tree.root_key(), Some(&20));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.shape(), "{20:[10,30]}");
}

#[test]
fn right_right_case_rotates_left() {
    assert_eq!(
        rotations_of_last_insert(&[10, 20, 30]),
        vec![TraceEvent::Rotation {
            kind: RotationKind::Left,
            at: 10
        }]
    );
}

#[test]
fn left_right_case() {
    assert_eq!(
        rotations_of_last_insert(&[30, 10, 20]),
        vec![TraceEvent::Rotation {
            kind: RotationKind::LeftRight,
            at: 30
        }]
    );
    assert_eq!(build(&[30, 10, 20]).shape(), "{20:[10,30]}");
}

#[test]
fn right_left_case() {
    assert_eq!(
        rotations_of_last_insert(&[10, 30, 20]),
        vec![TraceEvent::Rotation {
            kind: RotationKind::RightLeft,
            at: 10
        }]
    );
    assert_eq!(build(&[10, 30, 20]).shape(), "{20:[10,30]}");
}

#[test]
fn rotation_deep_in_the_tree_reports_the_unbalanced_node() {
    // 50 is balanced after inserting 10: the fix happens at 30.
    let mut tree = build(&[50, 30, 70, 20]);
    let trace = tree.insert(10);
    assert_eq!(
        trace.rotations(),
        vec![&TraceEvent::Rotation {
            kind: RotationKind::Right,
            at: 30
        }]
    );
    assert_eq!(tree.shape(), "{50:[20:[10,30],70]}");
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn ascending_inserts_stay_logarithmic() {
    let keys: Vec<i32> = (1..=127).collect();
    let tree = build(&keys);
    assert_eq!(tree.len(), 127);
    assert_eq!(tree.height(), 7);
    assert!(tree.check_invariants().is_ok());
}

// =============================================================================
// Duplicates
// =============================================================================

#[test]
fn duplicate_ends_the_trace_where_the_key_was_found() {
    let mut tree = build(&[20, 10, 30]);
    let before = tree.clone();
    let trace = tree.insert(30);

    assert_eq!(
        trace.events(),
        &[
            TraceEvent::Traverse {
                key: 30,
                at: 20,
                direction: Direction::Right
            },
            TraceEvent::Duplicate { key: 30 },
        ]
    );
    assert_eq!(tree, before);
}

#[test]
fn first_insert_is_a_single_event() {
    let mut tree = AvlTree::new();
    let trace = tree.insert("m");
    assert_eq!(trace.events(), &[TraceEvent::Insert { key: "m" }]);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.balance_factor(), 0);
}
