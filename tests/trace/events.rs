//! Integration tests for trace events and recording
//!
//! Tests event wire names, messages, highlight focus, and recorder filtering.

use avltrace_trace::{Direction, RotationKind, Trace, TraceEvent, TraceRecorder, TraceStats};

// =============================================================================
// Event Vocabulary
// =============================================================================

#[test]
fn every_event_kind_has_a_wire_name_and_message() {
    let cases = [
        (TraceEvent::Insert { key: 5 }, "insert", "Inserting 5"),
        (
            TraceEvent::Traverse {
                key: 5,
                at: 10,
                direction: Direction::Left,
            },
            "traverse",
            "Traversing left from 10",
        ),
        (TraceEvent::Duplicate { key: 5 }, "duplicate", "5 already exists"),
        (TraceEvent::Delete { key: 5 }, "delete", "Deleting 5"),
        (
            TraceEvent::Replace { from: 5, to: 7 },
            "replace",
            "Replacing 5 with 7",
        ),
        (
            TraceEvent::Rotation {
                kind: RotationKind::RightLeft,
                at: 10,
            },
            "rotation",
            "Right-Left rotation at 10",
        ),
        (TraceEvent::NotFound { key: 5 }, "notfound", "5 not found"),
    ];

    for (event, name, message) in cases {
        assert_eq!(event.event_type(), name);
        assert_eq!(event.message(), message);
    }
}

#[test]
fn focus_follows_the_node_being_visited() {
    let traverse = TraceEvent::Traverse {
        key: 5,
        at: 10,
        direction: Direction::Right,
    };
    assert_eq!(traverse.focus(), Some(&10));
    assert_eq!(TraceEvent::Delete { key: 3 }.focus(), Some(&3));
    assert_eq!(TraceEvent::Replace { from: 3, to: 4 }.focus(), None);
}

#[test]
fn categories() {
    let rotation = TraceEvent::Rotation {
        kind: RotationKind::Left,
        at: 1,
    };
    assert!(rotation.is_rotation());
    assert!(rotation.is_structural());
    assert!(!rotation.is_search());

    let traverse = TraceEvent::Traverse {
        key: 1,
        at: 2,
        direction: Direction::Left,
    };
    assert!(traverse.is_search());
    assert!(!traverse.is_structural());
    assert!(!TraceEvent::NotFound { key: 1 }.is_structural());
}

// =============================================================================
// Recording
// =============================================================================

#[test]
fn recorder_keeps_call_order() {
    let mut recorder = TraceRecorder::new();
    recorder.traverse(10, 30, Direction::Left);
    recorder.traverse(10, 20, Direction::Left);
    recorder.insert(10);
    recorder.rotation(RotationKind::Right, 30);

    let trace = recorder.into_trace();
    assert_eq!(trace.event_types(), vec!["traverse", "traverse", "insert", "rotation"]);
    assert_eq!(trace.rotation_count(), 1);
    assert_eq!(trace[2], TraceEvent::Insert { key: 10 });
}

#[test]
fn filtered_recorder_drops_other_kinds() {
    let mut recorder =
        TraceRecorder::new().filter_events(vec!["rotation".to_string(), "replace".to_string()]);
    recorder.traverse(1, 2, Direction::Right);
    recorder.replace(2, 3);
    recorder.delete(3);
    recorder.rotation(RotationKind::LeftRight, 4);

    assert_eq!(recorder.len(), 2);
    assert!(recorder.events().iter().all(|e| e.is_structural()));
}

#[test]
fn stats_merge_across_traces() {
    let first: Trace<i32> = Trace::from_events(vec![
        TraceEvent::Insert { key: 1 },
        TraceEvent::Rotation {
            kind: RotationKind::Left,
            at: 1,
        },
    ]);
    let second: Trace<i32> = Trace::from_events(vec![TraceEvent::NotFound { key: 9 }]);

    let mut totals = TraceStats::default();
    totals.merge(&first.stats());
    totals.merge(&second.stats());

    assert_eq!(totals.total_steps, 3);
    assert_eq!(totals.rotations, 1);
    assert_eq!(totals.count("notfound"), 1);
    assert_eq!(totals.count("replace"), 0);
}
