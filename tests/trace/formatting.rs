//! Integration tests for trace formatting
//!
//! Tests the human-readable and JSON renderings of whole traces.

use avltrace_trace::{
    Direction, HumanFormatter, JsonFormatter, RotationKind, TraceEvent, TraceFormatter,
};

fn rotation_trace() -> Vec<TraceEvent<i32>> {
    vec![
        TraceEvent::Traverse {
            key: 10,
            at: 30,
            direction: Direction::Left,
        },
        TraceEvent::Traverse {
            key: 10,
            at: 20,
            direction: Direction::Left,
        },
        TraceEvent::Insert { key: 10 },
        TraceEvent::Rotation {
            kind: RotationKind::Right,
            at: 30,
        },
    ]
}

#[test]
fn human_trace_with_types() {
    let text = HumanFormatter::new()
        .with_step_numbers()
        .with_types()
        .format_many(&rotation_trace());

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "[001] traverse  Traversing left from 30");
    assert_eq!(lines[3], "[004] rotation  Right rotation at 30");
}

#[test]
fn json_trace_uses_event_field_names() {
    let text = JsonFormatter::new().format_many(&rotation_trace());

    assert!(text.starts_with("[{\"type\":\"traverse\",\"value\":10,\"node\":30,"));
    assert!(text.contains(
        "{\"type\":\"rotation\",\"rotation\":\"Right\",\"node\":30,\"message\":\"Right rotation at 30\"}"
    ));
    assert_eq!(text.matches("\"type\"").count(), 4);
}

#[test]
fn pretty_json_puts_one_event_per_line() {
    let text = JsonFormatter::new().pretty().format_many(&rotation_trace());
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"["));
    assert_eq!(lines.last(), Some(&"]"));
    assert_eq!(lines.len(), 6);
}

#[test]
fn json_string_keys_that_look_numeric_stay_valid() {
    let formatter = JsonFormatter::new();
    let events = vec![
        TraceEvent::Insert {
            key: "007".to_string(),
        },
        TraceEvent::Traverse {
            key: ".5".to_string(),
            at: "1".to_string(),
            direction: Direction::Left,
        },
    ];

    assert_eq!(
        formatter.format_many(&events),
        "[{\"type\":\"insert\",\"value\":\"007\",\"message\":\"Inserting 007\"},\
         {\"type\":\"traverse\",\"value\":\".5\",\"node\":1,\"direction\":\"left\",\"message\":\"Traversing left from 1\"}]"
    );
}
