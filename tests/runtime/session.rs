//! Integration tests for sessions
//!
//! Tests input validation, seeded randomness, and accumulated statistics.

use avltrace_runtime::{ErrorKind, Repl, ScriptedEditor, Session, SessionConfig};
use avltrace_trace::TraceEvent;

fn session() -> Session {
    Session::with_config(SessionConfig::deterministic(42))
}

#[test]
fn building_the_classic_right_rotation() {
    let mut session = session();
    for input in ["30", "20"] {
        session.insert_input(input).unwrap();
    }
    let trace = session.insert_input("10").unwrap();
    assert_eq!(trace.rotation_count(), 1);

    let stats = session.stats();
    assert_eq!(stats.height, 2);
    assert_eq!(stats.node_count, 3);
    assert_eq!(stats.rotations, 1);
    assert_eq!(session.tree().shape(), "{20:[10,30]}");
}

#[test]
fn custom_range_is_enforced_for_insert_only() {
    let config = SessionConfig::deterministic(1).with_key_range(-10, 10);
    let mut session = Session::with_config(config);

    session.insert_input("-10").unwrap();
    let err = session.insert_input("11").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::KeyOutOfRange {
            key: 11,
            min: -10,
            max: 10
        }
    ));
    assert_eq!(
        err.to_string(),
        "please enter a valid number between -10 and 10 (got 11)"
    );

    let trace = session.delete_input("1000").unwrap();
    assert_eq!(trace.last(), Some(&TraceEvent::NotFound { key: 1000 }));
}

#[test]
fn same_seed_builds_the_same_tree() {
    let mut a = session();
    let mut b = session();
    for _ in 0..30 {
        let (ka, ta) = a.insert_random().unwrap();
        let ta = ta.clone();
        let (kb, tb) = b.insert_random().unwrap();
        assert_eq!(ka, kb);
        assert_eq!(&ta, tb);
    }
    assert_eq!(a.tree(), b.tree());
    assert!(a.tree().check_invariants().is_ok());
}

#[test]
fn totals_accumulate_until_reset() {
    let mut session = session();
    session.insert(1);
    session.insert(2);
    session.insert(3);
    session.delete(2);

    let totals = session.totals();
    assert_eq!(totals.count("insert"), 3);
    // Removing the root also removes its successor.
    assert_eq!(totals.count("delete"), 2);
    assert_eq!(totals.count("replace"), 1);
    assert_eq!(totals.rotations, 1);

    session.reset();
    assert_eq!(session.totals().total_steps, 0);
    assert!(session.tree().is_empty());
}

#[test]
fn empty_range_random_is_an_error() {
    let config = SessionConfig::new().with_key_range(10, 1).with_seed(1);
    let mut repl = Repl::with_editor(ScriptedEditor::default())
        .with_session(Session::with_config(config))
        .without_banner();

    let err = repl.eval("random").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    assert!(repl.session().tree().is_empty());

    // A range emptied after construction is caught the same way.
    let mut session = Session::with_config(SessionConfig::deterministic(2));
    session.config_mut().min_key = 50;
    session.config_mut().max_key = 49;
    assert!(session.random_key().is_err());
}
