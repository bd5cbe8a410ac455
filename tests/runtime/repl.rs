//! Integration tests for scripted REPL runs
//!
//! Tests command scripts, error context, and the run loop over a scripted editor.

use avltrace_runtime::{ErrorKind, Repl, ScriptedEditor, Session, SessionConfig};

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::default())
        .with_session(Session::with_config(SessionConfig::deterministic(9)))
        .without_banner()
}

#[test]
fn script_builds_and_deletes() {
    let mut repl = repl();
    let script = "\
# Build the seven-node tree, then remove the root.
insert 20
insert 10
insert 30
insert 5
insert 15
insert 25
insert 35
delete 20
shape
";
    let out = repl.eval_script(script, "seven.avl").unwrap();
    assert!(out.contains("[001] Deleting 20\n[002] Replacing 20 with 25"));
    assert!(out.ends_with("{25:[10:[5,15],30:[_,35]]}"));
}

#[test]
fn script_error_names_file_and_line() {
    let mut repl = repl();
    let err = repl
        .eval_script("insert 1\n\n# comment\nlaunch 2\n", "bad.avl")
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
    assert_eq!(
        err.describe(),
        "bad.avl:4: unknown command: launch (type `help` for a list)"
    );
}

#[test]
fn run_loop_survives_errors() {
    let editor = ScriptedEditor::new(["insert 50", "insert nope", "insert 60", "exit"]);
    let mut repl = Repl::with_editor(editor)
        .with_session(Session::with_config(SessionConfig::deterministic(9)))
        .without_banner();

    repl.run().unwrap();
    assert_eq!(repl.session().tree().keys(), vec![50, 60]);
    assert!(repl.exit_requested());
}

#[test]
fn json_script_prints_one_object_per_step() {
    let mut repl = repl();
    repl.session_mut().config_mut().json_output = true;
    let out = repl.eval_script("insert 2\ninsert 1", "json.avl").unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.starts_with("{\"type\":")));
    assert_eq!(
        lines[1],
        "{\"type\":\"traverse\",\"value\":1,\"node\":2,\"direction\":\"left\",\"message\":\"Traversing left from 2\"}"
    );
}
