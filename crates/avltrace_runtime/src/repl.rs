//! The main REPL implementation.
//!
//! Every line is one command. [`Repl::eval`] runs a command and returns the
//! text it would print, so scripts and tests can drive a session without a
//! terminal.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use avltrace_trace::TraceEvent;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::{Error, ErrorKind, Result};
use crate::playback::PlaybackStatus;
use crate::session::Session;

const HELP: &str = "\
Commands:
  insert N   (i)      Insert key N
  delete N   (d, del) Delete key N
  random     (r)      Insert a random key from the configured range
  step       (s)      Show the next step of the last operation
  play       (p)      Show every remaining step
  pause               Pause or resume the last operation's playback
  rewind              Replay the last operation from its first step
  show                Render the tree
  shape               Print the tree's compact shape
  stats               Height, node count, and playback position
  trace               Print every step of the last operation
  reset               Empty the tree
  help                Show this message
  quit       (exit)   Leave the REPL";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Tree, playback, and configuration.
    session: Session,

    /// Whether a mutation shows all of its steps at once.
    auto_play: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Set by `quit`; checked after every command.
    exit_requested: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            auto_play: true,
            show_banner: true,
            prompt: "avl> ".to_string(),
            exit_requested: false,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Makes mutations wait for `step` or `play` instead of showing every step.
    #[must_use]
    pub const fn with_step_mode(mut self) -> Self {
        self.auto_play = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns true once `quit` or `exit` has been evaluated.
    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if line.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&line);

        match self.eval(&line) {
            Ok(output) if !output.is_empty() => println!("{output}"),
            Ok(_) => {}
            Err(e) => self.print_error(&e),
        }

        Ok(!self.exit_requested)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Evaluates one command line and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, missing arguments, and keys
    /// that fail validation. The tree is unchanged in every error case.
    pub fn eval(&mut self, line: &str) -> Result<String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(String::new());
        };
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(ErrorKind::UnexpectedArgument(extra.to_string()).into());
        }

        let command = command.to_ascii_lowercase();
        let takes_key = matches!(command.as_str(), "insert" | "i" | "delete" | "d" | "del");
        if let (false, Some(extra)) = (takes_key, argument) {
            return Err(ErrorKind::UnexpectedArgument(extra.to_string()).into());
        }

        match command.as_str() {
            "insert" | "i" => {
                let input = argument.ok_or(ErrorKind::MissingArgument("insert"))?;
                self.session.insert_input(input)?;
                Ok(self.after_mutation())
            }
            "delete" | "d" | "del" => {
                let input = argument.ok_or(ErrorKind::MissingArgument("delete"))?;
                self.session.delete_input(input)?;
                Ok(self.after_mutation())
            }
            "random" | "r" => {
                let (key, _) = self.session.insert_random()?;
                Ok(format!("Random key: {key}\n{}", self.after_mutation()))
            }
            "step" | "s" => Ok(self.step()),
            "play" | "p" => {
                self.session.playback_mut().resume();
                Ok(self.play())
            }
            "pause" => Ok(self.toggle_pause()),
            "rewind" => {
                self.session.playback_mut().rewind();
                Ok(format!(
                    "Rewound to step 0 of {}.",
                    self.session.playback().total_steps()
                ))
            }
            "show" => Ok(self.session.render()),
            "shape" => Ok(self.session.tree().shape()),
            "stats" => Ok(self.stats_line()),
            "trace" => Ok(self.full_trace()),
            "reset" => {
                self.session.reset();
                Ok("Tree reset.".to_string())
            }
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "exit" => {
                self.exit_requested = true;
                Ok(String::new())
            }
            other => Err(Error::unknown_command(other)),
        }
    }

    /// Evaluates a script of commands, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Evaluation stops
    /// at the first failing command or at `quit`. `origin` names the script
    /// in error context (`origin:line`).
    ///
    /// # Errors
    ///
    /// Returns the first command error, with its origin and line number
    /// attached as context.
    pub fn eval_script(&mut self, source: &str, origin: &str) -> Result<String> {
        let mut outputs = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let output = self
                .eval(trimmed)
                .map_err(|e| e.with_context(format!("{origin}:{}", index + 1)))?;
            if !output.is_empty() {
                outputs.push(output);
            }
            if self.exit_requested {
                break;
            }
        }

        Ok(outputs.join("\n"))
    }

    /// Reads a command file, evaluates it, and prints its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a command fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(e)).with_context(path.display().to_string())
        })?;

        let output = self.eval_script(&source, &path.display().to_string())?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    // =========================================================================
    // Command Output
    // =========================================================================

    fn after_mutation(&mut self) -> String {
        if self.auto_play {
            return self.play();
        }

        let playback = self.session.playback();
        format!(
            "Recorded {} steps ({} rotations). Use `step` or `play`.",
            playback.total_steps(),
            playback.rotation_count()
        )
    }

    fn step(&mut self) -> String {
        let index = self.session.playback().current_step();
        let Some(event) = self.session.playback_mut().step().cloned() else {
            return "No more steps.".to_string();
        };

        let mut out = self.session.format_event(index, &event);
        self.append_tree(&mut out);
        out
    }

    fn play(&mut self) -> String {
        let start = self.session.playback().current_step();
        let events: Vec<TraceEvent<i64>> = self.session.playback_mut().play_to_end().to_vec();
        if events.is_empty() {
            return "No more steps.".to_string();
        }

        let mut out = events
            .iter()
            .enumerate()
            .map(|(i, e)| self.session.format_event(start + i, e))
            .collect::<Vec<_>>()
            .join("\n");
        self.append_tree(&mut out);
        out
    }

    fn toggle_pause(&mut self) -> String {
        let playback = self.session.playback_mut();
        playback.toggle();
        let position = format!(
            "step {} of {}",
            playback.current_step(),
            playback.total_steps()
        );
        match playback.status() {
            PlaybackStatus::Paused => format!("Paused at {position}."),
            PlaybackStatus::Playing => format!("Resumed at {position}."),
            PlaybackStatus::Finished => "Nothing to pause.".to_string(),
        }
    }

    fn full_trace(&self) -> String {
        let trace = self.session.playback().trace();
        if trace.is_empty() {
            return "No trace recorded.".to_string();
        }
        self.session.format_events(trace.events())
    }

    fn stats_line(&self) -> String {
        let stats = self.session.stats();
        let mut line = String::new();
        let _ = write!(
            line,
            "Height: {} | Nodes: {} | Step: {}/{} | Rotations: {} | Status: {}",
            stats.height,
            stats.node_count,
            stats.current_step,
            stats.total_steps,
            stats.rotations,
            stats.status
        );
        line
    }

    /// JSON output stays machine-readable, so the tree is left out.
    fn append_tree(&self, out: &mut String) {
        if self.session.config().json_output {
            return;
        }
        out.push_str("\n\n");
        out.push_str(&self.session.render());
    }

    // =========================================================================
    // Terminal
    // =========================================================================

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {}\x1b[0m", error.describe());
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mavltrace\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");

        let _ = io::stdout().flush();
    }
}
