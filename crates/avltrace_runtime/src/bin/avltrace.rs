//! avltrace CLI entry point.

use avltrace_runtime::{Repl, Session, SessionConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    step_mode: bool,
    json_output: bool,
    trace_to_stderr: bool,
    seed: Option<u64>,
    min_key: Option<i64>,
    max_key: Option<i64>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        return Err(format!("{flag} requires a value").into());
    };
    raw.parse()
        .map_err(|_| format!("invalid {flag} value: {raw}").into())
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--step" => config.step_mode = true,
            "--json" => config.json_output = true,
            "--trace" => config.trace_to_stderr = true,
            "--seed" => config.seed = Some(parse_value(args, &mut i, "--seed")?),
            "--min" => config.min_key = Some(parse_value(args, &mut i, "--min")?),
            "--max" => config.max_key = Some(parse_value(args, &mut i, "--max")?),
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn session_config(cli: &CliConfig) -> Result<SessionConfig, Box<dyn std::error::Error>> {
    let defaults = SessionConfig::default();
    let mut config = SessionConfig::new()
        .with_key_range(
            cli.min_key.unwrap_or(defaults.min_key),
            cli.max_key.unwrap_or(defaults.max_key),
        )
        .with_json_output(cli.json_output)
        .with_trace_to_stderr(cli.trace_to_stderr);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(&args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("avltrace {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let session = Session::with_config(session_config(&cli)?);

    let mut repl = Repl::new()?.with_session(session);
    if cli.step_mode {
        repl = repl.with_step_mode();
    }

    for file in &cli.files {
        repl.eval_file(file).map_err(|e| e.describe())?;
        if repl.exit_requested() {
            return Ok(());
        }
    }

    if cli.batch_mode {
        return Ok(());
    }

    // Files already set the scene; skip the banner.
    if !cli.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mavltrace\x1b[0m - Step-by-step AVL tree explorer

\x1b[1mUSAGE:\x1b[0m
    avltrace [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run files and exit (no REPL)
    --step             Wait for `step`/`play` after each insert or delete
    --json             Print steps as JSON objects
    --trace            Echo every recorded step to stderr
    --seed N           Seed for `random`
    --min N            Smallest accepted key (default 0)
    --max N            Largest accepted key (default 99)

\x1b[1mEXAMPLES:\x1b[0m
    avltrace                         Start interactive REPL
    avltrace build.avl               Run build.avl, then start REPL
    avltrace -b --json build.avl     Run build.avl, print JSON, exit
    avltrace --seed 42 --max 999     Reproducible random keys up to 999

\x1b[1mREPL COMMANDS:\x1b[0m
    insert N, delete N, random, step, play, pause, rewind,
    show, shape, stats, trace, reset, help, quit
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
