use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use rlox::{diagnostics::Diagnostics, run};

/// rlox is a tree-walking interpreter for the Lox programming language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a Lox script. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Runs a script file to completion.
///
/// Exit code 65 signals one or more lexical or parse errors; 70 signals a
/// runtime error during execution.
fn run_file(path: &Path) -> ExitCode {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    let mut diagnostics = Diagnostics::new();
    run(&source, &mut diagnostics);

    if diagnostics.had_error() {
        return ExitCode::from(65);
    }
    if diagnostics.had_runtime_error() {
        return ExitCode::from(70);
    }

    ExitCode::SUCCESS
}

/// Runs an interactive prompt, one source line per iteration.
///
/// The error flags are reset between lines so one bad line does not poison
/// subsequent ones. End of input (Ctrl-D) ends the session.
fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut diagnostics = Diagnostics::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        run(&line, &mut diagnostics);
        diagnostics.reset();
    }

    ExitCode::SUCCESS
}
