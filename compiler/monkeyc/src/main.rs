//! Monkey interpreter CLI.

use std::io::{self, Write};
use std::process::ExitCode;

use monkeyc::commands::{lex_source, parse_source, read_file, run_repl, run_source};
use monkeyc::{init_tracing, DriverError, Session};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1).map(String::as_str) {
        None | Some("repl") => repl(),
        Some("run") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file.mk>");
                return ExitCode::FAILURE;
            };
            run(path)
        }
        Some("lex") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file.mk>");
                return ExitCode::FAILURE;
            };
            read_file(path).and_then(|source| {
                lex_source(path, &source, &mut io::stdout().lock())?;
                Ok(0)
            })
        }
        Some("parse") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file.mk>");
                return ExitCode::FAILURE;
            };
            read_file(path).and_then(|source| parse_source(path, &source, &mut io::stdout().lock()))
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            Ok(0)
        }
        Some("version" | "--version" | "-V") => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Some(command) => {
            // A bare source file runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mk"))
            {
                run(command)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                Ok(1)
            }
        }
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn repl() -> Result<i32, DriverError> {
    println!("Monkey {} (ctrl-d to exit)", env!("CARGO_PKG_VERSION"));
    let mut session = Session::new();
    run_repl(
        &mut session,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    Ok(0)
}

fn run(path: &str) -> Result<i32, DriverError> {
    let source = read_file(path)?;
    let mut session = Session::new();
    let status = run_source(&mut session, path, &source, &mut io::stderr())?;
    io::stdout().flush()?;
    Ok(status)
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive REPL (default)");
    println!("  run <file.mk>        Evaluate a Monkey program");
    println!("  lex <file.mk>        Tokenize and display tokens");
    println!("  parse <file.mk>      Parse and display each statement");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  MONKEY_LOG, RUST_LOG Tracing filter, e.g. monkey_eval=debug");
    println!();
    println!("Examples:");
    println!("  monkey");
    println!("  monkey run fib.mk");
    println!("  monkey fib.mk");
    println!("  MONKEY_LOG=monkey_parse=trace monkey parse fib.mk");
}
