//! CLI driver for the SHLang scanner: tokenize a script file or run a
//! line-at-a-time prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 if args[1] != "--help" && args[1] != "-h" => run_file(&args[1]),
        _ => {
            eprintln!("Usage: shlang [script]");
            // EX_USAGE
            ExitCode::from(64)
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not open file: {e}");
            return ExitCode::from(2);
        }
    };

    match shlang::scan_tokens(&source, Some(path)) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Each prompt line is an independent scan; errors are reported and the
/// prompt continues.
fn run_prompt() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }
        let Some(line) = lines.next() else {
            return ExitCode::SUCCESS;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };

        match shlang::scan_tokens(&line, Some("<stdin>")) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{token}");
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}
