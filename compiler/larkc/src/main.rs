//! The `lark` binary.
//!
//! Exit status: 0 on success, 1 when the program fails to parse or run (the
//! error is printed to stdout), 2 for a bad command line or unreadable file.

use std::process::ExitCode;

use larkc::cli::{parse_args, Command, USAGE};
use larkc::{parse_source, read_source, run_file, tracing_setup, Error};

fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("lark {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Check { path } => read_source(&path).and_then(|src| parse_source(&src).map(drop)),
        Command::Run { path, config } => run_file(&path, config).map(drop),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Io { .. }) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
