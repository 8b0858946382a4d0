//! Monty CLI — run a Monty bytecode file.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage error, unreadable file, or any fault during the run
//!
//! Set `MONTY_LOG` (e.g. `MONTY_LOG=debug`) to trace execution on stderr.

mod commands;

use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        print_usage();
        process::exit(1);
    }

    if let Err(code) = commands::run(&args[1]) {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("USAGE: monty file");
}

/// Logging is off unless `MONTY_LOG` asks for it, so stderr carries only
/// diagnostics by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("MONTY_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
