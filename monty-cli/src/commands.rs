//! CLI command implementations.

use std::io;

use monty_assembler::SourceLines;
use tracing::debug;

/// Execute a Monty program file, printing its output to stdout.
pub fn run(path: &str) -> Result<(), i32> {
    let source = SourceLines::open(path).map_err(|e| {
        eprintln!("{e}");
        1
    })?;

    let stdout = io::stdout();
    monty_vm::run(source, stdout.lock()).map_err(|e| {
        debug!(path, line = ?e.line(), "run failed");
        eprintln!("{e}");
        1
    })
}
