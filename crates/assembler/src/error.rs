//! Error types for reading Monty source files.

use thiserror::Error;

/// Errors produced while opening or reading a program file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The program file could not be opened.
    #[error("Error: Can't open file {path}")]
    Open { path: String },

    /// Reading a line failed after the file was opened.
    #[error("Error: Can't read line {line}: {reason}")]
    Read { line: usize, reason: String },
}
