//! Runtime errors for the Monty engine.
//!
//! Every error ends the run. Program faults, output failures and refused
//! lines carry their source line; allocation and open failures are reported
//! without a line prefix.

use monty_assembler::SourceError;
use monty_common::{Fault, FaultAt};
use thiserror::Error;

/// Errors that halt execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A usage or precondition fault at a source line.
    #[error(transparent)]
    Fault(#[from] FaultAt),

    /// The stack could not grow. The stack may be inconsistent, so no
    /// teardown is attempted beyond reporting.
    #[error("Error: malloc failed")]
    OutOfMemory,

    /// Writing program output failed while executing `line`.
    #[error("L{line}: can't write output: {reason}")]
    Output { line: usize, reason: String },

    /// The engine already halted on an earlier error and runs nothing more.
    #[error("L{line}: run already halted")]
    Halted { line: usize },

    /// Reading the program failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl RuntimeError {
    /// The program fault, if this error is one.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            RuntimeError::Fault(at) => Some(&at.fault),
            _ => None,
        }
    }

    /// Source line of the failure, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RuntimeError::Fault(at) => Some(at.line),
            RuntimeError::Output { line, .. } | RuntimeError::Halted { line } => Some(*line),
            RuntimeError::Source(SourceError::Read { line, .. }) => Some(*line),
            _ => None,
        }
    }
}
