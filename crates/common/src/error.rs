//! Faults: the conditions that halt a Monty run.
//!
//! The `Display` text of every [`Fault`] is the exact message written to the
//! error stream; [`FaultAt`] adds the `L<n>: ` prefix.

use thiserror::Error;

use crate::opcode::Opcode;

/// A violated precondition or usage error, without position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// `push` without an argument, or with one that is not an integer.
    #[error("usage: push integer")]
    PushUsage,

    /// Opcode token matched nothing in the table.
    #[error("unknown instruction {0}")]
    UnknownInstruction(String),

    /// `pint` on an empty stack.
    #[error("can't pint, stack empty")]
    PintEmpty,

    /// `pop` on an empty stack.
    #[error("can't pop an empty stack")]
    PopEmpty,

    /// A two-operand opcode found fewer than two elements.
    #[error("can't {0}, stack too short")]
    StackTooShort(Opcode),

    /// `div` or `mod` with a zero top element.
    #[error("division by zero")]
    DivisionByZero,

    /// `pchar` on an empty stack.
    #[error("can't pchar, stack empty")]
    PcharEmpty,

    /// `pchar` with a top element outside 0..=127.
    #[error("can't pchar, value out of range")]
    PcharOutOfRange,
}

impl Fault {
    /// Attach the source line the fault occurred on.
    pub fn at(self, line: usize) -> FaultAt {
        FaultAt { line, fault: self }
    }
}

/// A fault tagged with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("L{line}: {fault}")]
pub struct FaultAt {
    pub line: usize,
    pub fault: Fault,
}
