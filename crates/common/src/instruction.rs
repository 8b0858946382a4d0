//! A parsed source line.
//!
//! Instructions are transient: the reader produces one per non-blank,
//! non-comment line and the engine executes it immediately.

use std::fmt;

use crate::opcode::Opcode;

/// One Monty instruction together with the source line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Integer argument. Only `push` carries one.
    pub operand: Option<i32>,
    /// 1-based source line number, used in every diagnostic.
    pub line: usize,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, operand: Option<i32>, line: usize) -> Self {
        Self {
            opcode,
            operand,
            line,
        }
    }

    /// Shorthand for a `push` of `value`.
    pub fn push(value: i32, line: usize) -> Self {
        Self::new(Opcode::Push, Some(value), line)
    }
}

/// Canonical source form: `push 5`, `pall`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(value) => write!(f, "{} {value}", self.opcode),
            None => f.write_str(self.opcode.mnemonic()),
        }
    }
}
