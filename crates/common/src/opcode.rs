//! Opcode definitions for the Monty instruction set.
//!
//! The opcode table is closed: every mnemonic the interpreter understands is
//! a variant here, and dispatch matches on it exhaustively.

use std::fmt;

/// Identifies the operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Stack manipulation
    /// Push the integer argument onto the stack.
    Push,
    /// Remove the top element.
    Pop,
    /// Exchange the top two elements.
    Swap,

    // Arithmetic
    /// second + top, replacing both.
    Add,
    /// second - top, replacing both.
    Sub,
    /// second * top, replacing both.
    Mul,
    /// second / top (truncating), replacing both. Top must be non-zero.
    Div,
    /// second % top, replacing both. Top must be non-zero.
    Mod,

    // Output
    /// Print every element, top to bottom, one per line.
    Pall,
    /// Print the top element.
    Pint,
    /// Print the top element as an ASCII character.
    Pchar,
    /// Print the stack as a string, top down, until 0 or a non-ASCII value.
    Pstr,

    /// No operation.
    Nop,
}

/// All opcodes, in table order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 13] = [
    Opcode::Push,
    Opcode::Pall,
    Opcode::Pint,
    Opcode::Pop,
    Opcode::Swap,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Pchar,
    Opcode::Pstr,
    Opcode::Nop,
];

impl Opcode {
    /// Returns the source mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Push => "push",
            Opcode::Pop => "pop",
            Opcode::Swap => "swap",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Mod => "mod",
            Opcode::Pall => "pall",
            Opcode::Pint => "pint",
            Opcode::Pchar => "pchar",
            Opcode::Pstr => "pstr",
            Opcode::Nop => "nop",
        }
    }

    /// Look up an opcode by exact, case-sensitive mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Whether the opcode reads an argument token from its source line.
    pub fn takes_argument(&self) -> bool {
        matches!(self, Opcode::Push)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_opcodes_count() {
        assert_eq!(ALL_OPCODES.len(), 13);
    }

    #[test]
    fn lookup_every_mnemonic() {
        for &opcode in &ALL_OPCODES {
            assert_eq!(Opcode::from_mnemonic(opcode.mnemonic()), Some(opcode));
        }
    }

    #[test]
    fn mnemonics_are_unique() {
        for (i, a) in ALL_OPCODES.iter().enumerate() {
            for b in &ALL_OPCODES[i + 1..] {
                assert_ne!(a.mnemonic(), b.mnemonic());
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Opcode::from_mnemonic("PUSH"), None);
        assert_eq!(Opcode::from_mnemonic("Pall"), None);
    }

    #[test]
    fn lookup_rejects_prefixes() {
        assert_eq!(Opcode::from_mnemonic("pus"), None);
        assert_eq!(Opcode::from_mnemonic("pushx"), None);
        assert_eq!(Opcode::from_mnemonic(""), None);
    }

    #[test]
    fn only_push_takes_argument() {
        let with_arg: Vec<_> = ALL_OPCODES
            .iter()
            .filter(|op| op.takes_argument())
            .collect();
        assert_eq!(with_arg, vec![&Opcode::Push]);
    }

    #[test]
    fn display_is_mnemonic() {
        assert_eq!(Opcode::Pchar.to_string(), "pchar");
    }
}
