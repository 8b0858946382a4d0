//! Monty source handling — reading program files and parsing their lines.
//!
//! The reader and the parser are separate so the engine can execute each
//! line as soon as it is read: a fault halts the run before later lines are
//! even looked at.
//!
//! # Usage
//!
//! ```
//! use monty_assembler::{parse_line, SourceLines};
//! use monty_common::{Instruction, Opcode};
//!
//! let mut source = SourceLines::new("push 42\n# comment\npall\n".as_bytes());
//! let mut program = Vec::new();
//! while let Some(line) = source.next_line().unwrap() {
//!     if let Some(instr) = parse_line(&line.text, line.number).unwrap() {
//!         program.push(instr);
//!     }
//! }
//! assert_eq!(program[0], Instruction::push(42, 1));
//! assert_eq!(program[1].opcode, Opcode::Pall);
//! assert_eq!(program[1].line, 3);
//! ```

pub mod error;

mod lexer;
mod parser;
mod source;

pub use error::SourceError;
pub use parser::parse_line;
pub use source::{SourceLine, SourceLines};

use monty_common::{FaultAt, Instruction};

/// Parse a whole program text.
///
/// Returns the first usage fault encountered, like the engine would.
pub fn assemble(text: &str) -> Result<Vec<Instruction>, FaultAt> {
    let mut instructions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(instr) = parse_line(line.trim(), idx + 1)? {
            instructions.push(instr);
        }
    }

    Ok(instructions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monty_common::{Fault, Opcode};

    #[test]
    fn assemble_minimal() {
        let program = assemble("push 42\npall\n").unwrap();
        assert_eq!(
            program,
            vec![
                Instruction::push(42, 1),
                Instruction::new(Opcode::Pall, None, 2)
            ]
        );
    }

    #[test]
    fn assemble_empty() {
        assert_eq!(assemble("").unwrap(), vec![]);
    }

    #[test]
    fn assemble_with_comments_and_blanks() {
        let text = "\
# header comment

push 1
   # indented comment
add
";
        let program = assemble(text).unwrap();
        assert_eq!(program.len(), 2);
        assert_eq!(program[1].line, 5);
    }

    #[test]
    fn error_reports_correct_line() {
        let err = assemble("push 1\nnop\nfoo\n").unwrap_err();
        assert_eq!(err, Fault::UnknownInstruction("foo".to_string()).at(3));
    }

    #[test]
    fn first_fault_wins() {
        let err = assemble("push\nxyz\n").unwrap_err();
        assert_eq!(err, Fault::PushUsage.at(1));
    }
}
