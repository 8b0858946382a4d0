//! Parser for Monty source lines → instructions.

use crate::lexer::tokenize_line;
use monty_common::{Fault, FaultAt, Instruction, Opcode};

/// Parse one trimmed source line into an instruction.
///
/// Returns `Ok(None)` for blank and comment lines. Usage faults (unknown
/// opcode, malformed `push`) are reported at `line_num`.
pub fn parse_line(line: &str, line_num: usize) -> Result<Option<Instruction>, FaultAt> {
    let tokens = match tokenize_line(line) {
        Some(tokens) => tokens,
        None => return Ok(None),
    };

    let opcode = Opcode::from_mnemonic(tokens.opcode)
        .ok_or_else(|| Fault::UnknownInstruction(tokens.opcode.to_string()).at(line_num))?;

    if !opcode.takes_argument() {
        return Ok(Some(Instruction::new(opcode, None, line_num)));
    }

    // `push` is the only opcode with an argument.
    let value = tokens
        .argument
        .and_then(parse_integer)
        .ok_or_else(|| Fault::PushUsage.at(line_num))?;
    Ok(Some(Instruction::push(value, line_num)))
}

/// Decimal integer with an optional sign. Must fit in 32 bits.
fn parse_integer(token: &str) -> Option<i32> {
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(line: &str) -> Option<Instruction> {
        parse_line(line, 1).unwrap()
    }

    fn parse_fault(line: &str, line_num: usize) -> FaultAt {
        parse_line(line, line_num).unwrap_err()
    }

    #[test]
    fn parse_blank_and_comment() {
        assert_eq!(parse_ok(""), None);
        assert_eq!(parse_ok("# nothing here"), None);
    }

    #[test]
    fn parse_push() {
        assert_eq!(parse_ok("push 5"), Some(Instruction::push(5, 1)));
    }

    #[test]
    fn parse_push_signed() {
        assert_eq!(parse_ok("push -5"), Some(Instruction::push(-5, 1)));
        assert_eq!(parse_ok("push +5"), Some(Instruction::push(5, 1)));
    }

    #[test]
    fn parse_push_limits() {
        assert_eq!(
            parse_ok("push 2147483647"),
            Some(Instruction::push(i32::MAX, 1))
        );
        assert_eq!(
            parse_ok("push -2147483648"),
            Some(Instruction::push(i32::MIN, 1))
        );
    }

    #[test]
    fn parse_push_missing_argument() {
        assert_eq!(parse_fault("push", 7), Fault::PushUsage.at(7));
    }

    #[test]
    fn parse_push_not_an_integer() {
        for line in ["push abc", "push 1.5", "push 12abc", "push -", "push 0x10"] {
            assert_eq!(parse_fault(line, 2), Fault::PushUsage.at(2), "{line}");
        }
    }

    #[test]
    fn parse_push_overflow() {
        assert_eq!(parse_fault("push 2147483648", 3), Fault::PushUsage.at(3));
    }

    #[test]
    fn parse_argument_ignored_for_other_opcodes() {
        assert_eq!(
            parse_ok("pall 3"),
            Some(Instruction::new(Opcode::Pall, None, 1))
        );
    }

    #[test]
    fn parse_unknown_instruction() {
        assert_eq!(
            parse_fault("xyz", 1),
            Fault::UnknownInstruction("xyz".to_string()).at(1)
        );
    }

    #[test]
    fn parse_unknown_is_checked_before_argument() {
        assert_eq!(
            parse_fault("Push 1", 4),
            Fault::UnknownInstruction("Push".to_string()).at(4)
        );
    }

    #[test]
    fn parse_every_opcode_without_argument() {
        for op in monty_common::opcode::ALL_OPCODES {
            if op.takes_argument() {
                continue;
            }
            assert_eq!(
                parse_ok(op.mnemonic()),
                Some(Instruction::new(op, None, 1))
            );
        }
    }
}
