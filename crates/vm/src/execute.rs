//! Line execution and opcode dispatch for the Monty engine.

use std::io::Write;

use monty_assembler::parse_line;
use monty_common::{Fault, Instruction, Opcode};
use tracing::trace;

use crate::error::RuntimeError;
use crate::machine::Engine;

/// Largest value `pchar` and `pstr` treat as a character.
const MAX_ASCII: i32 = 127;

impl<'a, W: Write> Engine<'a, W> {
    /// Parse and execute one trimmed source line.
    ///
    /// Blank and comment lines do nothing. On any fault the stack is
    /// released, the fault hook runs, and the error is returned. Once halted,
    /// every later line is refused with [`RuntimeError::Halted`].
    pub fn execute_line(&mut self, line: &str, line_number: usize) -> Result<(), RuntimeError> {
        if self.is_halted() {
            return Err(RuntimeError::Halted { line: line_number });
        }
        match parse_line(line, line_number) {
            Ok(Some(instr)) => self.execute(&instr),
            Ok(None) => Ok(()),
            Err(fault) => Err(self.halt(fault.into())),
        }
    }

    /// Execute an already parsed instruction, with the same halting rules
    /// as [`Engine::execute_line`].
    pub fn execute(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        if self.is_halted() {
            return Err(RuntimeError::Halted { line: instr.line });
        }
        trace!(line = instr.line, %instr, "execute");
        self.line = instr.line;
        self.dispatch(instr).map_err(|err| self.halt(err))
    }

    fn dispatch(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let line = instr.line;
        match instr.opcode {
            Opcode::Push => self.exec_push(instr),
            Opcode::Pop => self.exec_pop(line),
            Opcode::Swap => self.exec_swap(line),

            Opcode::Add => self.exec_binary_arith(Opcode::Add, line, |a, b| Ok(a.wrapping_add(b))),
            Opcode::Sub => self.exec_binary_arith(Opcode::Sub, line, |a, b| Ok(a.wrapping_sub(b))),
            Opcode::Mul => self.exec_binary_arith(Opcode::Mul, line, |a, b| Ok(a.wrapping_mul(b))),
            Opcode::Div => self.exec_binary_arith(Opcode::Div, line, |a, b| {
                nonzero(b).map(|b| a.wrapping_div(b))
            }),
            Opcode::Mod => self.exec_binary_arith(Opcode::Mod, line, |a, b| {
                nonzero(b).map(|b| a.wrapping_rem(b))
            }),

            Opcode::Pall => self.exec_pall(),
            Opcode::Pint => self.exec_pint(line),
            Opcode::Pchar => self.exec_pchar(line),
            Opcode::Pstr => self.exec_pstr(),

            Opcode::Nop => Ok(()),
        }
    }

    // ---- Stack manipulation ----

    fn exec_push(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let value = instr
            .operand
            .ok_or_else(|| Fault::PushUsage.at(instr.line))?;
        self.stack.push(value)
    }

    fn exec_pop(&mut self, line: usize) -> Result<(), RuntimeError> {
        self.stack.pop().ok_or_else(|| Fault::PopEmpty.at(line))?;
        Ok(())
    }

    fn exec_swap(&mut self, line: usize) -> Result<(), RuntimeError> {
        if !self.stack.swap_top() {
            return Err(Fault::StackTooShort(Opcode::Swap).at(line).into());
        }
        Ok(())
    }

    // ---- Arithmetic ----

    /// Replace the top two values with `op(second, top)`.
    ///
    /// Both preconditions are checked before the stack is touched, so a
    /// fault leaves it as it was.
    fn exec_binary_arith(
        &mut self,
        opcode: Opcode,
        line: usize,
        op: fn(i32, i32) -> Result<i32, Fault>,
    ) -> Result<(), RuntimeError> {
        let (top, second) = match (self.stack.peek_top(), self.stack.peek_second()) {
            (Some(top), Some(second)) => (top, second),
            _ => return Err(Fault::StackTooShort(opcode).at(line).into()),
        };
        let result = op(second, top).map_err(|fault| fault.at(line))?;

        self.stack.pop();
        if let Some(slot) = self.stack.top_mut() {
            *slot = result;
        }
        Ok(())
    }

    // ---- Output ----

    fn exec_pall(&mut self) -> Result<(), RuntimeError> {
        // Collected first: `emit` needs the engine mutably.
        let values: Vec<i32> = self.stack.iter().collect();
        for value in values {
            self.emit(format_args!("{value}"))?;
        }
        Ok(())
    }

    fn exec_pint(&mut self, line: usize) -> Result<(), RuntimeError> {
        let top = self.stack.peek_top().ok_or_else(|| Fault::PintEmpty.at(line))?;
        self.emit(format_args!("{top}"))
    }

    fn exec_pchar(&mut self, line: usize) -> Result<(), RuntimeError> {
        let top = self
            .stack
            .peek_top()
            .ok_or_else(|| Fault::PcharEmpty.at(line))?;
        let byte = ascii_byte(top).ok_or_else(|| Fault::PcharOutOfRange.at(line))?;
        self.emit(format_args!("{}", char::from(byte)))
    }

    fn exec_pstr(&mut self) -> Result<(), RuntimeError> {
        let text: Vec<u8> = self
            .stack
            .iter()
            .map_while(ascii_byte)
            .take_while(|&b| b != 0)
            .collect();
        self.emit_bytes(&text)
    }
}

fn nonzero(divisor: i32) -> Result<i32, Fault> {
    if divisor == 0 {
        Err(Fault::DivisionByZero)
    } else {
        Ok(divisor)
    }
}

fn ascii_byte(value: i32) -> Option<u8> {
    if (0..=MAX_ASCII).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}
