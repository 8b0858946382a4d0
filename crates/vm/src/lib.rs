//! Monty engine — executes bytecode programs one line at a time.
//!
//! The engine is a stack machine with:
//! - An operand stack of 32-bit integers
//! - A closed opcode table, matched exhaustively at dispatch
//! - Fail-fast faults: the first fault tears the run down
//!
//! # Usage
//!
//! ```
//! use monty_assembler::SourceLines;
//! use monty_vm::run;
//!
//! let source = SourceLines::new("push 1\npush 2\nadd\npall\n".as_bytes());
//! let mut out = Vec::new();
//! run(source, &mut out).unwrap();
//! assert_eq!(out, b"3\n");
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod stack;

pub use error::RuntimeError;
pub use machine::Engine;
pub use stack::Stack;

use std::cell::RefCell;
use std::io::{BufRead, Write};

use monty_assembler::SourceLines;
use tracing::debug;

/// Execute a program read from `source`, writing its output to `out`.
///
/// Each line is executed as soon as it is read. The source is closed as
/// soon as the run ends, whether by reaching end of input or by a fault.
///
/// # Errors
///
/// Returns [`RuntimeError`] for the first fault (unknown instruction,
/// short stack, division by zero, ...), for read and write failures, and
/// for allocation failure.
pub fn run<R: BufRead, W: Write>(source: SourceLines<R>, out: W) -> Result<(), RuntimeError> {
    let source = RefCell::new(source);
    let mut engine = Engine::new(out).on_fatal(|| source.borrow_mut().close());

    loop {
        let next = source.borrow_mut().next_line();
        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(engine.halt(e.into())),
        };
        engine.execute_line(&line.text, line.number)?;
    }

    debug!(lines = source.borrow().line_number(), "end of program");
    engine.finish()
}
