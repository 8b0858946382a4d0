//! Engine state: the stack, the output sink and the fault hook.

use std::fmt;
use std::io::Write;

use tracing::{debug, error, warn};

use crate::error::RuntimeError;
use crate::stack::Stack;

/// The Monty execution engine.
///
/// The engine owns the stack for the whole run. It does not own the program
/// source; a caller holding resources that must be released when the run
/// halts registers them through [`Engine::on_fatal`].
pub struct Engine<'a, W> {
    /// Operand stack.
    pub(crate) stack: Stack,
    /// Destination of `pall`, `pint`, `pchar` and `pstr`.
    pub(crate) out: W,
    /// Runs once, on the first fault.
    on_fatal: Option<Box<dyn FnOnce() + 'a>>,
    /// Line of the instruction being executed, or of the last one run.
    pub(crate) line: usize,
    /// Set by the first error; nothing executes afterwards.
    halted: bool,
}

impl<'a, W: Write> Engine<'a, W> {
    /// Create an engine with an empty stack writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            stack: Stack::new(),
            out,
            on_fatal: None,
            line: 0,
            halted: false,
        }
    }

    /// Register cleanup to run when the engine halts on a fault.
    ///
    /// The hook runs after the stack has been released and output flushed.
    /// It is not run on allocation failure.
    pub fn on_fatal(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_fatal = Some(Box::new(hook));
        self
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Whether an error has ended the run.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// End a successful run: release the stack and flush output.
    pub fn finish(mut self) -> Result<(), RuntimeError> {
        debug!(remaining = self.stack.len(), "run finished");
        self.stack.clear();
        let line = self.line;
        self.out.flush().map_err(|e| output_error(line, e))
    }

    /// Tear the run down after `err` and hand the error back.
    pub(crate) fn halt(&mut self, err: RuntimeError) -> RuntimeError {
        self.halted = true;
        if matches!(err, RuntimeError::OutOfMemory) {
            error!("stack allocation failed");
            return err;
        }

        warn!(%err, "halting run");
        // The diagnostic still has to go out if stdout is broken.
        let _ = self.out.flush();
        self.stack.clear();
        if let Some(hook) = self.on_fatal.take() {
            hook();
        }
        err
    }

    /// Write one line of program output.
    pub(crate) fn emit(&mut self, args: fmt::Arguments<'_>) -> Result<(), RuntimeError> {
        let line = self.line;
        writeln!(self.out, "{args}").map_err(|e| output_error(line, e))
    }

    /// Write raw bytes followed by a newline.
    pub(crate) fn emit_bytes(&mut self, bytes: &[u8]) -> Result<(), RuntimeError> {
        let line = self.line;
        self.out
            .write_all(bytes)
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(|e| output_error(line, e))
    }
}

fn output_error(line: usize, e: std::io::Error) -> RuntimeError {
    RuntimeError::Output {
        line,
        reason: e.to_string(),
    }
}
