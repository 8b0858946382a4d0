//! Monty common types.
//!
//! This crate provides the data shared by the reader and the engine:
//!
//! - [`Opcode`] — the closed table of 13 opcodes
//! - [`Instruction`] — a parsed source line with its line number
//! - [`Fault`] / [`FaultAt`] — halting conditions and their diagnostics
//!
//! Fault messages live on the error types themselves (`thiserror`), so every
//! layer reports the same text.

pub mod error;
pub mod instruction;
pub mod opcode;

// Re-export commonly used types at the crate root.
pub use error::{Fault, FaultAt};
pub use instruction::Instruction;
pub use opcode::Opcode;
