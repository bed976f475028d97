//! Bytecode system for the tally runtime
//!
//! This crate provides the closed opcode catalog, the instruction
//! representation and the chunk container the VM executes.
//!
//! # Features
//!
//! - Stack-based bytecode with inline immediate operands
//! - Three dispatch shapes: constant push, unary, binary
//! - Static stack-depth analysis
//! - Human-readable disassembly
//!
//! # Example
//!
//! ```
//! use bytecode_system::{BytecodeChunk, Opcode};
//! use core_types::Value;
//!
//! let mut chunk = BytecodeChunk::new();
//! chunk.push_constant(Value::from_int(3));
//! chunk.push_constant(Value::from_int(4));
//! chunk.emit(Opcode::Add);
//!
//! assert_eq!(chunk.instruction_count(), 3);
//! assert_eq!(chunk.max_stack_depth(), Some(2));
//! println!("{}", chunk);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod instruction;
pub mod opcode;

// Re-export main types at crate root
pub use chunk::BytecodeChunk;
pub use instruction::Instruction;
pub use opcode::{Opcode, Shape};
