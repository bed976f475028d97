//! Bytecode interpreter for the tally runtime
//!
//! This crate provides a stack virtual machine with:
//! - A fixed-capacity operand stack that fails fast on misuse
//! - Linear dispatch over the closed opcode catalog
//! - An optional instruction budget for hosts that need one
//!
//! # Example
//!
//! ```
//! use interpreter::{VmConfig, VM};
//! use bytecode_system::{BytecodeChunk, Opcode};
//! use core_types::{Number, Value};
//!
//! let mut vm = VM::with_config(VmConfig::new().with_stack_capacity(16));
//! let chunk = BytecodeChunk::from(vec![
//!     Opcode::Push(Value::from_int(10)),
//!     Opcode::Push(Value::from_int(0)),
//!     Opcode::Div,
//! ]);
//!
//! vm.execute(&chunk).unwrap();
//! assert_eq!(vm.pop_result(), Some(Value::from(Number::MAX)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod stack;
pub mod vm;

// Re-export main types at crate root
pub use config::{VmConfig, DEFAULT_STACK_CAPACITY};
pub use context::ExecutionContext;
pub use dispatch::Dispatcher;
pub use error::VmError;
pub use stack::OperandStack;
pub use vm::VM;
