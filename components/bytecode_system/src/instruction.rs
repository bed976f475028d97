//! Bytecode instruction representation
//!
//! An instruction is an opcode plus the source line it was compiled from.

use std::fmt;

use core_types::{SourcePosition, Value};

use crate::opcode::Opcode;

/// A single bytecode instruction with optional source mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The opcode for this instruction
    pub opcode: Opcode,
    /// Optional source position for debugging
    pub source_position: Option<SourcePosition>,
}

impl Instruction {
    /// Create a new instruction without source position
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            source_position: None,
        }
    }

    /// Create a new instruction with source position
    pub fn with_position(opcode: Opcode, position: SourcePosition) -> Self {
        Self {
            opcode,
            source_position: Some(position),
        }
    }

    /// The immediate operand, present only on `PUSH`.
    pub fn operand(&self) -> Option<&Value> {
        match &self.opcode {
            Opcode::Push(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(value) => write!(f, "{} {}", self.opcode.mnemonic(), value),
            None => f.write_str(self.opcode.mnemonic()),
        }
    }
}
