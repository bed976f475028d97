//! Bytecode chunk - compiled bytecode container
//!
//! A chunk is the immutable, ordered instruction sequence handed to the VM.
//! Constants travel inline in `PUSH` instructions, so there is no separate
//! constant pool.

use std::fmt;

use core_types::{SourcePosition, Value};

use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// A compiled bytecode chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytecodeChunk {
    instructions: Vec<Instruction>,
}

impl BytecodeChunk {
    /// Create a new empty bytecode chunk
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an instruction without source position
    pub fn emit(&mut self, opcode: Opcode) {
        self.instructions.push(Instruction::new(opcode));
    }

    /// Emit an instruction with source position
    pub fn emit_with_position(&mut self, opcode: Opcode, position: SourcePosition) {
        self.instructions
            .push(Instruction::with_position(opcode, position));
    }

    /// Emit a `PUSH` of the given value
    pub fn push_constant(&mut self, value: impl Into<Value>) {
        self.emit(Opcode::Push(value.into()));
    }

    /// The instruction sequence
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of instructions
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the chunk holds no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Deepest operand stack reached when running this chunk from an empty
    /// stack, or `None` if some instruction would pop more than is there.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytecode_system::{BytecodeChunk, Opcode};
    /// use core_types::Value;
    ///
    /// let mut chunk = BytecodeChunk::new();
    /// chunk.push_constant(Value::from_int(3));
    /// chunk.push_constant(Value::from_int(4));
    /// chunk.emit(Opcode::Add);
    /// assert_eq!(chunk.max_stack_depth(), Some(2));
    ///
    /// chunk.emit(Opcode::Sub);
    /// assert_eq!(chunk.max_stack_depth(), None);
    /// ```
    pub fn max_stack_depth(&self) -> Option<usize> {
        let mut depth = 0usize;
        let mut max = 0usize;
        for inst in &self.instructions {
            depth = depth.checked_sub(inst.opcode.operand_count())?;
            depth += 1;
            max = max.max(depth);
        }
        Some(max)
    }
}

impl From<Vec<Opcode>> for BytecodeChunk {
    fn from(opcodes: Vec<Opcode>) -> Self {
        opcodes.into_iter().collect()
    }
}

impl FromIterator<Opcode> for BytecodeChunk {
    fn from_iter<I: IntoIterator<Item = Opcode>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().map(Instruction::new).collect(),
        }
    }
}

impl fmt::Display for BytecodeChunk {
    /// Disassembly listing, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (offset, inst) in self.instructions.iter().enumerate() {
            write!(f, "{:04}  {}", offset, inst)?;
            if let Some(pos) = inst.source_position {
                write!(f, "  ; {}", pos)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
