//! Execution context for VM

use bytecode_system::{BytecodeChunk, Instruction};

/// Execution state for one run over a bytecode chunk
///
/// Holds the instruction pointer and the count of instructions executed so
/// far. Execution is linear: the pointer only ever advances by one.
#[derive(Debug, Clone)]
pub struct ExecutionContext<'a> {
    /// Current instruction pointer
    pub instruction_pointer: usize,
    /// Instructions fetched so far
    pub executed: u64,
    bytecode: &'a BytecodeChunk,
}

impl<'a> ExecutionContext<'a> {
    /// Create a new execution context for a bytecode chunk
    pub fn new(bytecode: &'a BytecodeChunk) -> Self {
        Self {
            instruction_pointer: 0,
            executed: 0,
            bytecode,
        }
    }

    /// Advance instruction pointer and return current instruction
    pub fn fetch(&mut self) -> Option<&'a Instruction> {
        let inst = self.bytecode.instructions().get(self.instruction_pointer)?;
        self.instruction_pointer += 1;
        self.executed += 1;
        Some(inst)
    }

    /// Whether the pointer has moved past the last instruction
    pub fn is_finished(&self) -> bool {
        self.instruction_pointer >= self.bytecode.instruction_count()
    }
}
