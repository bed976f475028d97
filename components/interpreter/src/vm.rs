//! Virtual Machine for bytecode execution
//!
//! Main entry point for executing tally bytecode.

use bytecode_system::BytecodeChunk;
use core_types::Value;
use tracing::debug;

use crate::config::VmConfig;
use crate::context::ExecutionContext;
use crate::dispatch::Dispatcher;
use crate::error::VmError;

/// Virtual Machine for executing tally bytecode
///
/// The VM owns its operand stack, which persists across `execute` calls so
/// an embedding loop can inspect the result of each run. Separate VM values
/// share nothing and may run on different threads.
#[derive(Debug, Clone)]
pub struct VM {
    /// Dispatcher for bytecode execution
    dispatcher: Dispatcher,
    config: VmConfig,
}

impl VM {
    /// Create a new VM instance with default limits
    pub fn new() -> Self {
        Self::with_config(VmConfig::default())
    }

    /// Create a VM with the given limits
    pub fn with_config(config: VmConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.stack_capacity),
            config,
        }
    }

    /// Execute a bytecode chunk to completion
    ///
    /// The result is left on the operand stack; read it with [`VM::top`] or
    /// [`VM::pop_result`]. On error the stack holds whatever was there when
    /// execution stopped.
    ///
    /// # Panics
    ///
    /// Panics if the chunk pushes beyond the stack capacity or pops from an
    /// empty stack.
    ///
    /// # Example
    ///
    /// ```
    /// use interpreter::VM;
    /// use bytecode_system::{BytecodeChunk, Opcode};
    /// use core_types::Value;
    ///
    /// let mut vm = VM::new();
    /// let mut chunk = BytecodeChunk::new();
    ///
    /// chunk.push_constant(Value::from_int(3));
    /// chunk.push_constant(Value::from_int(4));
    /// chunk.emit(Opcode::Add);
    ///
    /// vm.execute(&chunk).unwrap();
    /// assert_eq!(vm.depth(), 1);
    /// assert_eq!(vm.top(), Some(&Value::from_int(7)));
    /// ```
    pub fn execute(&mut self, chunk: &BytecodeChunk) -> Result<(), VmError> {
        debug!(instructions = chunk.instruction_count(), "execute");
        let mut ctx = ExecutionContext::new(chunk);
        let result = self
            .dispatcher
            .execute(&mut ctx, self.config.instruction_budget);
        debug!(executed = ctx.executed, depth = self.depth(), ok = result.is_ok(), "execution finished");
        result
    }

    /// Number of values on the operand stack
    pub fn depth(&self) -> usize {
        self.dispatcher.stack().len()
    }

    /// Value on top of the operand stack
    pub fn top(&self) -> Option<&Value> {
        self.dispatcher.stack().peek()
    }

    /// Remove and return the value on top of the operand stack
    pub fn pop_result(&mut self) -> Option<Value> {
        self.dispatcher.stack_mut().try_pop()
    }

    /// Operand stack contents, bottom first
    pub fn stack(&self) -> &[Value] {
        self.dispatcher.stack().as_slice()
    }

    /// Empty the operand stack
    pub fn clear(&mut self) {
        self.dispatcher.stack_mut().clear();
    }

    /// The limits this VM was built with
    pub fn config(&self) -> &VmConfig {
        &self.config
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
