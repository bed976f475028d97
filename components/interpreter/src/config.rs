//! VM configuration
//!
//! Configuration states limits only; the VM enforces them.

/// Default operand stack capacity
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// VM configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// Maximum operand stack depth
    pub stack_capacity: usize,

    /// Maximum instructions per `execute` call, if any
    pub instruction_budget: Option<u64>,
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            instruction_budget: None,
        }
    }
}

impl VmConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operand stack capacity
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    /// Set the instruction budget
    pub fn with_instruction_budget(mut self, budget: u64) -> Self {
        self.instruction_budget = Some(budget);
        self
    }
}
