//! Fixed-capacity operand stack
//!
//! Overflow and underflow are contract violations by the code that produced
//! the bytecode, so both panic instead of returning an error.

use core_types::Value;

/// Operand stack with a capacity fixed at construction
#[derive(Debug, Clone)]
pub struct OperandStack {
    values: Vec<Value>,
    capacity: usize,
}

impl OperandStack {
    /// Create an empty stack holding at most `capacity` values
    pub fn new(capacity: usize) -> Self {
        OperandStack {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push value onto stack
    ///
    /// # Panics
    ///
    /// Panics with "stack overflow" if the stack is full.
    pub fn push(&mut self, value: Value) {
        if self.values.len() >= self.capacity {
            panic!("stack overflow: capacity of {} values exceeded", self.capacity);
        }
        self.values.push(value);
    }

    /// Pop value from stack
    ///
    /// # Panics
    ///
    /// Panics with "stack underflow" if the stack is empty.
    pub fn pop(&mut self) -> Value {
        match self.values.pop() {
            Some(value) => value,
            None => panic!("stack underflow: pop from empty operand stack"),
        }
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Remove the top value if there is one
    pub fn try_pop(&mut self) -> Option<Value> {
        self.values.pop()
    }

    /// Current depth
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum depth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Values bottom first
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Clear stack
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
