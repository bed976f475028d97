//! Dispatch loop for bytecode execution
//!
//! Handles individual opcode execution. Every opcode is one of three shapes;
//! the shape decides how many operands are popped and the opcode decides
//! which [`Number`] operation produces the result.

use bytecode_system::{Instruction, Opcode, Shape};
use core_types::{Number, Value};
use tracing::trace;

use crate::context::ExecutionContext;
use crate::error::VmError;
use crate::stack::OperandStack;

/// Dispatch handler for executing bytecode
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Stack for intermediate values
    stack: OperandStack,
}

impl Dispatcher {
    /// Create a dispatcher with an operand stack of the given capacity
    pub fn new(stack_capacity: usize) -> Self {
        Self {
            stack: OperandStack::new(stack_capacity),
        }
    }

    /// The operand stack
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// Mutable access to the operand stack
    pub fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }

    /// Run until the instruction pointer passes the end of the chunk.
    ///
    /// With a budget, fails before executing the first instruction beyond it.
    pub fn execute(
        &mut self,
        ctx: &mut ExecutionContext<'_>,
        budget: Option<u64>,
    ) -> Result<(), VmError> {
        loop {
            if let Some(limit) = budget {
                if ctx.executed >= limit && !ctx.is_finished() {
                    return Err(VmError::BudgetExhausted { limit });
                }
            }
            let ip = ctx.instruction_pointer;
            let Some(inst) = ctx.fetch() else {
                return Ok(());
            };
            trace!(ip, op = inst.opcode.mnemonic(), depth = self.stack.len(), "dispatch");
            self.step(inst)?;
        }
    }

    /// Execute a single instruction
    pub fn step(&mut self, inst: &Instruction) -> Result<(), VmError> {
        let opcode = &inst.opcode;
        match opcode.shape() {
            Shape::PushConstant => {
                if let Opcode::Push(value) = opcode {
                    self.stack.push(value.clone());
                }
            }
            Shape::Unary => {
                let x = immediate(opcode, self.stack.pop())?;
                self.stack.push(Value::from(unary(opcode, x)));
            }
            Shape::Binary => {
                let b = self.stack.pop();
                let a = self.stack.pop();
                let a = immediate(opcode, a)?;
                let b = immediate(opcode, b)?;
                self.stack.push(Value::from(binary(opcode, a, b)));
            }
        }
        Ok(())
    }
}

/// Unwrap an operand, refusing anything but an immediate number.
fn immediate(opcode: &Opcode, value: Value) -> Result<Number, VmError> {
    match value {
        Value::Immediate(n) => Ok(n),
        other => Err(VmError::NonImmediateOperand {
            mnemonic: opcode.mnemonic(),
            namespace: other.namespace(),
        }),
    }
}

fn unary(opcode: &Opcode, x: Number) -> Number {
    match opcode {
        Opcode::Plus => x,
        Opcode::Negate => -x,
        Opcode::BitNot => !x,
        Opcode::Not => x.logical_not(),
        Opcode::Sin => x.sin(),
        Opcode::Cos => x.cos(),
        Opcode::Ln => x.ln(),
        Opcode::Lb => x.lb(),
        Opcode::Lg => x.lg(),
        _ => unreachable!("{} is not unary", opcode.mnemonic()),
    }
}

fn binary(opcode: &Opcode, a: Number, b: Number) -> Number {
    match opcode {
        Opcode::Add => a + b,
        Opcode::Sub => a - b,
        Opcode::Mul => a * b,
        Opcode::Div => a / b,
        Opcode::FloorDiv => a.floor_div(b),
        Opcode::Mod => a % b,
        Opcode::ArithmeticShiftLeft => a.arithmetic_shift_left(b),
        Opcode::ArithmeticShiftRight => a.arithmetic_shift_right(b),
        Opcode::LogicalShiftLeft => a.logical_shift_left(b),
        Opcode::LogicalShiftRight => a.logical_shift_right(b),
        Opcode::BitAnd => a & b,
        Opcode::BitOr => a | b,
        Opcode::BitXor => a ^ b,
        Opcode::And => a.logical_and(b),
        Opcode::Or => a.logical_or(b),
        Opcode::Equal => Number::from_bool(a == b),
        Opcode::NotEqual => Number::from_bool(a != b),
        Opcode::LessThan => Number::from_bool(a < b),
        Opcode::GreaterThan => Number::from_bool(a > b),
        Opcode::LessThanEqual => Number::from_bool(a <= b),
        Opcode::GreaterThanEqual => Number::from_bool(a >= b),
        Opcode::Compare => a.compare(b),
        _ => unreachable!("{} is not binary", opcode.mnemonic()),
    }
}
