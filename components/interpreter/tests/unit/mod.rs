//! Unit tests for interpreter components

use bytecode_system::{BytecodeChunk, Opcode};
use core_types::{Number, Value};
use interpreter::{ExecutionContext, OperandStack, VmConfig, VmError, VM};

fn push(n: i32) -> Opcode {
    Opcode::Push(Value::from_int(n))
}

fn push_num(s: &str) -> Opcode {
    Opcode::Push(Value::from(s.parse::<Number>().unwrap()))
}

fn eval(opcodes: Vec<Opcode>) -> Value {
    let mut vm = VM::new();
    vm.execute(&BytecodeChunk::from(opcodes)).unwrap();
    assert_eq!(vm.depth(), 1);
    vm.pop_result().unwrap()
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_add_leaves_single_result() {
    assert_eq!(eval(vec![push(3), push(4), Opcode::Add]), Value::from_int(7));
}

#[test]
fn test_divide_by_zero_saturates() {
    assert_eq!(
        eval(vec![push(10), push(0), Opcode::Div]),
        Value::from(Number::MAX)
    );
    assert_eq!(
        eval(vec![push(-10), push(0), Opcode::Div]),
        Value::from(Number::MIN)
    );
    assert_eq!(eval(vec![push(0), push(0), Opcode::Div]), Value::from_int(0));
}

#[test]
fn test_floor_div_and_mod() {
    assert_eq!(eval(vec![push(-3), push(2), Opcode::FloorDiv]), Value::from_int(-2));
    assert_eq!(eval(vec![push(-7), push(3), Opcode::Mod]), Value::from_int(-1));
}

#[test]
fn test_fractional_arithmetic() {
    assert_eq!(
        eval(vec![push_num("2.5"), push(4), Opcode::Mul]),
        Value::from_int(10)
    );
    assert_eq!(
        eval(vec![push(1), push(4), Opcode::Div]),
        Value::from("0.25".parse::<Number>().unwrap())
    );
}

#[test]
fn test_unary_opcodes() {
    assert_eq!(eval(vec![push(5), Opcode::Plus]), Value::from_int(5));
    assert_eq!(eval(vec![push(5), Opcode::Negate]), Value::from_int(-5));
    assert_eq!(eval(vec![push(0), Opcode::Not]), Value::from_int(1));
    assert_eq!(eval(vec![push(0), Opcode::Sin]), Value::from_int(0));
    assert_eq!(eval(vec![push(8), Opcode::Lb]), Value::from_int(3));
    assert_eq!(eval(vec![push(1), Opcode::Ln]), Value::from_int(0));
    assert_eq!(
        eval(vec![push(0), Opcode::BitNot]),
        Value::from(Number::from_raw(-1))
    );
}

#[test]
fn test_shift_opcodes() {
    assert_eq!(
        eval(vec![push(1), push(3), Opcode::LogicalShiftLeft]),
        Value::from_int(8)
    );
    assert_eq!(
        eval(vec![push(-16), push(2), Opcode::ArithmeticShiftRight]),
        Value::from_int(-4)
    );
    assert_eq!(
        eval(vec![push(3), push(2), Opcode::ArithmeticShiftLeft]),
        Value::from_int(12)
    );
    assert_eq!(
        eval(vec![push(16), push(4), Opcode::LogicalShiftRight]),
        Value::from_int(1)
    );
}

#[test]
fn test_bitwise_and_logical_opcodes() {
    assert_eq!(eval(vec![push(6), push(3), Opcode::BitAnd]), Value::from_int(2));
    assert_eq!(eval(vec![push(6), push(3), Opcode::BitOr]), Value::from_int(7));
    assert_eq!(eval(vec![push(6), push(3), Opcode::BitXor]), Value::from_int(5));
    assert_eq!(eval(vec![push(6), push(0), Opcode::And]), Value::from_int(0));
    assert_eq!(eval(vec![push(6), push(0), Opcode::Or]), Value::from_int(1));
}

#[test]
fn test_relational_opcodes() {
    let cases = [
        (Opcode::Equal, 0),
        (Opcode::NotEqual, 1),
        (Opcode::LessThan, 1),
        (Opcode::GreaterThan, 0),
        (Opcode::LessThanEqual, 1),
        (Opcode::GreaterThanEqual, 0),
        (Opcode::Compare, -1),
    ];
    for (opcode, expected) in cases {
        assert_eq!(
            eval(vec![push(2), push(5), opcode.clone()]),
            Value::from_int(expected),
            "{:?}",
            opcode
        );
    }
    assert_eq!(eval(vec![push(5), push(5), Opcode::Compare]), Value::from_int(0));
    assert_eq!(eval(vec![push(9), push(5), Opcode::Compare]), Value::from_int(1));
}

#[test]
fn test_empty_chunk_is_a_no_op() {
    let mut vm = VM::new();
    vm.execute(&BytecodeChunk::new()).unwrap();
    assert_eq!(vm.depth(), 0);
    assert_eq!(vm.pop_result(), None);
}

#[test]
fn test_instruction_budget() {
    let mut vm = VM::with_config(VmConfig::new().with_instruction_budget(1));
    let chunk = BytecodeChunk::from(vec![push(1), push(2)]);
    assert_eq!(
        vm.execute(&chunk),
        Err(VmError::BudgetExhausted { limit: 1 })
    );
    assert_eq!(vm.stack(), &[Value::from_int(1)]);
}

// ============================================================================
// Stack discipline
// ============================================================================

#[test]
#[should_panic(expected = "stack underflow")]
fn test_binary_on_single_value_underflows() {
    let mut vm = VM::new();
    let _ = vm.execute(&BytecodeChunk::from(vec![push(1), Opcode::Add]));
}

#[test]
#[should_panic(expected = "stack underflow")]
fn test_unary_on_empty_stack_underflows() {
    let mut vm = VM::new();
    let _ = vm.execute(&BytecodeChunk::from(vec![Opcode::Cos]));
}

#[test]
#[should_panic(expected = "stack overflow")]
fn test_push_beyond_capacity_overflows() {
    let mut vm = VM::with_config(VmConfig::new().with_stack_capacity(2));
    let _ = vm.execute(&BytecodeChunk::from(vec![push(1), push(2), push(3)]));
}

#[test]
fn test_exact_capacity_is_allowed() {
    let mut vm = VM::with_config(VmConfig::new().with_stack_capacity(2));
    vm.execute(&BytecodeChunk::from(vec![push(1), push(2), Opcode::Add]))
        .unwrap();
    assert_eq!(vm.top(), Some(&Value::from_int(3)));
}

// ============================================================================
// ExecutionContext / OperandStack Tests
// ============================================================================

#[test]
fn test_context_walks_linearly() {
    let chunk = BytecodeChunk::from(vec![push(1), push(2), Opcode::Mul]);
    let mut ctx = ExecutionContext::new(&chunk);
    let mut seen = Vec::new();
    while let Some(inst) = ctx.fetch() {
        seen.push(inst.opcode.mnemonic());
    }
    assert_eq!(seen, vec!["PUSH", "PUSH", "MUL"]);
    assert_eq!(ctx.instruction_pointer, 3);
}

#[test]
fn test_operand_stack_peek() {
    let mut stack = OperandStack::new(3);
    assert!(stack.peek().is_none());
    stack.push(Value::from_int(4));
    assert_eq!(stack.peek(), Some(&Value::from_int(4)));
    assert_eq!(stack.len(), 1);
}
