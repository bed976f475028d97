//! Tests for BytecodeChunk struct

use bytecode_system::{BytecodeChunk, Opcode};
use core_types::{SourcePosition, Value};

#[test]
fn test_chunk_creation() {
    let chunk = BytecodeChunk::new();
    assert_eq!(chunk.instruction_count(), 0);
    assert!(chunk.is_empty());
}

#[test]
fn test_chunk_emit_multiple_instructions() {
    let mut chunk = BytecodeChunk::new();
    chunk.push_constant(Value::from_int(1));
    chunk.emit(Opcode::Negate);
    chunk.emit_with_position(Opcode::Sin, SourcePosition::new(3));
    assert_eq!(chunk.instruction_count(), 3);
    assert!(matches!(chunk.instructions()[1].opcode, Opcode::Negate));
    assert_eq!(
        chunk.instructions()[2].source_position,
        Some(SourcePosition::new(3))
    );
}

#[test]
fn test_max_stack_depth_nested_expression() {
    // 1 + 2 * (3 - 4)
    let chunk: BytecodeChunk = vec![
        Opcode::Push(Value::from_int(1)),
        Opcode::Push(Value::from_int(2)),
        Opcode::Push(Value::from_int(3)),
        Opcode::Push(Value::from_int(4)),
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Add,
    ]
    .into();
    assert_eq!(chunk.max_stack_depth(), Some(4));
}

#[test]
fn test_max_stack_depth_detects_underflow() {
    let chunk = BytecodeChunk::from(vec![Opcode::Push(Value::from_int(1)), Opcode::Add]);
    assert_eq!(chunk.max_stack_depth(), None);

    let unary_first = BytecodeChunk::from(vec![Opcode::Cos]);
    assert_eq!(unary_first.max_stack_depth(), None);
}

#[test]
fn test_disassembly_lists_every_instruction() {
    let chunk = BytecodeChunk::from(vec![
        Opcode::Push(Value::from_int(10)),
        Opcode::Push(Value::from_int(0)),
        Opcode::Div,
    ]);
    let listing = chunk.to_string();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines, vec!["0000  PUSH 10", "0001  PUSH 0", "0002  DIV"]);
}
