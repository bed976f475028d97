//! Tests for the opcode catalog

use bytecode_system::{Opcode, Shape};
use core_types::Value;

fn unary_opcodes() -> Vec<Opcode> {
    vec![
        Opcode::Plus,
        Opcode::Negate,
        Opcode::BitNot,
        Opcode::Not,
        Opcode::Sin,
        Opcode::Cos,
        Opcode::Ln,
        Opcode::Lb,
        Opcode::Lg,
    ]
}

fn binary_opcodes() -> Vec<Opcode> {
    vec![
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::FloorDiv,
        Opcode::Mod,
        Opcode::ArithmeticShiftLeft,
        Opcode::ArithmeticShiftRight,
        Opcode::LogicalShiftLeft,
        Opcode::LogicalShiftRight,
        Opcode::BitAnd,
        Opcode::BitOr,
        Opcode::BitXor,
        Opcode::And,
        Opcode::Or,
        Opcode::Equal,
        Opcode::NotEqual,
        Opcode::LessThan,
        Opcode::GreaterThan,
        Opcode::LessThanEqual,
        Opcode::GreaterThanEqual,
        Opcode::Compare,
    ]
}

#[test]
fn test_push_is_only_constant_shape() {
    assert_eq!(Opcode::Push(Value::from_int(5)).shape(), Shape::PushConstant);
    for op in unary_opcodes().into_iter().chain(binary_opcodes()) {
        assert_ne!(op.shape(), Shape::PushConstant, "{:?}", op);
    }
}

#[test]
fn test_unary_catalog() {
    for op in unary_opcodes() {
        assert_eq!(op.shape(), Shape::Unary, "{:?}", op);
        assert_eq!(op.operand_count(), 1);
        assert_eq!(op.stack_effect(), 0);
    }
}

#[test]
fn test_binary_catalog() {
    for op in binary_opcodes() {
        assert_eq!(op.shape(), Shape::Binary, "{:?}", op);
        assert_eq!(op.operand_count(), 2);
        assert_eq!(op.stack_effect(), -1);
    }
}

#[test]
fn test_mnemonics_are_distinct() {
    let mut names: Vec<&str> = unary_opcodes()
        .iter()
        .chain(binary_opcodes().iter())
        .map(Opcode::mnemonic)
        .collect();
    names.push(Opcode::Push(Value::from_int(0)).mnemonic());
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_shift_mnemonics() {
    assert_eq!(Opcode::ArithmeticShiftLeft.mnemonic(), "ASHL");
    assert_eq!(Opcode::LogicalShiftRight.mnemonic(), "SHR");
}
