//! Unit tests for SourcePosition

use core_types::SourcePosition;

#[test]
fn test_source_position_new() {
    let pos = SourcePosition::new(42);
    assert_eq!(pos.line, 42);
}

#[test]
fn test_source_position_ordering() {
    assert!(SourcePosition::new(1) < SourcePosition::new(2));
}

#[test]
fn test_source_position_display() {
    assert_eq!(format!("{}", SourcePosition::new(7)), "line 7");
}

#[test]
fn test_source_position_copy() {
    let a = SourcePosition::new(5);
    let b = a;
    assert_eq!(a, b);
}
