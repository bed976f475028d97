//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Lexer -> Compiler -> BytecodeChunk -> VM -> Result

use core_types::{Number, Value};
use interpreter::VM;
use parser::compile_source;

/// Compile and run every statement, collecting each result
fn evaluate(source: &str) -> Vec<Value> {
    let mut vm = VM::new();
    compile_source(source)
        .unwrap()
        .iter()
        .map(|statement| {
            vm.execute(&statement.code).unwrap();
            vm.pop_result().unwrap()
        })
        .collect()
}

fn single(source: &str) -> Number {
    let values = evaluate(source);
    assert_eq!(values.len(), 1);
    values[0].as_number().unwrap()
}

#[test]
fn test_full_pipeline_arithmetic() {
    assert_eq!(single("3-2"), Number::ONE);
    assert_eq!(single("(-2)"), Number::from_int(-2));
    assert_eq!(single("2 + 3 * 4 - 1"), Number::from_int(13));
    assert_eq!(single("12.5 * 2"), Number::from_int(25));
}

#[test]
fn test_full_pipeline_precedence_levels() {
    // shift binds looser than additive
    assert_eq!(single("1 <<< 1 + 1"), Number::from_int(4));
    // comparison binds looser than shift
    assert_eq!(single("1 <<< 2 == 4"), Number::ONE);
    // bitwise and binds tighter than or
    assert_eq!(single("1 | 2 & 3"), Number::from_int(3));
    assert_eq!(single("0 && 1 || 1"), Number::ONE);
}

#[test]
fn test_full_pipeline_transcendentals() {
    let one = single("lb 2");
    assert_eq!(one, Number::ONE);
    let hundred = single("lg 100").to_f64();
    assert!((hundred - 2.0).abs() < 1e-3);
    assert_eq!(single("sin 0"), Number::ZERO);
    let one = single("cos 0 + sin 0").to_f64();
    assert!((one - 1.0).abs() < 1e-3);
}

#[test]
fn test_full_pipeline_division() {
    assert_eq!(single("1 / 0"), Number::MAX);
    assert_eq!(single("9 // 2"), Number::from_int(4));
    assert_eq!(single("9 % 4"), Number::ONE);
}

#[test]
fn test_full_pipeline_statements() {
    let values = evaluate("1; print 2 * 2; # comment\n 3");
    assert_eq!(
        values,
        vec![Value::from_int(1), Value::from_int(4), Value::from_int(3)]
    );
}
