//! Integration tests for the Numbers module

use dash_foundation::{ErrorKind, Value};
use dash_helpers::numbers;

fn call(name: &str, args: &[Value]) -> dash_foundation::Result<Value> {
    numbers::module().get(name).expect("registered").call(args)
}

// =============================================================================
// Roman numerals
// =============================================================================

#[test]
fn romanize_range() {
    assert_eq!(numbers::romanize(1.0).unwrap(), "I");
    assert_eq!(numbers::romanize(1994.0).unwrap(), "MCMXCIV");
    assert_eq!(numbers::romanize(3999.0).unwrap(), "MMMCMXCIX");
    assert_eq!(numbers::romanize(4.9).unwrap(), "IV");
    for bad in [0.0, -5.0, 4000.0] {
        let err = numbers::romanize(bad).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidArgument { .. }));
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(numbers::add(&Value::Int(2), &Value::Int(3)).unwrap(), Value::Int(5));
    assert_eq!(numbers::subtract(&Value::Int(2), &Value::Int(3)).unwrap(), Value::Int(-1));
    assert_eq!(numbers::multiply(&Value::Int(6), &Value::Int(7)).unwrap(), Value::Int(42));
    assert_eq!(numbers::divide(&Value::Int(7), &Value::Int(2)).unwrap(), Value::Int(3));
}

#[test]
fn mixed_arithmetic_is_float() {
    assert_eq!(numbers::add(&Value::Int(1), &Value::Float(0.5)).unwrap(), Value::Float(1.5));
    assert_eq!(numbers::divide(&Value::Float(7.0), &Value::Int(2)).unwrap(), Value::Float(3.5));
}

#[test]
fn overflow_falls_back_to_float() {
    let out = numbers::add(&Value::Int(i64::MAX), &Value::Int(1)).unwrap();
    assert!(matches!(out, Value::Float(_)));
}

#[test]
fn division_by_zero() {
    let err = numbers::divide(&Value::Int(1), &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    let err = numbers::divide(&Value::Int(1), &Value::Float(0.0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
}

#[test]
fn non_numbers_are_rejected() {
    let err = numbers::add(&Value::from("1"), &Value::Int(1)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn aggregates() {
    let values = [Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)];
    assert_eq!(numbers::sum(&values).unwrap(), Value::Int(10));
    assert_eq!(numbers::sum(&[]).unwrap(), Value::Int(0));
    assert_eq!(numbers::average(&values).unwrap(), Value::Float(2.5));
    assert_eq!(numbers::average(&values[..3]).unwrap(), Value::Int(2));
    assert_eq!(numbers::median(&values).unwrap(), Value::Float(2.5));
    assert_eq!(numbers::median(&[Value::Int(9), Value::Int(1), Value::Int(5)]).unwrap(), Value::Int(5));
    assert!(numbers::average(&[]).is_err());
}

#[test]
fn predicates() {
    assert!(numbers::are_int(&[Value::Int(1), Value::Float(2.0)]).unwrap());
    assert!(!numbers::are_int(&[Value::Float(2.5)]).unwrap());
    assert!(numbers::between(5.0, 1.0, 5.0));
    assert!(!numbers::between(5.1, 1.0, 5.0));
}

// =============================================================================
// Registered functions
// =============================================================================

#[test]
fn registered_aggregates_accept_a_list() {
    let list = Value::from(vec![1, 2, 3]);
    assert_eq!(call("sum", &[list.clone()]).unwrap(), Value::Int(6));
    assert_eq!(call("mean", &[list.clone()]).unwrap(), Value::Int(2));
    assert_eq!(call("median", &[list]).unwrap(), Value::Int(2));
    assert_eq!(
        call("sum", &[Value::Int(1), Value::Int(2)]).unwrap(),
        Value::Int(3)
    );
}

#[test]
fn substract_is_subtract() {
    let args = [Value::Int(10), Value::Int(4)];
    assert_eq!(call("substract", &args).unwrap(), call("subtract", &args).unwrap());
}
