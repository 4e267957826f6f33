//! Argument extraction for registered helpers.
//!
//! Registered helpers receive a positional slice. These functions pull typed
//! values out of it and report arity or type mismatches in one shape.

use dash_foundation::{Callable, Error, Result, Type, Value};

fn mismatch(expected: Type, actual: &Value) -> Error {
    Error::type_mismatch(expected, actual.value_type())
}

/// Gets a required argument.
pub fn arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| {
        Error::arity_mismatch(format!("at least {} for {function}", index + 1), args.len())
    })
}

/// Gets an optional argument. Missing and nil arguments are both `None`.
#[must_use]
pub fn opt_arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|v| !v.is_nil())
}

/// Gets a required string argument.
pub fn str_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a str> {
    let value = arg(args, index, function)?;
    value.as_str().ok_or_else(|| mismatch(Type::String, value))
}

/// Gets an optional string argument, falling back to `default`.
pub fn opt_str_arg<'a>(args: &'a [Value], index: usize, default: &'a str) -> Result<&'a str> {
    match opt_arg(args, index) {
        None => Ok(default),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(mismatch(Type::String, other)),
    }
}

/// Gets a required integer argument. Integral floats are accepted.
pub fn int_arg(args: &[Value], index: usize, function: &str) -> Result<i64> {
    to_int(arg(args, index, function)?)
}

/// Gets an optional integer argument, falling back to `default`.
pub fn opt_int_arg(args: &[Value], index: usize, default: i64) -> Result<i64> {
    opt_arg(args, index).map_or(Ok(default), to_int)
}

#[allow(clippy::cast_possible_truncation)]
fn to_int(value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Float(n) if n.fract() == 0.0 && n.is_finite() => Ok(*n as i64),
        other => Err(mismatch(Type::Int, other)),
    }
}

/// Gets a required numeric argument as `f64`.
pub fn number_arg(args: &[Value], index: usize, function: &str) -> Result<f64> {
    let value = arg(args, index, function)?;
    value.as_number().ok_or_else(|| mismatch(Type::Number, value))
}

/// Gets a required numeric argument, keeping its integer or float shape.
pub fn numeric_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a Value> {
    let value = arg(args, index, function)?;
    expect_number(value)?;
    Ok(value)
}

/// Checks that a value is an integer or a float.
pub fn expect_number(value: &Value) -> Result<()> {
    match value {
        Value::Int(_) | Value::Float(_) => Ok(()),
        other => Err(mismatch(Type::Number, other)),
    }
}

/// Gets a required list or map argument.
pub fn iterable_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a Value> {
    let value = arg(args, index, function)?;
    if value.is_iterable() {
        Ok(value)
    } else {
        Err(mismatch(Type::Iterable, value))
    }
}

/// Gets a required callable argument.
pub fn callable_arg<'a>(args: &'a [Value], index: usize, function: &str) -> Result<&'a Callable> {
    let value = arg(args, index, function)?;
    value.as_fn().ok_or_else(|| mismatch(Type::Fn, value))
}

/// Gets an optional boolean argument, falling back to `default`.
pub fn opt_bool_arg(args: &[Value], index: usize, default: bool) -> Result<bool> {
    match opt_arg(args, index) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(mismatch(Type::Bool, other)),
    }
}

/// Collects string arguments from `index` on.
///
/// A single list argument in that position is expanded into its elements.
pub fn str_list<'a>(args: &'a [Value], index: usize) -> Result<Vec<&'a str>> {
    let rest = args.get(index..).unwrap_or_default();
    let items: Vec<&Value> = match rest {
        [Value::Vec(v)] => v.iter().collect(),
        _ => rest.iter().collect(),
    };
    items
        .into_iter()
        .map(|v| v.as_str().ok_or_else(|| mismatch(Type::String, v)))
        .collect()
}

/// Collects the values of a list or map argument.
pub fn values_of(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::Vec(v) => Ok(v.iter().cloned().collect()),
        Value::Map(m) => Ok(m.values().cloned().collect()),
        other => Err(mismatch(Type::Iterable, other)),
    }
}
