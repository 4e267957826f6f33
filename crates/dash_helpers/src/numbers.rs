//! Numeric helpers.
//!
//! Arithmetic keeps integers as integers when both operands are integers and
//! falls back to floats on overflow or when either operand is a float.

use dash_foundation::{Error, ErrorKind, Result, TypeHint, Value};

use crate::args::{expect_number, number_arg, numeric_arg, values_of};
use crate::module::HelperModule;

/// Largest value `romanize` accepts.
pub const ROMAN_MAX: f64 = 3999.0;

const ROMAN_MAP: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Converts a number in `1..=3999` to roman numerals.
///
/// The fractional part is discarded.
#[allow(clippy::cast_possible_truncation)]
pub fn romanize(n: f64) -> Result<String> {
    if !(1.0..=ROMAN_MAX).contains(&n) {
        return Err(Error::invalid_argument(
            "romanize",
            format!("{n} is outside 1..=3999"),
        ));
    }
    let mut rest = n.trunc() as i64;
    let mut out = String::new();
    for (numeral, value) in ROMAN_MAP {
        while rest >= value {
            out.push_str(numeral);
            rest -= value;
        }
    }
    Ok(out)
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        _ => f64::NAN,
    }
}

fn arith(
    a: &Value,
    b: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    expect_number(a)?;
    expect_number(b)?;
    if let (Value::Int(x), Value::Int(y)) = (a, b) {
        if let Some(n) = int_op(*x, *y) {
            return Ok(Value::Int(n));
        }
    }
    Ok(Value::Float(float_op(as_f64(a), as_f64(b))))
}

/// Adds two numbers.
pub fn add(a: &Value, b: &Value) -> Result<Value> {
    arith(a, b, i64::checked_add, |x, y| x + y)
}

/// Subtracts `b` from `a`.
pub fn subtract(a: &Value, b: &Value) -> Result<Value> {
    arith(a, b, i64::checked_sub, |x, y| x - y)
}

/// Multiplies two numbers.
pub fn multiply(a: &Value, b: &Value) -> Result<Value> {
    arith(a, b, i64::checked_mul, |x, y| x * y)
}

/// Divides `a` by `b`.
///
/// Two integers divide to an integer truncated toward zero.
pub fn divide(a: &Value, b: &Value) -> Result<Value> {
    expect_number(b)?;
    if as_f64(b) == 0.0 {
        return Err(Error::new(ErrorKind::DivisionByZero));
    }
    arith(a, b, i64::checked_div, |x, y| x / y)
}

/// Sums numbers. The empty sum is `0`.
pub fn sum(values: &[Value]) -> Result<Value> {
    values
        .iter()
        .try_fold(Value::Int(0), |acc, v| add(&acc, v))
}

/// Returns the arithmetic mean.
pub fn average(values: &[Value]) -> Result<Value> {
    let count = i64::try_from(values.len()).unwrap_or(i64::MAX);
    if count == 0 {
        return Err(Error::invalid_argument("average", "no values"));
    }
    match sum(values)? {
        Value::Int(total) if total % count == 0 => Ok(Value::Int(total / count)),
        total => Ok(Value::Float(as_f64(&total) / as_f64(&Value::Int(count)))),
    }
}

/// Returns the median.
///
/// For an even count, the median is the mean of the two middle values.
pub fn median(values: &[Value]) -> Result<Value> {
    if values.is_empty() {
        return Err(Error::invalid_argument("median", "no values"));
    }
    for v in values {
        expect_number(v)?;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| as_f64(a).total_cmp(&as_f64(b)));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid].clone())
    } else {
        average(&sorted[mid - 1..=mid])
    }
}

/// Returns true if every value is integral.
pub fn are_int(values: &[Value]) -> Result<bool> {
    values.iter().try_fold(true, |all, v| {
        expect_number(v)?;
        Ok(all && as_f64(v).fract() == 0.0)
    })
}

/// Returns true if `lower <= n <= upper`.
#[must_use]
pub fn between(n: f64, lower: f64, upper: f64) -> bool {
    n >= lower && n <= upper
}

// =============================================================================
// Registered functions
// =============================================================================

/// Returns the `Numbers` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new(TypeHint::NUMBERS)
        .with_function("romanize", native_romanize)
        .with_function("add", native_add)
        .with_function("subtract", native_subtract)
        .with_function("substract", native_subtract)
        .with_function("multiply", native_multiply)
        .with_function("divide", native_divide)
        .with_function("sum", native_sum)
        .with_function("average", native_average)
        .with_function("mean", native_average)
        .with_function("median", native_median)
        .with_function("areInt", native_are_int)
        .with_function("between", native_between)
}

/// Accepts either spread numbers or a single list of numbers.
pub(crate) fn spread_numbers(args: &[Value]) -> Result<Vec<Value>> {
    let values = match args {
        [single] if single.is_iterable() => values_of(single)?,
        _ => args.to_vec(),
    };
    for v in &values {
        expect_number(v)?;
    }
    Ok(values)
}

fn binary(args: &[Value], function: &str, op: fn(&Value, &Value) -> Result<Value>) -> Result<Value> {
    let a = numeric_arg(args, 0, function)?;
    let b = numeric_arg(args, 1, function)?;
    op(a, b)
}

/// Numbers: romanize
fn native_romanize(args: &[Value]) -> Result<Value> {
    Ok(romanize(number_arg(args, 0, "romanize")?)?.into())
}

/// Numbers: add
fn native_add(args: &[Value]) -> Result<Value> {
    binary(args, "add", add)
}

/// Numbers: subtract
fn native_subtract(args: &[Value]) -> Result<Value> {
    binary(args, "subtract", subtract)
}

/// Numbers: multiply
fn native_multiply(args: &[Value]) -> Result<Value> {
    binary(args, "multiply", multiply)
}

/// Numbers: divide
fn native_divide(args: &[Value]) -> Result<Value> {
    binary(args, "divide", divide)
}

/// Numbers: sum
fn native_sum(args: &[Value]) -> Result<Value> {
    sum(&spread_numbers(args)?)
}

/// Numbers: average
fn native_average(args: &[Value]) -> Result<Value> {
    average(&spread_numbers(args)?)
}

/// Numbers: median
fn native_median(args: &[Value]) -> Result<Value> {
    median(&spread_numbers(args)?)
}

/// Numbers: areInt
fn native_are_int(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(are_int(&spread_numbers(args)?)?))
}

/// Numbers: between
fn native_between(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(between(
        number_arg(args, 0, "between")?,
        number_arg(args, 1, "between")?,
        number_arg(args, 2, "between")?,
    )))
}
