//! Predicates.

use dash_foundation::{Result, Value};

use crate::args::arg;
use crate::module::HelperModule;

/// Returns true if `value` is a number, or numeric text, with a fractional
/// part.
///
/// `1.5` and `"1.5"` are decimal; `2`, `2.0` and `"abc"` are not.
#[must_use]
pub fn is_decimal(value: &Value) -> bool {
    let n = match value {
        Value::Float(n) => *n,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => return false,
        },
        _ => return false,
    };
    n.is_finite() && n.fract() != 0.0
}

/// Returns the `Conditions` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new("Conditions").with_function("isDecimal", native_is_decimal)
}

/// Conditions: isDecimal
fn native_is_decimal(args: &[Value]) -> Result<Value> {
    Ok(Value::Bool(is_decimal(arg(args, 0, "isDecimal")?)))
}
