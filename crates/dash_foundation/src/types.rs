//! Shape descriptors for values.
//!
//! [`Type`] names the concrete shape of a value and appears in type mismatch
//! errors. [`TypeHint`] is the coarse category the facade uses to pick which
//! helper module to try first.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Concrete shape of a value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Either numeric type.
    Number,
    /// String type.
    String,
    /// Ordered list.
    Vec,
    /// Keyed map.
    Map,
    /// Either a list or a map.
    Iterable,
    /// Callable value.
    Fn,
    /// Any type (accepts any value).
    Any,
}

impl Type {
    /// Checks if a value type is accepted by this type.
    ///
    /// `Number` accepts both numeric types and `Iterable` accepts both
    /// collection types; everything else must match exactly.
    #[must_use]
    pub fn accepts(self, value_type: Type) -> bool {
        match (self, value_type) {
            (Self::Any, _)
            | (Self::Number, Self::Int | Self::Float)
            | (Self::Iterable, Self::Vec | Self::Map) => true,
            (expected, actual) => expected == actual,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Vec => "vec",
            Self::Map => "map",
            Self::Iterable => "iterable",
            Self::Fn => "fn",
            Self::Any => "any",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Coarse category inferred from a value, used to narrow resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeHint {
    /// Lists and maps.
    Iterable,
    /// Integers and floats.
    Number,
    /// Strings.
    String,
    /// Anything else (nil, booleans, callables).
    Unknown,
}

impl TypeHint {
    /// Name of the helper module holding iterable functions.
    pub const ITERABLES: &'static str = "Iterables";
    /// Name of the helper module holding numeric functions.
    pub const NUMBERS: &'static str = "Numbers";
    /// Name of the helper module holding string functions.
    pub const STRINGS: &'static str = "Strings";

    /// Infers the hint for a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Vec(_) | Value::Map(_) => Self::Iterable,
            Value::Int(_) | Value::Float(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Nil | Value::Bool(_) | Value::Fn(_) => Self::Unknown,
        }
    }

    /// The helper module tried first for this hint.
    ///
    /// Anything that is not iterable or numeric maps to the string module.
    #[must_use]
    pub const fn module_name(self) -> &'static str {
        match self {
            Self::Iterable => Self::ITERABLES,
            Self::Number => Self::NUMBERS,
            Self::String | Self::Unknown => Self::STRINGS,
        }
    }
}
