//! Core value type for all Dash data.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{DMap, DVec, Key};
use crate::error::Result;
use crate::types::{Type, TypeHint};

/// Core value type passed to and returned from every helper function.
///
/// Values are immutable and cheaply cloneable. Lists and maps use
/// structural sharing via persistent data structures.
#[derive(Clone)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Persistent list.
    Vec(DVec<Value>),
    /// Persistent key-ordered map.
    Map(DMap<Key, Value>),
    /// Function reference.
    Fn(Callable),
}

/// Function reference.
///
/// Helper modules register native function pointers; composition helpers
/// build closures at runtime.
#[derive(Clone)]
pub enum Callable {
    /// Function pointer registered under a static name.
    Native(NativeFn),
    /// Closure built at runtime.
    Closure(Closure),
}

/// Signature shared by every registered helper.
pub type NativeFnPtr = fn(&[Value]) -> Result<Value>;

/// Native function callable by name.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Function name for debugging.
    pub name: &'static str,
    /// Function pointer.
    pub func: NativeFnPtr,
}

type ClosureFn = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

/// Runtime-built function, such as the result of `compose`.
#[derive(Clone)]
pub struct Closure {
    name: Arc<str>,
    func: Arc<ClosureFn>,
}

impl NativeFn {
    /// Creates a native function reference.
    #[must_use]
    pub const fn new(name: &'static str, func: NativeFnPtr) -> Self {
        Self { name, func }
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }
}

impl Closure {
    /// Wraps a Rust closure.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Returns the closure's debug name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the closure.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }
}

impl Callable {
    /// Invokes the callable with the given arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Native(f) => f.call(args),
            Self::Closure(f) => f.call(args),
        }
    }

    /// Returns the callable's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(f) => f.name,
            Self::Closure(f) => f.name(),
        }
    }
}

impl From<NativeFn> for Callable {
    fn from(f: NativeFn) -> Self {
        Self::Native(f)
    }
}

impl From<Closure> for Callable {
    fn from(f: Closure) -> Self {
        Self::Closure(f)
    }
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::String,
            Self::Vec(_) => Type::Vec,
            Self::Map(_) => Type::Map,
            Self::Fn(_) => Type::Fn,
        }
    }

    /// Returns the dispatch hint for this value.
    #[must_use]
    pub fn type_hint(&self) -> TypeHint {
        TypeHint::of(self)
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this value is a list or a map.
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Self::Vec(_) | Self::Map(_))
    }

    /// Returns true if this value is truthy.
    ///
    /// `nil` and `false` are falsy, everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_vec(&self) -> Option<&DVec<Value>> {
        match self {
            Self::Vec(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&DMap<Key, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a callable reference.
    #[must_use]
    pub const fn as_fn(&self) -> Option<&Callable> {
        match self {
            Self::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Converts a scalar into a map key.
    ///
    /// Integers and strings map directly, booleans become `0`/`1`, and
    /// integral floats become integer keys.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_key(&self) -> Option<Key> {
        match self {
            Self::Int(n) => Some(Key::Int(*n)),
            Self::String(s) => Some(Key::Str(s.clone())),
            Self::Bool(b) => Some(Key::Int(i64::from(*b))),
            Self::Float(n) if n.fract() == 0.0 && n.is_finite() => Some(Key::Int(*n as i64)),
            _ => None,
        }
    }

    /// Returns the `(key, value)` pairs of a list or map.
    ///
    /// List entries are keyed by index. Returns `None` for scalars.
    #[must_use]
    pub fn entries(&self) -> Option<Vec<(Key, Value)>> {
        match self {
            Self::Vec(v) => Some(
                v.iter()
                    .enumerate()
                    .map(|(i, item)| (Key::from(i), item.clone()))
                    .collect(),
            ),
            Self::Map(m) => Some(m.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            _ => None,
        }
    }

    /// Looks up a child by key in a list or map.
    #[must_use]
    pub fn child(&self, key: &Key) -> Option<&Value> {
        match (self, key) {
            (Self::Map(m), _) => m.get(key),
            (Self::Vec(v), Key::Int(i)) => usize::try_from(*i).ok().and_then(|i| v.get(i)),
            _ => None,
        }
    }

    /// Builds a map value from key-value pairs.
    pub fn map_from<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<Key>,
    {
        Self::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// Float equality uses bit comparison so that Eq and Hash stay consistent.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Vec(a), Self::Vec(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Fn(a), Self::Fn(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Vec(v) => v.hash(state),
            Self::Map(m) => m.hash(state),
            Self::Fn(f) => f.hash(state),
        }
    }
}

impl PartialOrd for Value {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            // Cross-type numeric comparison intentionally loses precision for large i64
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vec(v) => write!(f, "{v:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
            Self::Fn(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Fn(func) => write!(f, "{func}"),
        }
    }
}

// Callable implementations

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => std::ptr::fn_addr_eq(a.func, b.func),
            (Self::Closure(a), Self::Closure(b)) => Arc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl Eq for Callable {}

impl Hash for Callable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Native(f) => (f.func as usize).hash(state),
            Self::Closure(f) => Arc::as_ptr(&f.func).cast::<()>().hash(state),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(func) => write!(f, "<native fn {}>", func.name),
            Self::Closure(func) => write!(f, "<fn {}>", func.name),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure({})", self.name)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Self::Int(n),
            Key::Str(s) => Self::String(s),
        }
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Fn(f)
    }
}

impl From<DVec<Value>> for Value {
    fn from(v: DVec<Value>) -> Self {
        Self::Vec(v)
    }
}

impl From<DMap<Key, Value>> for Value {
    fn from(m: DMap<Key, Value>) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Vec(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
