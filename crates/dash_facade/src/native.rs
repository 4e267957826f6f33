//! Native-equivalent functions.
//!
//! The last resolution step joins a native prefix (`str_`, `array_`) to the
//! snake-cased operation name and looks the result up here. Every function
//! takes its subject first, so `Dash::call("pad", ["ab", 4])` and a chain
//! step `.then("pad", [4])` reach `str_pad("ab", 4)`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use dash_foundation::value::NativeFnPtr;
use dash_foundation::{DMap, DVec, Error, Key, NativeFn, Result, Type, Value};
use dash_helpers::args::{
    arg, int_arg, iterable_arg, opt_arg, opt_int_arg, opt_str_arg, str_arg, values_of,
};
use dash_helpers::{iterables, numbers};

/// Table of native-equivalent functions keyed by full name.
#[derive(Clone, Debug, Default)]
pub struct NativeTable {
    functions: HashMap<&'static str, NativeFn>,
}

impl NativeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding every builtin native function.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for (name, func) in BUILTINS {
            table.register(name, func);
        }
        table
    }

    /// Returns the shared builtin table.
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<NativeTable>> = OnceLock::new();
        BUILTIN.get_or_init(|| Arc::new(Self::with_builtins())).clone()
    }

    /// Builder method to add a function.
    #[must_use]
    pub fn with_function(mut self, name: &'static str, func: NativeFnPtr) -> Self {
        self.register(name, func);
        self
    }

    /// Adds a function, replacing any previous one with the same name.
    pub fn register(&mut self, name: &'static str, func: NativeFnPtr) {
        self.functions.insert(name, NativeFn::new(name, func));
    }

    /// Looks up a function by full name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NativeFn> {
        self.functions.get(name).copied()
    }

    /// Checks if a function exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the number of functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

const BUILTINS: [(&str, NativeFnPtr); 21] = [
    ("str_repeat", str_repeat),
    ("str_pad", str_pad),
    ("str_split", str_split),
    ("str_word_count", str_word_count),
    ("str_replace", str_replace),
    ("str_contains", str_contains),
    ("str_starts_with", str_starts_with),
    ("str_ends_with", str_ends_with),
    ("array_sum", array_sum),
    ("array_product", array_product),
    ("array_keys", array_keys),
    ("array_values", array_values),
    ("array_flip", array_flip),
    ("array_slice", array_slice),
    ("array_merge", array_merge),
    ("array_chunk", array_chunk),
    ("array_pad", array_pad),
    ("array_search", array_search),
    ("array_count_values", array_count_values),
    ("array_key_first", array_key_first),
    ("array_key_last", array_key_last),
];

/// Largest string or list a native function will build.
pub const MAX_OUTPUT_LEN: usize = 1 << 24;

fn bounded(n: usize, function: &str) -> Result<usize> {
    if n > MAX_OUTPUT_LEN {
        return Err(Error::invalid_argument(
            function,
            format!("output of {n} exceeds the limit of {MAX_OUTPUT_LEN}"),
        ));
    }
    Ok(n)
}

fn count(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

fn positive(n: i64, function: &str, what: &str) -> Result<usize> {
    usize::try_from(n)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| Error::invalid_argument(function, format!("{what} must be positive, got {n}")))
}

// =============================================================================
// String functions
// =============================================================================

/// `str_repeat(s, times)`
fn str_repeat(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_repeat")?;
    let times = int_arg(args, 1, "str_repeat")?;
    let times = usize::try_from(times).map_err(|_| {
        Error::invalid_argument("str_repeat", format!("negative count {times}"))
    })?;
    let len = times.checked_mul(s.len()).unwrap_or(usize::MAX);
    bounded(len, "str_repeat")?;
    Ok(s.repeat(times).into())
}

/// `str_pad(s, length, pad = " ", side = "right")`
fn str_pad(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_pad")?;
    let target = bounded(
        usize::try_from(int_arg(args, 1, "str_pad")?).unwrap_or(0),
        "str_pad",
    )?;
    let pad = opt_str_arg(args, 2, " ")?;
    let side = opt_str_arg(args, 3, "right")?;
    if pad.is_empty() {
        return Err(Error::invalid_argument("str_pad", "padding must not be empty"));
    }

    let missing = target.saturating_sub(s.chars().count());
    let fill = |n: usize| pad.chars().cycle().take(n).collect::<String>();
    let out = match side {
        "left" => format!("{}{s}", fill(missing)),
        "both" => {
            let left = missing / 2;
            format!("{}{s}{}", fill(left), fill(missing - left))
        }
        "right" => format!("{s}{}", fill(missing)),
        other => {
            return Err(Error::invalid_argument(
                "str_pad",
                format!("unknown side {other:?}"),
            ));
        }
    };
    Ok(out.into())
}

/// `str_split(s, length = 1)`
fn str_split(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_split")?;
    let size = positive(opt_int_arg(args, 1, 1)?, "str_split", "chunk length")?;
    let chars: Vec<char> = s.chars().collect();
    let chunks: DVec<Value> = chars
        .chunks(size)
        .map(|c| Value::from(c.iter().collect::<String>()))
        .collect();
    Ok(Value::Vec(chunks))
}

/// `str_word_count(s)`: runs of letters, apostrophes and hyphens.
fn str_word_count(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_word_count")?;
    let words = s
        .split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '-'))
        .filter(|w| !w.is_empty())
        .count();
    Ok(count(words))
}

/// `str_replace(subject, search, replace)`
fn str_replace(args: &[Value]) -> Result<Value> {
    let subject = str_arg(args, 0, "str_replace")?;
    let search = str_arg(args, 1, "str_replace")?;
    let replace = str_arg(args, 2, "str_replace")?;
    if search.is_empty() {
        return Ok(subject.into());
    }
    Ok(subject.replace(search, replace).into())
}

/// `str_contains(s, needle)`
fn str_contains(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_contains")?;
    Ok(Value::Bool(s.contains(str_arg(args, 1, "str_contains")?)))
}

/// `str_starts_with(s, prefix)`
fn str_starts_with(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_starts_with")?;
    Ok(Value::Bool(s.starts_with(str_arg(args, 1, "str_starts_with")?)))
}

/// `str_ends_with(s, suffix)`
fn str_ends_with(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "str_ends_with")?;
    Ok(Value::Bool(s.ends_with(str_arg(args, 1, "str_ends_with")?)))
}

// =============================================================================
// Array functions
// =============================================================================

/// `array_sum(itr)`
fn array_sum(args: &[Value]) -> Result<Value> {
    numbers::sum(&values_of(iterable_arg(args, 0, "array_sum")?)?)
}

/// `array_product(itr)`
fn array_product(args: &[Value]) -> Result<Value> {
    values_of(iterable_arg(args, 0, "array_product")?)?
        .iter()
        .try_fold(Value::Int(1), |acc, v| numbers::multiply(&acc, v))
}

/// `array_keys(itr)`
fn array_keys(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "array_keys")?;
    let keys: DVec<Value> = itr
        .entries()
        .into_iter()
        .flatten()
        .map(|(k, _)| Value::from(k))
        .collect();
    Ok(Value::Vec(keys))
}

/// `array_values(itr)`
fn array_values(args: &[Value]) -> Result<Value> {
    Ok(Value::from(values_of(iterable_arg(args, 0, "array_values")?)?))
}

/// `array_flip(itr)`: values become keys. Values must be valid keys.
fn array_flip(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "array_flip")?;
    let mut out = DMap::new();
    for (k, v) in itr.entries().into_iter().flatten() {
        let key = v.as_key().ok_or_else(|| {
            Error::invalid_argument("array_flip", format!("{v:?} cannot be used as a key"))
        })?;
        out = out.insert(key, Value::from(k));
    }
    Ok(Value::Map(out))
}

/// `array_slice(itr, offset, length = nil)`
///
/// Negative offsets and lengths count from the end. Integer keys are
/// renumbered, string keys are kept.
fn array_slice(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "array_slice")?;
    let offset = int_arg(args, 1, "array_slice")?;
    let pairs = itr.entries().unwrap_or_default();
    let len = i64::try_from(pairs.len()).unwrap_or(i64::MAX);

    let start = if offset < 0 { (len + offset).max(0) } else { offset.min(len) };
    let end = match opt_arg(args, 2) {
        None => len,
        Some(_) => match int_arg(args, 2, "array_slice")? {
            n if n < 0 => (len + n).max(start),
            n => start.saturating_add(n).min(len),
        },
    };
    let start = usize::try_from(start).unwrap_or(0);
    let end = usize::try_from(end).unwrap_or(start);
    let sliced: DMap<Key, Value> = pairs[start..end].iter().cloned().collect();
    iterables::merge(&[Value::Map(sliced)])
}

/// `array_merge(itr, ...others)`
fn array_merge(args: &[Value]) -> Result<Value> {
    iterable_arg(args, 0, "array_merge")?;
    iterables::merge(args)
}

/// `array_chunk(itr, size)`
fn array_chunk(args: &[Value]) -> Result<Value> {
    let values = values_of(iterable_arg(args, 0, "array_chunk")?)?;
    let size = positive(int_arg(args, 1, "array_chunk")?, "array_chunk", "chunk size")?;
    let chunks: DVec<Value> = values.chunks(size).map(|c| Value::from(c.to_vec())).collect();
    Ok(Value::Vec(chunks))
}

/// `array_pad(list, size, value)`: a negative size pads on the left.
fn array_pad(args: &[Value]) -> Result<Value> {
    let values = values_of(iterable_arg(args, 0, "array_pad")?)?;
    let size = int_arg(args, 1, "array_pad")?;
    let fill = arg(args, 2, "array_pad")?;
    let target = bounded(
        usize::try_from(size.unsigned_abs()).unwrap_or(usize::MAX),
        "array_pad",
    )?;
    let padding = std::iter::repeat_n(fill.clone(), target.saturating_sub(values.len()));
    let out: Vec<Value> = if size < 0 {
        padding.chain(values).collect()
    } else {
        values.into_iter().chain(padding).collect()
    };
    Ok(Value::from(out))
}

/// `array_search(itr, needle)`: the first matching key, or `false`.
fn array_search(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "array_search")?;
    let needle = arg(args, 1, "array_search")?;
    Ok(itr
        .entries()
        .into_iter()
        .flatten()
        .find(|(_, v)| v == needle)
        .map_or(Value::Bool(false), |(k, _)| Value::from(k)))
}

/// `array_count_values(itr)`
fn array_count_values(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "array_count_values")?;
    let mut counts: DMap<Key, Value> = DMap::new();
    for v in values_of(itr)? {
        let key = v
            .as_key()
            .ok_or_else(|| Error::type_mismatch(Type::String, v.value_type()))?;
        let n = counts.get(&key).and_then(Value::as_int).unwrap_or(0);
        counts = counts.insert(key, Value::Int(n + 1));
    }
    Ok(Value::Map(counts))
}

fn boundary_key(args: &[Value], function: &str, last: bool) -> Result<Value> {
    let itr = iterable_arg(args, 0, function)?;
    let entries = itr.entries().unwrap_or_default();
    let entry = if last { entries.last() } else { entries.first() };
    Ok(entry.map_or(Value::Nil, |(k, _)| Value::from(k.clone())))
}

/// `array_key_first(itr)`
fn array_key_first(args: &[Value]) -> Result<Value> {
    boundary_key(args, "array_key_first", false)
}

/// `array_key_last(itr)`
fn array_key_last(args: &[Value]) -> Result<Value> {
    boundary_key(args, "array_key_last", true)
}
