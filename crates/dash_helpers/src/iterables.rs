//! List and map helpers.
//!
//! Functions that keep the input's shape return a list for list input and a
//! map for map input. Lists are re-indexed after filtering. Callbacks receive
//! `(value, key)`.

use std::collections::{BTreeMap, HashSet};

use dash_foundation::{Callable, DMap, DVec, Error, Key, Result, Type, TypeHint, Value};

use crate::args::{arg, callable_arg, int_arg, iterable_arg, opt_arg, opt_int_arg, opt_str_arg, values_of};
use crate::module::HelperModule;
use crate::numbers;

/// Default key that `group_by_parent` treats as the child list.
pub const CHILD_POINTER: &str = "children";

fn entries(itr: &Value) -> Result<Vec<(Key, Value)>> {
    itr.entries()
        .ok_or_else(|| Error::type_mismatch(Type::Iterable, itr.value_type()))
}

/// Builds a value shaped like `like` from key-value pairs.
fn rebuild(like: &Value, pairs: impl IntoIterator<Item = (Key, Value)>) -> Value {
    match like {
        Value::Map(_) => Value::Map(pairs.into_iter().collect()),
        _ => Value::Vec(pairs.into_iter().map(|(_, v)| v).collect()),
    }
}

/// Collapses a map keyed exactly `0..n` into a list.
fn normalize(value: Value) -> Value {
    match value {
        Value::Map(m) if m.keys().enumerate().all(|(i, k)| *k == Key::from(i)) => {
            Value::Vec(m.values().cloned().collect())
        }
        other => other,
    }
}

fn visit(f: &Callable, value: &Value, key: &Key) -> Result<Value> {
    f.call(&[value.clone(), Value::from(key.clone())])
}

fn passes(f: &Callable, value: &Value, key: &Key) -> Result<bool> {
    Ok(visit(f, value, key)?.is_truthy())
}

fn to_keys(keys: &[Value], function: &str) -> Result<Vec<Key>> {
    keys.iter()
        .map(|k| {
            k.as_key().ok_or_else(|| {
                Error::invalid_argument(function, format!("{k:?} cannot be used as a key"))
            })
        })
        .collect()
}

fn len_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

// =============================================================================
// Mapping and filtering
// =============================================================================

/// Applies `f` to every value.
pub fn map(itr: &Value, f: &Callable) -> Result<Value> {
    let pairs = entries(itr)?
        .into_iter()
        .map(|(k, v)| Ok((k.clone(), visit(f, &v, &k)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(rebuild(itr, pairs))
}

/// Applies `f` to every leaf, descending into nested lists and maps.
pub fn map_deep(itr: &Value, f: &Callable) -> Result<Value> {
    let pairs = entries(itr)?
        .into_iter()
        .map(|(k, v)| {
            let out = if v.is_iterable() {
                map_deep(&v, f)?
            } else {
                visit(f, &v, &k)?
            };
            Ok((k, out))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(rebuild(itr, pairs))
}

/// Keeps the values for which `f` is truthy.
pub fn filter(itr: &Value, f: &Callable) -> Result<Value> {
    let mut kept = Vec::new();
    for (k, v) in entries(itr)? {
        if passes(f, &v, &k)? {
            kept.push((k, v));
        }
    }
    Ok(rebuild(itr, kept))
}

/// Filters leaves, keeping every nested list or map.
pub fn filter_deep(itr: &Value, f: &Callable) -> Result<Value> {
    let mut kept = Vec::new();
    for (k, v) in entries(itr)? {
        if v.is_iterable() {
            kept.push((k, filter_deep(&v, f)?));
        } else if passes(f, &v, &k)? {
            kept.push((k, v));
        }
    }
    Ok(rebuild(itr, kept))
}

/// Folds values with `f(acc, value, key)`.
pub fn reduce(itr: &Value, f: &Callable, acc: Value) -> Result<Value> {
    entries(itr)?
        .into_iter()
        .try_fold(acc, |acc, (k, v)| f.call(&[acc, v, Value::from(k)]))
}

/// Folds every leaf depth-first with `f(acc, value, key)`.
pub fn reduce_deep(itr: &Value, f: &Callable, acc: Value) -> Result<Value> {
    entries(itr)?.into_iter().try_fold(acc, |acc, (k, v)| {
        if v.is_iterable() {
            reduce_deep(&v, f, acc)
        } else {
            f.call(&[acc, v, Value::from(k)])
        }
    })
}

/// Returns the values in reverse order as a list.
///
/// Maps are ordered by key, so a reversed map is returned as the list of its
/// values in descending key order.
pub fn reverse(itr: &Value) -> Result<Value> {
    let values = values_of(itr)?;
    Ok(Value::Vec(values.into_iter().rev().collect()))
}

/// Reverses every level.
pub fn reverse_deep(itr: &Value) -> Result<Value> {
    let values = values_of(itr)?;
    let reversed = values
        .into_iter()
        .rev()
        .map(|v| if v.is_iterable() { reverse_deep(&v) } else { Ok(v) })
        .collect::<Result<DVec<_>>>()?;
    Ok(Value::Vec(reversed))
}

// =============================================================================
// Flattening and grouping
// =============================================================================

fn collect_leaves(itr: &Value, depth: i64, out: &mut Vec<(i64, Value)>) {
    let Some(pairs) = itr.entries() else {
        return;
    };
    for (_, v) in pairs {
        if v.is_iterable() {
            collect_leaves(&v, depth + 1, out);
        } else {
            out.push((depth, v));
        }
    }
}

fn leaves(itr: &Value) -> Result<Vec<(i64, Value)>> {
    if !itr.is_iterable() {
        return Err(Error::type_mismatch(Type::Iterable, itr.value_type()));
    }
    let mut out = Vec::new();
    collect_leaves(itr, 0, &mut out);
    Ok(out)
}

/// Returns every leaf, depth-first, as a flat list.
pub fn flatten(itr: &Value) -> Result<Value> {
    Ok(Value::Vec(leaves(itr)?.into_iter().map(|(_, v)| v).collect()))
}

fn flatten_pairs(itr: &Value) -> Result<Vec<(Key, Value)>> {
    let mut out = Vec::new();
    for (k0, v0) in entries(itr)? {
        if v0.is_iterable() {
            for (k1, v1) in flatten_pairs(&v0)? {
                out.push((Key::from(format!("{k0}.{k1}")), v1));
            }
        } else {
            out.push((k0, v0));
        }
    }
    Ok(out)
}

/// Flattens nested maps into one map with dot-joined keys.
///
/// `{"a": {"b": 1}}` becomes `{"a.b": 1}`.
pub fn flatten_assoc(itr: &Value) -> Result<Value> {
    Ok(Value::Map(flatten_pairs(itr)?.into_iter().collect()))
}

/// Maps each value with `f` and concatenates the results.
///
/// List results are spliced in, nil results are dropped.
pub fn flat_map(itr: &Value, f: &Callable) -> Result<Value> {
    let mut out = Vec::new();
    for (k, v) in entries(itr)? {
        match visit(f, &v, &k)? {
            Value::Nil => {}
            r if r.is_iterable() => out.extend(values_of(&r)?),
            r => out.push(r),
        }
    }
    Ok(Value::Vec(out.into_iter().collect()))
}

fn group_key(g: &Value) -> Key {
    match g {
        Value::Nil | Value::Bool(false) => Key::from(""),
        other => other.as_key().unwrap_or_else(|| Key::from(other.to_string())),
    }
}

/// Groups values into lists keyed by `f(value, key)`.
///
/// With `depth > 0`, nested lists and maps are grouped recursively under
/// their own key instead of being passed to `f`.
pub fn group(itr: &Value, f: &Callable, depth: u32) -> Result<Value> {
    let mut out: DMap<Key, Value> = DMap::new();
    for (k, v) in entries(itr)? {
        if v.is_iterable() && depth > 0 {
            out = out.insert(k, group(&v, f, depth - 1)?);
            continue;
        }
        let key = group_key(&visit(f, &v, &k)?);
        let bucket = match out.get(&key) {
            Some(Value::Vec(items)) => items.push_back(v),
            _ => DVec::new().push_back(v),
        };
        out = out.insert(key, Value::Vec(bucket));
    }
    Ok(Value::Map(out))
}

/// Groups leaves by nesting depth, starting at 0.
pub fn group_by_depth(itr: &Value) -> Result<Value> {
    let mut levels: BTreeMap<i64, Vec<Value>> = BTreeMap::new();
    for (depth, v) in leaves(itr)? {
        levels.entry(depth).or_default().push(v);
    }
    Ok(Value::Map(
        levels
            .into_iter()
            .map(|(d, vs)| (Key::Int(d), Value::from(vs)))
            .collect(),
    ))
}

fn visit_parents(
    node: &Value,
    depth: i64,
    parent: Option<&Key>,
    pointer: &str,
    out: &mut BTreeMap<i64, DMap<Key, Value>>,
) {
    let Some(pairs) = node.entries() else {
        return;
    };
    for (k, v) in pairs {
        if !v.is_iterable() {
            continue;
        }
        if let (Some(parent), Some(name)) = (parent, k.as_str()) {
            if name == pointer {
                let child_keys: Vec<Value> = v.entries().into_iter().flatten().map(|(ck, _)| ck.into()).collect();
                let level = out.entry(depth / 2).or_default();
                *level = level.insert(parent.clone(), Value::from(child_keys));
            }
        }
        visit_parents(&v, depth + 1, Some(&k), pointer, out);
    }
}

/// Maps each parent node to the keys of its children, grouped by tree level.
///
/// A node's children live under the `pointer` key. The result is keyed by
/// level (0 for top-level parents), then by parent key.
pub fn group_by_parent(itr: &Value, pointer: &str) -> Result<Value> {
    if !itr.is_iterable() {
        return Err(Error::type_mismatch(Type::Iterable, itr.value_type()));
    }
    let mut levels = BTreeMap::new();
    visit_parents(itr, 0, None, pointer, &mut levels);
    Ok(Value::Map(
        levels
            .into_iter()
            .map(|(level, parents)| (Key::Int(level), Value::Map(parents)))
            .collect(),
    ))
}

/// Swaps rows and columns.
///
/// Scalar rows are appended under the next free integer key.
pub fn transpose(itr: &Value) -> Result<Value> {
    let mut out: DMap<Key, Value> = DMap::new();
    for (k0, v0) in entries(itr)? {
        if v0.is_iterable() {
            for (k1, v1) in entries(&v0)? {
                let row = out.get(&k1).and_then(Value::as_map).cloned().unwrap_or_default();
                out = out.insert(k1, Value::Map(row.insert(k0.clone(), v1)));
            }
        } else {
            let next = match out
                .keys()
                .filter_map(|k| match k {
                    Key::Int(n) => Some(*n),
                    Key::Str(_) => None,
                })
                .max()
            {
                Some(n) => n.checked_add(1).ok_or_else(|| {
                    Error::invalid_argument("transpose", format!("no integer key follows {n}"))
                })?,
                None => 0,
            };
            out = out.insert(Key::Int(next), v0);
        }
    }
    let rows: DMap<Key, Value> = out.iter().map(|(k, v)| (k.clone(), normalize(v.clone()))).collect();
    Ok(normalize(Value::Map(rows)))
}

// =============================================================================
// Membership and paths
// =============================================================================

/// Returns true if any value equals `needle`.
pub fn has_value(itr: &Value, needle: &Value) -> Result<bool> {
    Ok(values_of(itr)?.iter().any(|v| v == needle))
}

/// Returns true if `key` is present with a non-nil value.
pub fn has_key(itr: &Value, key: &Value) -> Result<bool> {
    if !itr.is_iterable() {
        return Err(Error::type_mismatch(Type::Iterable, itr.value_type()));
    }
    Ok(key
        .as_key()
        .and_then(|k| itr.child(&k))
        .is_some_and(|v| !v.is_nil()))
}

fn lookup_path<'a>(data: &'a Value, keys: &[Value]) -> Option<&'a Value> {
    keys.iter().try_fold(data, |current, key| {
        current.child(&key.as_key()?).filter(|v| !v.is_nil())
    })
}

/// Returns true if the whole key path exists with a non-nil value.
pub fn has_keys(itr: &Value, keys: &[Value]) -> Result<bool> {
    if !itr.is_iterable() {
        return Err(Error::type_mismatch(Type::Iterable, itr.value_type()));
    }
    Ok(lookup_path(itr, keys).is_some())
}

/// Returns the value at a key path, or `default` when any step is missing.
#[must_use]
pub fn get_in(data: &Value, keys: &[Value], default: Value) -> Value {
    lookup_path(data, keys).cloned().unwrap_or(default)
}

fn leaf_value(val: &Value, old: Value, key: &Key) -> Result<Value> {
    match val {
        Value::Fn(f) => f.call(&[old, Value::from(key.clone())]),
        other => Ok(other.clone()),
    }
}

fn put(node: &Value, key: Key, value: Value) -> Value {
    if let (Value::Vec(v), Key::Int(i)) = (node, &key) {
        let index = usize::try_from(*i).ok();
        if let Some(updated) = index.and_then(|i| v.update(i, value.clone())) {
            return Value::Vec(updated);
        }
        if index == Some(v.len()) {
            return Value::Vec(v.push_back(value));
        }
    }
    let map: DMap<Key, Value> = node.entries().into_iter().flatten().collect();
    Value::Map(map.insert(key, value))
}

fn set_in(node: &Value, path: &[Key], val: &Value, create: bool, full: &str) -> Result<Value> {
    let Some((key, rest)) = path.split_first() else {
        return Ok(node.clone());
    };
    let empty = Value::Map(DMap::new());
    let node = match node {
        n if n.is_iterable() => n,
        _ if create => &empty,
        _ => return Err(Error::key_not_found(full)),
    };
    let existing = node.child(key).filter(|v| !v.is_nil());
    if existing.is_none() && !create {
        return Err(Error::key_not_found(full));
    }
    let child = if rest.is_empty() {
        leaf_value(val, existing.cloned().unwrap_or(Value::Nil), key)?
    } else {
        set_in(existing.unwrap_or(&empty), rest, val, create, full)?
    };
    Ok(put(node, key.clone(), child))
}

fn path_string(path: &[Key]) -> String {
    path.iter().map(ToString::to_string).collect::<Vec<_>>().join(".")
}

/// Replaces the value at an existing key path.
///
/// If `val` is callable it is called with `(old value, last key)`. Fails with
/// `KeyNotFound` when any step of the path is missing.
pub fn update(itr: &Value, keys: &[Value], val: &Value) -> Result<Value> {
    let path = to_keys(keys, "update")?;
    if path.is_empty() {
        return Err(Error::invalid_argument("update", "empty key path"));
    }
    set_in(itr, &path, val, false, &path_string(&path))
}

/// Sets the value at a key path, creating missing maps along the way.
///
/// Scalars in the middle of the path are replaced by maps.
pub fn assign(itr: &Value, keys: &[Value], val: &Value) -> Result<Value> {
    let path = to_keys(keys, "assign")?;
    if path.is_empty() {
        return Err(Error::invalid_argument("assign", "empty key path"));
    }
    set_in(itr, &path, val, true, &path_string(&path))
}

// =============================================================================
// Lists
// =============================================================================

/// Concatenates lists and maps.
///
/// Integer keys are renumbered in order and string keys from later inputs
/// overwrite earlier ones. A result keyed exactly `0..n` is a list.
pub fn merge(inputs: &[Value]) -> Result<Value> {
    let mut out: DMap<Key, Value> = DMap::new();
    let mut next = 0i64;
    for input in inputs {
        for (k, v) in entries(input)? {
            match k {
                Key::Int(_) => {
                    out = out.insert(Key::Int(next), v);
                    next += 1;
                }
                key @ Key::Str(_) => out = out.insert(key, v),
            }
        }
    }
    Ok(normalize(Value::Map(out)))
}

fn expect_vec<'a>(list: &'a Value) -> Result<&'a DVec<Value>> {
    list.as_vec()
        .ok_or_else(|| Error::type_mismatch(Type::Vec, list.value_type()))
}

/// Inserts `val` before position `index`.
///
/// A list `val` is spliced in element by element. Negative positions count
/// from the end; positions past the end append.
pub fn insert(list: &Value, index: i64, val: &Value) -> Result<Value> {
    let items = expect_vec(list)?;
    let len = len_i64(items.len());
    let at = if index < 0 { (len + index).max(0) } else { index.min(len) };
    let at = usize::try_from(at).unwrap_or(0);

    let spliced: Vec<Value> = match val {
        Value::Vec(v) => v.iter().cloned().collect(),
        other => vec![other.clone()],
    };
    let out: DVec<Value> = items
        .iter()
        .take(at)
        .cloned()
        .chain(spliced)
        .chain(items.iter().skip(at).cloned())
        .collect();
    Ok(Value::Vec(out))
}

/// Adds `val` to the front.
pub fn prepend(itr: &Value, val: &Value) -> Result<Value> {
    merge(&[Value::from(vec![val.clone()]), itr.clone()])
}

/// Adds `val` to the back.
pub fn append(itr: &Value, val: &Value) -> Result<Value> {
    merge(&[itr.clone(), Value::from(vec![val.clone()])])
}

/// Removes duplicate values, keeping the first occurrence.
pub fn unique(itr: &Value) -> Result<Value> {
    let mut seen = HashSet::new();
    let out: DVec<Value> = values_of(itr)?
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect();
    Ok(Value::Vec(out))
}

/// Takes entries from the front while `f` is truthy.
pub fn take_while(itr: &Value, f: &Callable) -> Result<Value> {
    let mut kept = Vec::new();
    for (k, v) in entries(itr)? {
        if !passes(f, &v, &k)? {
            break;
        }
        kept.push((k, v));
    }
    Ok(rebuild(itr, kept))
}

/// Takes entries from the back while `f` is truthy, keeping their order.
pub fn take_last_while(itr: &Value, f: &Callable) -> Result<Value> {
    let mut kept = Vec::new();
    for (k, v) in entries(itr)?.into_iter().rev() {
        if !passes(f, &v, &k)? {
            break;
        }
        kept.push((k, v));
    }
    kept.reverse();
    Ok(rebuild(itr, kept))
}

/// Takes the first `n` entries. A negative `n` drops that many from the end.
pub fn take(itr: &Value, n: i64) -> Result<Value> {
    let pairs = entries(itr)?;
    let len = len_i64(pairs.len());
    let end = if n < 0 { (len + n).max(0) } else { n.min(len) };
    let end = usize::try_from(end).unwrap_or(0);
    Ok(rebuild(itr, pairs.into_iter().take(end)))
}

/// Takes the last `n` entries.
pub fn take_last(itr: &Value, n: i64) -> Result<Value> {
    let pairs = entries(itr)?;
    let n = usize::try_from(n.max(0)).unwrap_or(0);
    let start = pairs.len().saturating_sub(n);
    Ok(rebuild(itr, pairs.into_iter().skip(start)))
}

/// Places `delimiter` between consecutive values.
pub fn intersperse(itr: &Value, delimiter: &Value) -> Result<Value> {
    let values = values_of(itr)?;
    let mut out = Vec::with_capacity(values.len() * 2);
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(delimiter.clone());
        }
        out.push(v);
    }
    Ok(Value::from(out))
}

/// Returns the first value, or nil when empty.
pub fn first(itr: &Value) -> Result<Value> {
    Ok(values_of(itr)?.into_iter().next().unwrap_or(Value::Nil))
}

/// Returns the last value, or nil when empty.
pub fn last(itr: &Value) -> Result<Value> {
    Ok(values_of(itr)?.pop().unwrap_or(Value::Nil))
}

/// Returns everything after the first entry.
pub fn tail(itr: &Value) -> Result<Value> {
    Ok(rebuild(itr, entries(itr)?.into_iter().skip(1)))
}

/// Returns the mean of the values.
pub fn average(itr: &Value) -> Result<Value> {
    let values = values_of(itr)?;
    for v in &values {
        crate::args::expect_number(v)?;
    }
    numbers::average(&values)
}

/// Returns the number of entries.
pub fn length(itr: &Value) -> Result<usize> {
    Ok(values_of(itr)?.len())
}

// =============================================================================
// Registered functions
// =============================================================================

/// Returns the `Iterables` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new(TypeHint::ITERABLES)
        .with_function("map", native_map)
        .with_function("mapDeep", native_map_deep)
        .with_function("filter", native_filter)
        .with_function("filterDeep", native_filter_deep)
        .with_function("reduce", native_reduce)
        .with_function("reduceDeep", native_reduce_deep)
        .with_function("reverse", native_reverse)
        .with_function("reverseDeep", native_reverse_deep)
        .with_function("flatten", native_flatten)
        .with_function("flattenAssoc", native_flatten_assoc)
        .with_function("flatMap", native_flat_map)
        .with_function("group", native_group)
        .with_function("groupByDepth", native_group_by_depth)
        .with_function("groupByParent", native_group_by_parent)
        .with_function("transpose", native_transpose)
        .with_function("hasValue", native_has_value)
        .with_function("hasKey", native_has_key)
        .with_function("hasKeys", native_has_keys)
        .with_function("insert", native_insert)
        .with_function("prepend", native_prepend)
        .with_function("append", native_append)
        .with_function("unique", native_unique)
        .with_function("takeWhile", native_take_while)
        .with_function("takeLastWhile", native_take_last_while)
        .with_function("take", native_take)
        .with_function("takeLast", native_take_last)
        .with_function("getIn", native_get_in)
        .with_function("update", native_update)
        .with_function("assign", native_assign)
        .with_function("intersperse", native_intersperse)
        .with_function("first", native_first)
        .with_function("last", native_last)
        .with_function("tail", native_tail)
        .with_function("average", native_average)
        .with_function("length", native_length)
}

/// A key path argument: a list of keys, or a single key.
fn path_arg(args: &[Value], index: usize, function: &str) -> Result<Vec<Value>> {
    let value = arg(args, index, function)?;
    if value.is_iterable() {
        values_of(value)
    } else {
        Ok(vec![value.clone()])
    }
}

fn with_callback(
    args: &[Value],
    function: &str,
    op: fn(&Value, &Callable) -> Result<Value>,
) -> Result<Value> {
    let itr = iterable_arg(args, 0, function)?;
    let f = callable_arg(args, 1, function)?;
    op(itr, f)
}

fn unary(args: &[Value], function: &str, op: fn(&Value) -> Result<Value>) -> Result<Value> {
    op(iterable_arg(args, 0, function)?)
}

/// Iterables: map
fn native_map(args: &[Value]) -> Result<Value> {
    with_callback(args, "map", map)
}

/// Iterables: mapDeep
fn native_map_deep(args: &[Value]) -> Result<Value> {
    with_callback(args, "mapDeep", map_deep)
}

/// Iterables: filter
fn native_filter(args: &[Value]) -> Result<Value> {
    with_callback(args, "filter", filter)
}

/// Iterables: filterDeep
fn native_filter_deep(args: &[Value]) -> Result<Value> {
    with_callback(args, "filterDeep", filter_deep)
}

/// Iterables: reduce
fn native_reduce(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "reduce")?;
    let f = callable_arg(args, 1, "reduce")?;
    reduce(itr, f, args.get(2).cloned().unwrap_or(Value::Nil))
}

/// Iterables: reduceDeep
fn native_reduce_deep(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "reduceDeep")?;
    let f = callable_arg(args, 1, "reduceDeep")?;
    reduce_deep(itr, f, args.get(2).cloned().unwrap_or(Value::Nil))
}

/// Iterables: reverse
fn native_reverse(args: &[Value]) -> Result<Value> {
    unary(args, "reverse", reverse)
}

/// Iterables: reverseDeep
fn native_reverse_deep(args: &[Value]) -> Result<Value> {
    unary(args, "reverseDeep", reverse_deep)
}

/// Iterables: flatten
fn native_flatten(args: &[Value]) -> Result<Value> {
    unary(args, "flatten", flatten)
}

/// Iterables: flattenAssoc
fn native_flatten_assoc(args: &[Value]) -> Result<Value> {
    unary(args, "flattenAssoc", flatten_assoc)
}

/// Iterables: flatMap
fn native_flat_map(args: &[Value]) -> Result<Value> {
    with_callback(args, "flatMap", flat_map)
}

/// Iterables: group
fn native_group(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "group")?;
    let f = callable_arg(args, 1, "group")?;
    let depth = opt_int_arg(args, 2, 0)?;
    group(itr, f, u32::try_from(depth.max(0)).unwrap_or(u32::MAX))
}

/// Iterables: groupByDepth
fn native_group_by_depth(args: &[Value]) -> Result<Value> {
    unary(args, "groupByDepth", group_by_depth)
}

/// Iterables: groupByParent
fn native_group_by_parent(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "groupByParent")?;
    group_by_parent(itr, opt_str_arg(args, 1, CHILD_POINTER)?)
}

/// Iterables: transpose
fn native_transpose(args: &[Value]) -> Result<Value> {
    unary(args, "transpose", transpose)
}

/// Iterables: hasValue
fn native_has_value(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "hasValue")?;
    Ok(Value::Bool(has_value(itr, arg(args, 1, "hasValue")?)?))
}

/// Iterables: hasKey
fn native_has_key(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "hasKey")?;
    Ok(Value::Bool(has_key(itr, arg(args, 1, "hasKey")?)?))
}

/// Iterables: hasKeys
fn native_has_keys(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "hasKeys")?;
    Ok(Value::Bool(has_keys(itr, &path_arg(args, 1, "hasKeys")?)?))
}

/// Iterables: insert
fn native_insert(args: &[Value]) -> Result<Value> {
    let list = arg(args, 0, "insert")?;
    let index = int_arg(args, 1, "insert")?;
    insert(list, index, arg(args, 2, "insert")?)
}

/// Iterables: prepend
fn native_prepend(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "prepend")?;
    prepend(itr, arg(args, 1, "prepend")?)
}

/// Iterables: append
fn native_append(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "append")?;
    append(itr, arg(args, 1, "append")?)
}

/// Iterables: unique
fn native_unique(args: &[Value]) -> Result<Value> {
    unary(args, "unique", unique)
}

/// Iterables: takeWhile
fn native_take_while(args: &[Value]) -> Result<Value> {
    with_callback(args, "takeWhile", take_while)
}

/// Iterables: takeLastWhile
fn native_take_last_while(args: &[Value]) -> Result<Value> {
    with_callback(args, "takeLastWhile", take_last_while)
}

/// Iterables: take
fn native_take(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "take")?;
    take(itr, int_arg(args, 1, "take")?)
}

/// Iterables: takeLast
fn native_take_last(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "takeLast")?;
    take_last(itr, int_arg(args, 1, "takeLast")?)
}

/// Iterables: getIn
fn native_get_in(args: &[Value]) -> Result<Value> {
    let data = arg(args, 0, "getIn")?;
    let keys = path_arg(args, 1, "getIn")?;
    let default = opt_arg(args, 2).cloned().unwrap_or(Value::Nil);
    Ok(get_in(data, &keys, default))
}

/// Iterables: update
fn native_update(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "update")?;
    let keys = path_arg(args, 1, "update")?;
    update(itr, &keys, arg(args, 2, "update")?)
}

/// Iterables: assign
fn native_assign(args: &[Value]) -> Result<Value> {
    let itr = arg(args, 0, "assign")?;
    let keys = path_arg(args, 1, "assign")?;
    assign(itr, &keys, arg(args, 2, "assign")?)
}

/// Iterables: intersperse
fn native_intersperse(args: &[Value]) -> Result<Value> {
    let itr = iterable_arg(args, 0, "intersperse")?;
    intersperse(itr, arg(args, 1, "intersperse")?)
}

/// Iterables: first
fn native_first(args: &[Value]) -> Result<Value> {
    unary(args, "first", first)
}

/// Iterables: last
fn native_last(args: &[Value]) -> Result<Value> {
    unary(args, "last", last)
}

/// Iterables: tail
fn native_tail(args: &[Value]) -> Result<Value> {
    unary(args, "tail", tail)
}

/// Iterables: average
fn native_average(args: &[Value]) -> Result<Value> {
    unary(args, "average", average)
}

/// Iterables: length
fn native_length(args: &[Value]) -> Result<Value> {
    Ok(Value::Int(len_i64(length(iterable_arg(args, 0, "length")?)?)))
}
