//! Integration tests for Value types
//!
//! Tests Value enum variants, equality, hashing, display, and type hints.

use dash_foundation::{Callable, Closure, DMap, DVec, Key, NativeFn, Type, TypeHint, Value};
use std::collections::HashSet;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert!(!v.is_truthy());
    assert_eq!(v.value_type(), Type::Nil);
}

#[test]
fn value_bool() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert_eq!(Value::from(true).as_bool(), Some(true));
}

#[test]
fn value_int() {
    let v = Value::from(42);
    assert!(v.is_truthy());
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_float(), None);
    assert_eq!(v.as_number(), Some(42.0));
}

#[test]
fn value_float() {
    let v = Value::from(2.5);
    assert_eq!(v.as_float(), Some(2.5));
    assert_eq!(v.as_int(), None);
    assert_eq!(v.value_type(), Type::Float);
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert!(Value::Int(0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn value_string() {
    let v = Value::from("hello");
    assert_eq!(v.as_str(), Some("hello"));
    assert_eq!(Value::from(String::from("hello")), v);
}

#[test]
fn value_from_vec() {
    let v = Value::from(vec![1, 2, 3]);
    let list = v.as_vec().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::Int(2)));
}

#[test]
fn value_from_option() {
    assert_eq!(Value::from(Some(1)), Value::Int(1));
    assert_eq!(Value::from(None::<i64>), Value::Nil);
}

#[test]
fn value_map_from_pairs() {
    let v = Value::map_from([("b", Value::Int(2)), ("a", Value::Int(1))]);
    let map = v.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Key::from("a")), Some(&Value::Int(1)));
}

// =============================================================================
// Type Hints
// =============================================================================

#[test]
fn type_hints_by_shape() {
    assert_eq!(Value::from(vec![1]).type_hint(), TypeHint::Iterable);
    assert_eq!(Value::map_from([("a", Value::Nil)]).type_hint(), TypeHint::Iterable);
    assert_eq!(Value::Int(1).type_hint(), TypeHint::Number);
    assert_eq!(Value::Float(1.5).type_hint(), TypeHint::Number);
    assert_eq!(Value::from("x").type_hint(), TypeHint::String);
    assert_eq!(Value::Nil.type_hint(), TypeHint::Unknown);
    assert_eq!(Value::Bool(true).type_hint(), TypeHint::Unknown);
}

#[test]
fn type_hint_module_names() {
    assert_eq!(TypeHint::Iterable.module_name(), "Iterables");
    assert_eq!(TypeHint::Number.module_name(), "Numbers");
    assert_eq!(TypeHint::String.module_name(), "Strings");
    assert_eq!(TypeHint::Unknown.module_name(), "Strings");
}

#[test]
fn type_accepts() {
    assert!(Type::Number.accepts(Type::Int));
    assert!(Type::Number.accepts(Type::Float));
    assert!(Type::Iterable.accepts(Type::Map));
    assert!(Type::Any.accepts(Type::Fn));
    assert!(!Type::Int.accepts(Type::Float));
}

// =============================================================================
// Keys and Entries
// =============================================================================

#[test]
fn value_as_key() {
    assert_eq!(Value::Int(3).as_key(), Some(Key::Int(3)));
    assert_eq!(Value::from("k").as_key(), Some(Key::from("k")));
    assert_eq!(Value::Bool(true).as_key(), Some(Key::Int(1)));
    assert_eq!(Value::Float(2.0).as_key(), Some(Key::Int(2)));
    assert_eq!(Value::Float(2.5).as_key(), None);
    assert_eq!(Value::Nil.as_key(), None);
}

#[test]
fn int_keys_sort_before_string_keys() {
    let v = Value::map_from([
        (Key::from("a"), Value::Nil),
        (Key::Int(5), Value::Nil),
        (Key::Int(-1), Value::Nil),
    ]);
    let keys: Vec<Key> = v.as_map().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec![Key::Int(-1), Key::Int(5), Key::from("a")]);
}

#[test]
fn entries_of_list_are_indexed() {
    let v = Value::from(vec!["x", "y"]);
    assert_eq!(
        v.entries().unwrap(),
        vec![(Key::Int(0), Value::from("x")), (Key::Int(1), Value::from("y"))]
    );
    assert!(Value::Int(1).entries().is_none());
}

#[test]
fn child_lookup() {
    let list = Value::from(vec![10, 20]);
    assert_eq!(list.child(&Key::Int(1)), Some(&Value::Int(20)));
    assert_eq!(list.child(&Key::Int(-1)), None);
    assert_eq!(list.child(&Key::from("a")), None);

    let map = Value::map_from([("a", Value::Int(1))]);
    assert_eq!(map.child(&Key::from("a")), Some(&Value::Int(1)));
}

// =============================================================================
// Equality, Hashing, Display
// =============================================================================

#[test]
fn int_and_float_are_distinct() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert!(Value::Int(1) < Value::Float(1.5));
}

#[test]
fn values_hash_consistently() {
    let mut set = HashSet::new();
    set.insert(Value::from(vec![1, 2]));
    set.insert(Value::from(vec![1, 2]));
    set.insert(Value::Float(0.5));
    set.insert(Value::Float(0.5));
    assert_eq!(set.len(), 2);
}

#[test]
fn display_nested() {
    let v = Value::from(vec![Value::Int(1), Value::from("a"), Value::Nil]);
    assert_eq!(v.to_string(), "[1, a, nil]");
    let m = Value::map_from([("k", Value::Bool(true))]);
    assert_eq!(m.to_string(), "{k: true}");
}

// =============================================================================
// Callables
// =============================================================================

fn double(args: &[Value]) -> dash_foundation::Result<Value> {
    Ok(Value::Int(args[0].as_int().unwrap_or(0) * 2))
}

#[test]
fn native_callable() {
    let f = Callable::Native(NativeFn::new("double", double));
    assert_eq!(f.name(), "double");
    assert_eq!(f.call(&[Value::Int(4)]).unwrap(), Value::Int(8));
    assert_eq!(Value::from(f.clone()).as_fn(), Some(&f));
}

#[test]
fn closure_callable() {
    let offset = 10;
    let f = Callable::Closure(Closure::new("offset", move |args: &[Value]| {
        Ok(Value::Int(args[0].as_int().unwrap_or(0) + offset))
    }));
    assert_eq!(f.call(&[Value::Int(1)]).unwrap(), Value::Int(11));
    assert_eq!(f.to_string(), "<fn offset>");
}

#[test]
fn callables_compare_by_identity() {
    let a = Callable::Native(NativeFn::new("double", double));
    let b = Callable::Native(NativeFn::new("double", double));
    assert_eq!(a, b);

    let c = Callable::Closure(Closure::new("c", |_args: &[Value]| Ok(Value::Nil)));
    let d = Callable::Closure(Closure::new("c", |_args: &[Value]| Ok(Value::Nil)));
    assert_eq!(c, c.clone());
    assert_ne!(c, d);
}

#[test]
fn persistent_collections_convert() {
    let list: DVec<Value> = (1..=3).map(Value::Int).collect();
    assert_eq!(Value::from(list), Value::from(vec![1, 2, 3]));

    let map: DMap<Key, Value> = DMap::new().insert(Key::Int(0), Value::Nil);
    assert_eq!(Value::from(map).as_map().map(DMap::len), Some(1));
}
