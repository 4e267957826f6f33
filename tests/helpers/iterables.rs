//! Integration tests for the Iterables module

use dash_foundation::{Callable, Closure, ErrorKind, Key, Value};
use dash_helpers::iterables;

fn callback(name: &'static str, f: fn(&Value, &Value) -> Value) -> Callable {
    Callable::Closure(Closure::new(name, move |args: &[Value]| {
        Ok(f(&args[0], args.get(1).unwrap_or(&Value::Nil)))
    }))
}

fn is_even() -> Callable {
    callback("isEven", |v, _| Value::Bool(v.as_int().is_some_and(|n| n % 2 == 0)))
}

fn above_two() -> Callable {
    callback("aboveTwo", |v, _| Value::Bool(v.as_int().is_some_and(|n| n > 2)))
}

fn list(items: &[i64]) -> Value {
    Value::from(items.to_vec())
}

fn map(pairs: &[(&str, Value)]) -> Value {
    Value::map_from(pairs.iter().map(|(k, v)| (*k, v.clone())))
}

// =============================================================================
// Mapping and filtering
// =============================================================================

#[test]
fn map_passes_value_and_key() {
    let key_of = callback("keyOf", |_, k| k.clone());
    let out = iterables::map(&map(&[("a", Value::Int(1)), ("b", Value::Int(2))]), &key_of).unwrap();
    assert_eq!(out, map(&[("a", Value::from("a")), ("b", Value::from("b"))]));
}

#[test]
fn map_deep_reaches_leaves() {
    let inc = callback("inc", |v, _| Value::Int(v.as_int().unwrap_or(0) + 1));
    let nested = Value::from(vec![Value::Int(1), list(&[2, 3])]);
    let out = iterables::map_deep(&nested, &inc).unwrap();
    assert_eq!(out, Value::from(vec![Value::Int(2), list(&[3, 4])]));
}

#[test]
fn filter_reindexes_lists_and_keeps_map_keys() {
    assert_eq!(iterables::filter(&list(&[1, 2, 3, 4]), &is_even()).unwrap(), list(&[2, 4]));
    let m = map(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
    assert_eq!(iterables::filter(&m, &is_even()).unwrap(), map(&[("b", Value::Int(2))]));
}

#[test]
fn filter_deep_keeps_containers() {
    let nested = Value::from(vec![Value::Int(1), list(&[2, 3, 4])]);
    let out = iterables::filter_deep(&nested, &is_even()).unwrap();
    assert_eq!(out, Value::from(vec![list(&[2, 4])]));
}

#[test]
fn reduce_and_reduce_deep() {
    let plus = Callable::Closure(Closure::new("plus", |args: &[Value]| {
        dash_helpers::numbers::add(&args[0], &args[1])
    }));
    assert_eq!(iterables::reduce(&list(&[1, 2, 3]), &plus, Value::Int(0)).unwrap(), Value::Int(6));
    let nested = Value::from(vec![Value::Int(1), Value::from(vec![Value::Int(2), list(&[3])])]);
    assert_eq!(iterables::reduce_deep(&nested, &plus, Value::Int(10)).unwrap(), Value::Int(16));
}

#[test]
fn scalars_are_rejected() {
    let err = iterables::map(&Value::Int(1), &is_even()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

// =============================================================================
// Ordering and shape
// =============================================================================

#[test]
fn reverse_returns_a_list() {
    assert_eq!(iterables::reverse(&list(&[1, 2, 3])).unwrap(), list(&[3, 2, 1]));
    let m = map(&[("a", Value::Int(1)), ("b", Value::Int(2))]);
    assert_eq!(iterables::reverse(&m).unwrap(), list(&[2, 1]));

    let nested = Value::from(vec![list(&[1, 2]), list(&[3, 4])]);
    assert_eq!(
        iterables::reverse_deep(&nested).unwrap(),
        Value::from(vec![list(&[4, 3]), list(&[2, 1])])
    );
}

#[test]
fn flatten_variants() {
    let nested = Value::from(vec![Value::Int(1), Value::from(vec![Value::Int(2), list(&[3])]), Value::Int(4)]);
    assert_eq!(iterables::flatten(&nested).unwrap(), list(&[1, 2, 3, 4]));

    let tree = map(&[
        ("a", map(&[("b", Value::Int(1)), ("c", map(&[("d", Value::Int(2))]))])),
        ("e", Value::Int(3)),
    ]);
    assert_eq!(
        iterables::flatten_assoc(&tree).unwrap(),
        map(&[("a.b", Value::Int(1)), ("a.c.d", Value::Int(2)), ("e", Value::Int(3))])
    );
}

#[test]
fn flat_map_splices_and_drops_nil() {
    let dup = callback("dup", |v, _| {
        if v.as_int() == Some(0) { Value::Nil } else { Value::from(vec![v.clone(), v.clone()]) }
    });
    assert_eq!(iterables::flat_map(&list(&[1, 0, 2]), &dup).unwrap(), list(&[1, 1, 2, 2]));
}

#[test]
fn grouping() {
    let parity = callback("parity", |v, _| Value::Int(v.as_int().unwrap_or(0) % 2));
    let out = iterables::group(&list(&[1, 2, 3, 4]), &parity, 0).unwrap();
    assert_eq!(
        out,
        Value::map_from([(Key::Int(0), list(&[2, 4])), (Key::Int(1), list(&[1, 3]))])
    );

    let nested = Value::from(vec![Value::Int(1), Value::from(vec![Value::Int(2), list(&[3])]), Value::Int(4)]);
    assert_eq!(
        iterables::group_by_depth(&nested).unwrap(),
        Value::map_from([
            (Key::Int(0), list(&[1, 4])),
            (Key::Int(1), list(&[2])),
            (Key::Int(2), list(&[3])),
        ])
    );
}

#[test]
fn group_by_parent_levels() {
    let tree = map(&[(
        "root",
        map(&[(
            "children",
            map(&[
                ("a", map(&[("children", map(&[("x", Value::Int(1))]))])),
                ("b", Value::Int(2)),
            ]),
        )]),
    )]);
    let out = iterables::group_by_parent(&tree, iterables::CHILD_POINTER).unwrap();
    assert_eq!(
        out,
        Value::map_from([
            (Key::Int(0), map(&[("root", Value::from(vec!["a", "b"]))])),
            (Key::Int(1), map(&[("a", Value::from(vec!["x"]))])),
        ])
    );
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let grid = Value::from(vec![list(&[1, 2]), list(&[3, 4])]);
    assert_eq!(
        iterables::transpose(&grid).unwrap(),
        Value::from(vec![list(&[1, 3]), list(&[2, 4])])
    );
}

// =============================================================================
// Membership and paths
// =============================================================================

#[test]
fn membership() {
    let m = map(&[("a", Value::Int(1)), ("n", Value::Nil)]);
    assert!(iterables::has_value(&m, &Value::Int(1)).unwrap());
    assert!(iterables::has_key(&m, &Value::from("a")).unwrap());
    assert!(!iterables::has_key(&m, &Value::from("n")).unwrap());
    assert!(iterables::has_key(&list(&[5]), &Value::Int(0)).unwrap());
}

#[test]
fn key_paths() {
    let data = map(&[("a", map(&[("b", list(&[10, 20]))]))]);
    let path = [Value::from("a"), Value::from("b"), Value::Int(1)];
    assert!(iterables::has_keys(&data, &path).unwrap());
    assert_eq!(iterables::get_in(&data, &path, Value::Nil), Value::Int(20));
    assert_eq!(
        iterables::get_in(&data, &[Value::from("a"), Value::from("x")], Value::from("none")),
        Value::from("none")
    );
}

#[test]
fn update_requires_existing_path() {
    let data = map(&[("a", map(&[("b", Value::Int(1))]))]);
    let inc = callback("inc", |v, _| Value::Int(v.as_int().unwrap_or(0) + 1));
    let out = iterables::update(&data, &[Value::from("a"), Value::from("b")], &Value::Fn(inc)).unwrap();
    assert_eq!(out, map(&[("a", map(&[("b", Value::Int(2))]))]));

    let err = iterables::update(&data, &[Value::from("a"), Value::from("x")], &Value::Int(0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::KeyNotFound("a.x".to_string()));
}

#[test]
fn assign_creates_missing_maps() {
    let empty = Value::map_from(Vec::<(Key, Value)>::new());
    let out = iterables::assign(&empty, &[Value::from("a"), Value::from("b")], &Value::Int(5)).unwrap();
    assert_eq!(out, map(&[("a", map(&[("b", Value::Int(5))]))]));
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn merge_renumbers_int_keys() {
    assert_eq!(iterables::merge(&[list(&[1, 2]), list(&[3])]).unwrap(), list(&[1, 2, 3]));
    let merged = iterables::merge(&[
        map(&[("a", Value::Int(1))]),
        map(&[("a", Value::Int(2)), ("b", Value::Int(3))]),
    ])
    .unwrap();
    assert_eq!(merged, map(&[("a", Value::Int(2)), ("b", Value::Int(3))]));
}

#[test]
fn insert_splices() {
    assert_eq!(iterables::insert(&list(&[1, 2, 3]), 1, &list(&[9, 8])).unwrap(), list(&[1, 9, 8, 2, 3]));
    assert_eq!(iterables::insert(&list(&[1, 2, 3]), -1, &Value::Int(0)).unwrap(), list(&[1, 2, 0, 3]));
    assert_eq!(iterables::insert(&list(&[1]), 10, &Value::Int(2)).unwrap(), list(&[1, 2]));
}

#[test]
fn prepend_append_unique() {
    assert_eq!(iterables::prepend(&list(&[2]), &Value::Int(1)).unwrap(), list(&[1, 2]));
    assert_eq!(iterables::append(&list(&[1]), &Value::Int(2)).unwrap(), list(&[1, 2]));
    assert_eq!(iterables::unique(&list(&[1, 2, 1, 3, 2])).unwrap(), list(&[1, 2, 3]));
}

#[test]
fn taking() {
    let items = list(&[1, 2, 3, 4]);
    assert_eq!(iterables::take(&items, 2).unwrap(), list(&[1, 2]));
    assert_eq!(iterables::take(&items, -1).unwrap(), list(&[1, 2, 3]));
    assert_eq!(iterables::take_last(&items, 2).unwrap(), list(&[3, 4]));
    assert_eq!(iterables::take_while(&items, &above_two()).unwrap(), list(&[]));
    assert_eq!(iterables::take_last_while(&items, &above_two()).unwrap(), list(&[3, 4]));
}

#[test]
fn accessors() {
    let items = list(&[1, 2, 3]);
    assert_eq!(iterables::intersperse(&items, &Value::Int(0)).unwrap(), list(&[1, 0, 2, 0, 3]));
    assert_eq!(iterables::first(&items).unwrap(), Value::Int(1));
    assert_eq!(iterables::last(&items).unwrap(), Value::Int(3));
    assert_eq!(iterables::first(&list(&[])).unwrap(), Value::Nil);
    assert_eq!(iterables::tail(&items).unwrap(), list(&[2, 3]));
    assert_eq!(iterables::average(&items).unwrap(), Value::Int(2));
    assert_eq!(iterables::length(&items).unwrap(), 3);
}
