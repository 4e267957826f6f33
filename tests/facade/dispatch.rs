//! Integration tests for facade dispatch
//!
//! Tests `Dash::call`, function values, and the `Dispatchable` trait.

use dash_facade::{Dash, Dispatchable, ResolverConfig};
use dash_foundation::{ErrorKind, Value};

#[test]
fn unresolved_operation() {
    let err = Dash::global().call("noSuchOp", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnresolvedOperation("noSuchOp".to_string()));
    assert_eq!(err.to_string(), "unresolved operation: noSuchOp");
}

#[test]
fn empty_arguments() {
    let err = Dash::global().call("length", &[]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyInput("length".to_string()));
}

#[test]
fn helper_errors_pass_through() {
    let dash = Dash::global();
    let err = dash.call("divide", &[Value::Int(1), Value::Int(0)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);

    let err = dash.call("romanize", &[Value::Int(4000)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { .. }));
}

#[test]
fn function_values_compose() {
    let dash = Dash::global();
    let snake = dash.function("snakeCase").unwrap();
    let pascal = dash.function("pascalCase").unwrap();
    let composed = dash.call("compose", &[pascal, snake]).unwrap();
    let out = dash
        .call("map", &[Value::from(vec!["fooBar", "a"]), composed])
        .unwrap();
    assert_eq!(out, Value::from(vec!["FooBar", "A"]));
}

#[test]
fn modules_only_configuration() {
    let dash = Dash::with_config(ResolverConfig::modules_only());
    assert!(dash.call("repeat", &["a".into(), Value::Int(2)]).unwrap_err().is_unresolved());
    assert_eq!(dash.call("camelCase", &["a_b".into()]).unwrap(), Value::from("aB"));
}

#[test]
fn native_table_functions() {
    let dash = Dash::global();
    assert_eq!(
        dash.call("pad", &["7".into(), Value::Int(3), "0".into(), "left".into()]).unwrap(),
        Value::from("007")
    );
    assert_eq!(
        dash.call("chunk", &[Value::from(vec![1, 2, 3]), Value::Int(2)]).unwrap(),
        Value::from(vec![Value::from(vec![1, 2]), Value::from(vec![3])])
    );
    assert_eq!(
        dash.call("product", &[Value::from(vec![2, 3, 4])]).unwrap(),
        Value::Int(24)
    );
}

fn run_all<D: Dispatchable>(target: &mut D, ops: &[(&str, Vec<Value>)]) -> Vec<D::Output> {
    ops.iter()
        .map(|(name, args)| target.invoke(name, args.clone()))
        .collect()
}

#[test]
fn dispatchable_is_generic() {
    let ops = [
        ("add", vec![Value::Int(1), Value::Int(2)]),
        ("snakeCase", vec![Value::from("aB")]),
    ];
    let mut dash = Dash::global();
    let results = run_all(&mut dash, &ops);
    assert_eq!(results[0], Ok(Value::Int(3)));
    assert_eq!(results[1], Ok(Value::from("a_b")));

    let mut seq = Dash::global().seq(Value::Int(1));
    let queued = run_all(&mut seq, &[("add", vec![Value::Int(2)]), ("multiply", vec![Value::Int(5)])]);
    assert_eq!(queued.len(), 2);
    assert_eq!(seq.result().unwrap(), Value::Int(15));
}
