//! Function composition helpers.
//!
//! These build closures over other callables, so they can be passed back into
//! higher-order helpers such as `map`.

use dash_foundation::{Callable, Closure, Error, Result, Type, Value};

use crate::args::{callable_arg, values_of};
use crate::module::HelperModule;

/// Composes functions right to left: `compose([f, g])(x) == f(g(x))`.
///
/// The innermost function receives every argument; the others receive the
/// previous result.
pub fn compose(fns: Vec<Callable>) -> Result<Callable> {
    if fns.is_empty() {
        return Err(Error::invalid_argument("compose", "no functions"));
    }
    let name = fns.iter().map(Callable::name).collect::<Vec<_>>().join(" . ");
    Ok(Callable::Closure(Closure::new(name, move |args| {
        let mut rev = fns.iter().rev();
        let mut acc = match rev.next() {
            Some(innermost) => innermost.call(args)?,
            None => Value::Nil,
        };
        for f in rev {
            acc = f.call(&[acc])?;
        }
        Ok(acc)
    })))
}

/// Composes functions left to right: `pipe([f, g])(x) == g(f(x))`.
pub fn pipe(mut fns: Vec<Callable>) -> Result<Callable> {
    fns.reverse();
    compose(fns)
}

/// Calls `f` with the elements of `args` as positional arguments.
pub fn apply(f: &Callable, args: &Value) -> Result<Value> {
    f.call(&values_of(args)?)
}

/// Returns a function that calls `f` with its arguments reversed.
#[must_use]
pub fn flip(f: Callable) -> Callable {
    let name = format!("flip({})", f.name());
    Callable::Closure(Closure::new(name, move |args| {
        let reversed: Vec<Value> = args.iter().rev().cloned().collect();
        f.call(&reversed)
    }))
}

// =============================================================================
// Registered functions
// =============================================================================

/// Returns the `Compositions` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new("Compositions")
        .with_function("compose", native_compose)
        .with_function("pipe", native_pipe)
        .with_function("apply", native_apply)
        .with_function("flip", native_flip)
}

fn callables(args: &[Value]) -> Result<Vec<Callable>> {
    args.iter()
        .map(|v| {
            v.as_fn()
                .cloned()
                .ok_or_else(|| Error::type_mismatch(Type::Fn, v.value_type()))
        })
        .collect()
}

/// Compositions: compose
fn native_compose(args: &[Value]) -> Result<Value> {
    Ok(Value::Fn(compose(callables(args)?)?))
}

/// Compositions: pipe
fn native_pipe(args: &[Value]) -> Result<Value> {
    Ok(Value::Fn(pipe(callables(args)?)?))
}

/// Compositions: apply
fn native_apply(args: &[Value]) -> Result<Value> {
    let f = callable_arg(args, 0, "apply")?;
    let list = args.get(1).cloned().unwrap_or_else(|| Value::from(Vec::<Value>::new()));
    apply(f, &list)
}

/// Compositions: flip
fn native_flip(args: &[Value]) -> Result<Value> {
    Ok(Value::Fn(flip(callable_arg(args, 0, "flip")?.clone())))
}
