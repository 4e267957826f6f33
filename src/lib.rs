//! Dash - Functional utility helpers dispatched by name
//!
//! This crate re-exports all layers of Dash for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: dash_facade     — Registry, Resolver, native table, Dash facade, Sequence
//! Layer 1: dash_helpers    — Strings, Numbers, Iterables, Compositions, Conditions, Misc
//! Layer 0: dash_foundation — Core types (Value, Key, Callable, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use dash::{Dash, Sequence, Value};
//!
//! let dash = Dash::global();
//! assert_eq!(dash.call("snakeCase", &["fooBar".into()]).unwrap(), Value::from("foo_bar"));
//!
//! let total = Sequence::from(5).then("add", [1]).then("multiply", [10]).result();
//! assert_eq!(total.unwrap(), Value::Int(60));
//! ```

pub use dash_facade as facade;
pub use dash_foundation as foundation;
pub use dash_helpers as helpers;

pub use dash_facade::{Dash, Dispatchable, ResolverConfig, Sequence};
pub use dash_foundation::{Callable, Error, ErrorKind, Key, Result, Value};
