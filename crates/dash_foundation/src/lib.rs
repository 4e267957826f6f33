//! Core types, values, and persistent collections for Dash.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value passed through every helper function
//! - [`Key`] - Map keys (integer or string)
//! - [`Callable`] - Native function pointers and composed closures
//! - [`Type`] and [`TypeHint`] - Shape descriptors used for errors and dispatch
//! - [`Error`] - Error kinds shared by the helpers and the facade
//! - Persistent collections ([`DVec`], [`DMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{DMap, DVec, Key};
pub use error::{Error, ErrorKind, Result};
pub use types::{Type, TypeHint};
pub use value::{Callable, Closure, NativeFn, Value};
