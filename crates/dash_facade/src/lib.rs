//! Name resolution, dispatch, and deferred chains for Dash.
//!
//! This crate provides:
//! - [`Registry`] - Ordered helper modules built from a [`ModuleSource`]
//! - [`NativeTable`] - Subject-first `str_*` and `array_*` functions
//! - [`Resolver`] - Maps an operation name and type hint to a function
//! - [`Dash`] - The facade: `call(name, args)` with the subject first
//! - [`Sequence`] - A value with a queue of operations replayed on demand

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod facade;
pub mod native;
pub mod registry;
pub mod resolver;
pub mod sequence;

pub use config::ResolverConfig;
pub use facade::{Dash, Dispatchable};
pub use native::NativeTable;
pub use registry::{BuiltinModules, ModuleSource, Registry};
pub use resolver::{Origin, Resolved, Resolver};
pub use sequence::{Operation, Sequence};
