//! Helper modules for Dash.
//!
//! Each module is a namespace of pure functions over one family of shapes.
//! Every function is usable directly from Rust and is also registered by name
//! in a [`HelperModule`] so the facade can dispatch to it:
//! - [`strings`] - Case conversion, searching, truncation
//! - [`numbers`] - Arithmetic, roman numerals, statistics
//! - [`iterables`] - Mapping, filtering, grouping, flattening, nested paths
//! - [`compositions`] - Function composition
//! - [`conditions`] - Predicates
//! - [`misc`] - UUID generation
//!
//! The first argument of every registered function is the subject being
//! transformed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod compositions;
pub mod conditions;
pub mod iterables;
pub mod misc;
pub mod module;
pub mod numbers;
pub mod strings;

pub use module::HelperModule;

/// Returns every builtin helper module in registration order.
///
/// The order is alphabetical by module name and is the order the facade
/// scans when no type-specific module exports a requested name.
#[must_use]
pub fn builtin_modules() -> Vec<HelperModule> {
    vec![
        compositions::module(),
        conditions::module(),
        iterables::module(),
        misc::module(),
        numbers::module(),
        strings::module(),
    ]
}
