//! Integration tests for Layer 1: Helpers
//!
//! Tests for the helper modules through their typed API and their registered
//! native functions.

mod iterables;
mod numbers;
