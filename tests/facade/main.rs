//! Integration tests for Layer 2: Facade
//!
//! Tests for name resolution, dispatch through the facade, and deferred
//! sequences.

mod dispatch;
