//! Error types for Dash.
//!
//! Uses `thiserror` for ergonomic error definition. Helpers and the facade share
//! one error type so failures propagate through dispatch unchanged.

use thiserror::Error;

use crate::types::Type;

/// Result alias used throughout Dash.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Dash operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unresolved operation error.
    #[must_use]
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedOperation(name.into()))
    }

    /// Creates an invalid argument error for the named function.
    #[must_use]
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            function: function.into(),
            message: message.into(),
        })
    }

    /// Creates an empty input error for the named operation.
    #[must_use]
    pub fn empty_input(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyInput(name.into()))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: impl Into<String>, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            expected: expected.into(),
            actual,
        })
    }

    /// Creates a key-not-found error for a key path.
    #[must_use]
    pub fn key_not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(path.into()))
    }

    /// Returns true if this error reports an unresolved operation.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self.kind, ErrorKind::UnresolvedOperation(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// No helper module, alias, or native namespace provides the operation.
    #[error("unresolved operation: {0}")]
    UnresolvedOperation(String),

    /// A helper received input outside its domain.
    #[error("invalid argument to {function}: {message}")]
    InvalidArgument {
        /// The helper that rejected the input.
        function: String,
        /// Description of the problem.
        message: String,
    },

    /// A facade call had no subject to infer a type hint from.
    #[error("empty input: {0} requires at least one argument")]
    EmptyInput(String),

    /// Type mismatch during argument extraction.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A key path did not exist in a nested structure.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
