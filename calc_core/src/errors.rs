//! # Error Types
//!
//! Structured error types for calc_core. Errors are plain data: they can be
//! matched on, serialized to JSON, and shown to a user without losing the
//! context of which operation and which operand caused them.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divisor(divisor: f64) -> CalcResult<f64> {
//!     if divisor == 0.0 {
//!         return Err(CalcError::division_by_zero("divide", 1));
//!     }
//!     Ok(divisor)
//! }
//!
//! let err = checked_divisor(0.0).unwrap_err();
//! assert!(err.is_recoverable());
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A divisor operand was zero.
    ///
    /// `operand_index` is the position of the zero operand in the call's
    /// input (for complex division it is always 1).
    #[error("Division by zero is not allowed: {operation} operand {operand_index} is zero")]
    DivisionByZero {
        operation: String,
        operand_index: usize,
    },

    /// An argument is invalid (wrong type, out of the function's domain, too few operands)
    #[error("Invalid argument for '{field}': {value} - {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>, operand_index: usize) -> Self {
        CalcError::DivisionByZero {
            operation: operation.into(),
            operand_index,
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Division by zero is reported as a value the caller can continue from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::DivisionByZero { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
