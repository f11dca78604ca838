//! Error types for vector and matrix operations.
//!
//! Only two things can go wrong, and both happen at the call site: a literal
//! constructor gets the wrong number of values, or an index falls outside 0-2.
//! Arithmetic never fails (it follows IEEE-754, so dividing by a zero component
//! gives infinity or NaN) and equality never fails.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidArgument`](IsometryError::InvalidArgument) | `from_slice` / `TryFrom<&[f64]>` with the wrong length |
//! | [`OutOfRange`](IsometryError::OutOfRange) | `get`, `set`, `get_mut`, `row`, `row_mut`, `col` |
//!
//! ```
//! use isometry_core::Vector3;
//!
//! let err = Vector3::from_slice(&[1.0, 2.0]).unwrap_err();
//! assert!(err.is_invalid_argument());
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid argument to Vector3::from_slice: expected 3 values, got 2"
//! );
//! ```

use thiserror::Error;

/// Unified error type for the vector and matrix types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsometryError {
    /// A literal constructor received the wrong number of values.
    #[error("Invalid argument to {operation}: expected {expected} values, got {actual}")]
    InvalidArgument {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// A component, row, or column index outside 0-2.
    #[error("Index out of range in {operation}: index {index} out of bounds (valid range: 0-2)")]
    OutOfRange { operation: String, index: usize },
}

/// Convenience alias for `Result<T, IsometryError>`.
pub type IsometryResult<T> = Result<T, IsometryError>;

impl IsometryError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(operation: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            expected,
            actual,
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(operation: &str, index: usize) -> Self {
        Self::OutOfRange {
            operation: operation.to_string(),
            index,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
