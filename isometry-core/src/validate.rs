//! Argument checks shared by the vector and matrix types.
//!
//! Every rejected index or literal length is logged at `debug` level before the
//! error is returned, so a caller that swallows the `Err` still leaves a trace.

use crate::constants::DIMENSION;
use crate::{IsometryError, IsometryResult};

/// Accepts indices 0, 1 and 2.
pub fn validate_index(operation: &str, index: usize) -> IsometryResult<usize> {
    if index < DIMENSION {
        return Ok(index);
    }

    log::debug!("{}: rejected index {}", operation, index);
    Err(IsometryError::out_of_range(operation, index))
}

/// Accepts a literal of exactly `N` values and copies it into an array.
pub fn validate_literal<const N: usize>(
    operation: &str,
    values: &[f64],
) -> IsometryResult<[f64; N]> {
    match <[f64; N]>::try_from(values) {
        Ok(array) => Ok(array),
        Err(_) => {
            log::debug!(
                "{}: rejected literal of {} values (expected {})",
                operation,
                values.len(),
                N
            );
            Err(IsometryError::invalid_argument(operation, N, values.len()))
        }
    }
}
