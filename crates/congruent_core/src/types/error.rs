//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParameterError`: Errors from modulus construction, parameter validation
//!   and the bounded parameter search
//!
//! A rejected parameter triple is *not* an error: [`crate::params::is_valid`]
//! returns `Ok(false)` and the caller branches on it.

use thiserror::Error;

/// Categorised parameter errors.
///
/// Every variant is fatal for the operation that raised it and carries the
/// values needed to diagnose the failure (which parameter, which bound).
///
/// # Variants
/// - `InvalidModulus`: The modulus was zero or negative
/// - `BoundedSearchExhausted`: The search hit its iteration bound
/// - `InvariantViolation`: A search result failed re-validation
///
/// # Examples
/// ```
/// use congruent_core::types::ParameterError;
///
/// let err = ParameterError::InvalidModulus { modulus: 0 };
/// assert_eq!(format!("{}", err), "Invalid modulus 0: must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The modulus was zero or negative.
    #[error("Invalid modulus {modulus}: must be positive")]
    InvalidModulus {
        /// The rejected modulus
        modulus: i64,
    },

    /// The parameter search exceeded its iteration bound without finding a
    /// full-period pair.
    #[error(
        "Parameter search for modulus {modulus} exhausted after {max_iterations} iterations \
         (started at a = {a_start}, b = {b_start})"
    )]
    BoundedSearchExhausted {
        /// Modulus being searched
        modulus: i64,
        /// Multiplier the search started from
        a_start: i64,
        /// Increment the search started from
        b_start: i64,
        /// Iteration bound that was reached
        max_iterations: usize,
    },

    /// A pair returned by the search failed the final full-period check.
    #[error("Invariant violation: searched pair a = {a}, b = {b} is not full-period for modulus {modulus}")]
    InvariantViolation {
        /// Multiplier returned by the search
        a: i64,
        /// Increment returned by the search
        b: i64,
        /// Modulus being searched
        modulus: i64,
    },
}
