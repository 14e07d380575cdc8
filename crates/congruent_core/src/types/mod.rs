//! Core value and error types.
//!
//! This module provides:
//! - `modulus`: A validated, strictly positive modulus
//! - `parameters`: The `(a, b, m)` triple of a linear congruential generator
//! - `error`: Structured error types for validation and search
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Modulus`] from `modulus`
//! - [`GeneratorParameters`] from `parameters`
//! - [`ParameterError`] from `error`

pub mod error;
pub mod modulus;
pub mod parameters;

// Re-export commonly used types at module level
pub use error::ParameterError;
pub use modulus::Modulus;
pub use parameters::GeneratorParameters;
