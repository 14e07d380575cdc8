//! Integer arithmetic used by the validator and the generators.
//!
//! This module provides:
//! - [`gcd`]: Greatest common divisor for any primitive integer
//! - [`distinct_prime_factors`]: Trial division plus Pollard's rho, returning each prime once
//! - [`mod_inverse`]: Modular inverse via the extended Euclidean algorithm
//! - [`mul_add_mod`]: `(a·x + b) mod m` evaluated without overflow

pub mod number_theory;

pub use number_theory::{distinct_prime_factors, gcd, mod_inverse, mul_add_mod};
