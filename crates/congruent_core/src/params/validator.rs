//! Hull–Dobell full-period check.
//!
//! The recurrence `x ↦ (a·x + b) mod m` visits every residue of `m` exactly
//! once per cycle if and only if:
//!
//! 1. `gcd(b, m) = 1`
//! 2. `a − 1` is divisible by every prime factor of `m`
//! 3. `a − 1` is divisible by 4 whenever `m` is
//!
//! [`is_valid`] answers the yes/no question, [`diagnose`] lists every
//! condition that fails.

use crate::math::{distinct_prime_factors, gcd};
use crate::types::{Modulus, ParameterError};

/// A single failed Hull–Dobell condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// `gcd(b, m) ≠ 1`.
    IncrementNotCoprime {
        /// The common divisor of `b` and `m`
        gcd: i64,
    },
    /// A prime divisor of `m` does not divide `a − 1`.
    MultiplierMissingPrime {
        /// The prime that fails to divide `a − 1`
        prime: u64,
    },
    /// `4 | m` but `4 ∤ (a − 1)`.
    MultiplierMissingFour,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncrementNotCoprime { gcd } => {
                write!(f, "increment shares the factor {} with the modulus", gcd)
            }
            Self::MultiplierMissingPrime { prime } => {
                write!(f, "a - 1 is not divisible by the prime factor {}", prime)
            }
            Self::MultiplierMissingFour => {
                write!(f, "modulus is divisible by 4 but a - 1 is not")
            }
        }
    }
}

/// Precomputed Hull–Dobell rules for one modulus.
///
/// Factorising `m` is the expensive part of the check, so the search builds
/// this once and reuses it for every candidate.
#[derive(Clone, Debug)]
pub(crate) struct HullDobell {
    modulus: Modulus,
    primes: Vec<u64>,
    needs_four: bool,
}

impl HullDobell {
    pub(crate) fn new(modulus: Modulus) -> Self {
        Self {
            modulus,
            primes: distinct_prime_factors(modulus.get()),
            needs_four: modulus.get() % 4 == 0,
        }
    }

    /// Conditions 2 and 3: they depend on `a` only.
    pub(crate) fn multiplier_ok(&self, a: i64) -> bool {
        let a_minus_one = i128::from(a) - 1;
        self.primes
            .iter()
            .all(|&p| a_minus_one.rem_euclid(i128::from(p)) == 0)
            && (!self.needs_four || a_minus_one.rem_euclid(4) == 0)
    }

    /// Smallest multiplier `>= a` that satisfies conditions 2 and 3.
    ///
    /// Those conditions hold exactly when `a ≡ 1` modulo the product of the
    /// distinct primes of `m` (doubled when `4 | m`). Returns `None` if the
    /// next such multiplier does not fit in `i64`.
    pub(crate) fn next_multiplier(&self, a: i64) -> Option<i64> {
        let mut step: i128 = self.primes.iter().map(|&p| i128::from(p)).product();
        if self.needs_four {
            step *= 2;
        }
        let offset = (1 - i128::from(a)).rem_euclid(step);
        i64::try_from(i128::from(a) + offset).ok()
    }

    pub(crate) fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// All three conditions, without collecting violations.
    pub(crate) fn is_full_period(&self, a: i64, b: i64) -> bool {
        self.increment_ok(b) && self.multiplier_ok(a)
    }

    /// Condition 1: depends on `b` only.
    pub(crate) fn increment_ok(&self, b: i64) -> bool {
        gcd(i128::from(b), self.modulus.wide()) == 1
    }

    pub(crate) fn violations(&self, a: i64, b: i64) -> Vec<Violation> {
        let mut found = Vec::new();

        let common = gcd(i128::from(b), self.modulus.wide());
        if common != 1 {
            found.push(Violation::IncrementNotCoprime {
                // common divides m, which fits in i64
                gcd: common as i64,
            });
        }

        let a_minus_one = i128::from(a) - 1;
        for &prime in &self.primes {
            if a_minus_one.rem_euclid(i128::from(prime)) != 0 {
                found.push(Violation::MultiplierMissingPrime { prime });
            }
        }

        if self.needs_four && a_minus_one.rem_euclid(4) != 0 {
            found.push(Violation::MultiplierMissingFour);
        }

        found
    }
}

pub(crate) fn violations(a: i64, b: i64, modulus: Modulus) -> Vec<Violation> {
    HullDobell::new(modulus).violations(a, b)
}

/// Checks whether `(a, b, m)` gives a full-period linear congruential generator.
///
/// Pure and deterministic: the same inputs always produce the same answer.
///
/// # Arguments
///
/// * `a` - Multiplier
/// * `b` - Increment
/// * `m` - Modulus (must be positive)
///
/// # Errors
///
/// Returns `ParameterError::InvalidModulus` if `m <= 0`.
///
/// # Examples
///
/// ```
/// use congruent_core::params::is_valid;
///
/// assert!(is_valid(5, 13, 1 << 31).unwrap());
/// // gcd(12, 2^31) = 4
/// assert!(!is_valid(5, 12, 1 << 31).unwrap());
/// // 2^31 is divisible by 4 but a - 1 = 2 is not
/// assert!(!is_valid(3, 13, 1 << 31).unwrap());
/// assert!(is_valid(5, 13, 0).is_err());
/// ```
pub fn is_valid(a: i64, b: i64, m: i64) -> Result<bool, ParameterError> {
    let modulus = Modulus::new(m)?;
    Ok(HullDobell::new(modulus).is_full_period(a, b))
}

/// Lists every Hull–Dobell condition that `(a, b, m)` violates.
///
/// An empty vector means the triple is full-period.
///
/// # Errors
///
/// Returns `ParameterError::InvalidModulus` if `m <= 0`.
///
/// # Examples
///
/// ```
/// use congruent_core::params::{diagnose, Violation};
///
/// let violations = diagnose(5, 13, 4_294_967_295).unwrap();
/// assert_eq!(
///     violations,
///     vec![
///         Violation::MultiplierMissingPrime { prime: 3 },
///         Violation::MultiplierMissingPrime { prime: 5 },
///         Violation::MultiplierMissingPrime { prime: 17 },
///         Violation::MultiplierMissingPrime { prime: 257 },
///         Violation::MultiplierMissingPrime { prime: 65_537 },
///     ]
/// );
/// ```
pub fn diagnose(a: i64, b: i64, m: i64) -> Result<Vec<Violation>, ParameterError> {
    let modulus = Modulus::new(m)?;
    Ok(violations(a, b, modulus))
}
