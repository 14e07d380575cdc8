//! Validated positive modulus.

use super::error::ParameterError;

/// Largest `f64` strictly below `1.0`.
pub const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// A strictly positive modulus.
///
/// Constructing a `Modulus` is the single place where `m ≤ 0` is rejected;
/// everything downstream (validator, search, generators) holds one and can
/// divide by it without further checks.
///
/// # Examples
///
/// ```
/// use congruent_core::types::{Modulus, ParameterError};
///
/// let m = Modulus::new(1 << 31).unwrap();
/// assert_eq!(m.get(), 2_147_483_648);
/// assert_eq!(m.normalise(1 << 30), 0.5);
///
/// assert_eq!(
///     Modulus::new(0),
///     Err(ParameterError::InvalidModulus { modulus: 0 })
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
pub struct Modulus(u64);

impl Modulus {
    /// Creates a modulus from a signed value.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidModulus` if `m <= 0`.
    pub fn new(m: i64) -> Result<Self, ParameterError> {
        if m <= 0 {
            return Err(ParameterError::InvalidModulus { modulus: m });
        }
        Ok(Self(m.unsigned_abs()))
    }

    /// Returns the modulus as an unsigned integer.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the modulus widened to `i128` for intermediate arithmetic.
    #[inline]
    pub fn wide(self) -> i128 {
        i128::from(self.0)
    }

    /// Returns the modulus as the signed value it was built from.
    #[inline]
    pub fn signed(self) -> i64 {
        // new() only accepts positive i64 values
        self.0 as i64
    }

    /// Normalises a raw residue to a value in `[0, 1)`.
    ///
    /// `raw` is expected to lie in `[0, m)`. Above 2⁵³ both operands round
    /// to doubles and the quotient can round up to `1.0`; it is clamped to
    /// [`LARGEST_BELOW_ONE`] so the half-open bound still holds.
    #[inline]
    pub fn normalise(self, raw: u64) -> f64 {
        (raw as f64 / self.0 as f64).min(LARGEST_BELOW_ONE)
    }

    /// Reduces a signed value into `[0, m)`.
    #[inline]
    pub fn reduce(self, value: i128) -> u64 {
        value.rem_euclid(self.wide()) as u64
    }

    /// Returns `true` if `value` is a residue, i.e. lies in `[0, m)`.
    #[inline]
    pub fn contains(self, value: i64) -> bool {
        value >= 0 && value.unsigned_abs() < self.0
    }
}

impl TryFrom<i64> for Modulus {
    type Error = ParameterError;

    fn try_from(m: i64) -> Result<Self, Self::Error> {
        Self::new(m)
    }
}

impl From<Modulus> for i64 {
    fn from(m: Modulus) -> Self {
        m.signed()
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
