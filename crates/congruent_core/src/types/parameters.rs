//! Linear congruential generator parameters.

use super::error::ParameterError;
use super::modulus::Modulus;

/// Parameter triple `(a, b, m)` for the recurrence `x ↦ (a·x + b) mod m`.
///
/// Holding a `GeneratorParameters` only guarantees `m > 0`. Whether the
/// triple has full period is answered by [`crate::params::is_valid`]; the
/// generators trust their caller on that point.
///
/// # Examples
///
/// ```
/// use congruent_core::types::GeneratorParameters;
///
/// let params = GeneratorParameters::new(5, 13, 1 << 31).unwrap();
/// assert_eq!(params.modulus().get(), 1 << 31);
/// assert!(params.is_full_period());
///
/// assert!(GeneratorParameters::new(5, 13, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorParameters {
    /// Multiplier.
    pub a: i64,
    /// Increment.
    pub b: i64,
    /// Modulus (positive).
    pub m: Modulus,
}

impl GeneratorParameters {
    /// Creates a parameter triple, rejecting a non-positive modulus.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidModulus` if `m <= 0`.
    pub fn new(a: i64, b: i64, m: i64) -> Result<Self, ParameterError> {
        Ok(Self {
            a,
            b,
            m: Modulus::new(m)?,
        })
    }

    /// Returns the modulus.
    #[inline]
    pub fn modulus(&self) -> Modulus {
        self.m
    }

    /// Returns `true` if the triple satisfies the Hull–Dobell conditions.
    pub fn is_full_period(&self) -> bool {
        crate::params::validator::violations(self.a, self.b, self.m).is_empty()
    }
}

impl std::fmt::Display for GeneratorParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a = {}, b = {}, m = {}", self.a, self.b, self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_modulus() {
        assert!(GeneratorParameters::new(5, 13, 8).is_ok());
        assert_eq!(
            GeneratorParameters::new(5, 13, -1),
            Err(ParameterError::InvalidModulus { modulus: -1 })
        );
    }

    #[test]
    fn test_full_period_flag() {
        assert!(GeneratorParameters::new(5, 1, 8).unwrap().is_full_period());
        assert!(!GeneratorParameters::new(5, 12, 1 << 31).unwrap().is_full_period());
        assert!(!GeneratorParameters::new(5, 13, 4_294_967_295)
            .unwrap()
            .is_full_period());
    }

    #[test]
    fn test_display() {
        let params = GeneratorParameters::new(17, 31, 97).unwrap();
        assert_eq!(params.to_string(), "a = 17, b = 31, m = 97");
    }
}
