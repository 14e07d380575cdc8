//! Linear congruential generator.
//!
//! The recurrence is `xᵢ = (a·xᵢ₋₁ + b) mod m` with `x₀ = seed`. The seed
//! itself is never emitted: the first value is `x₁ / m`.
//!
//! The generator does not re-check the Hull–Dobell conditions. Parameters
//! are trusted as given; use [`congruent_core::select_or_generate`] first
//! when a full period is required.

use congruent_core::math::mul_add_mod;
use congruent_core::{GeneratorParameters, Modulus};

use super::error::GeneratorError;
use super::generator::CongruentialGenerator;
use super::sequence::Sequence;

/// Linear congruential generator `x ↦ (a·x + b) mod m`.
///
/// # Examples
///
/// ```rust
/// use congruent_core::GeneratorParameters;
/// use congruent_sim::rng::{CongruentialGenerator, LinearGenerator};
///
/// let params = GeneratorParameters::new(5, 13, 1 << 31).unwrap();
/// let mut rng1 = LinearGenerator::new(params, 123);
/// let mut rng2 = LinearGenerator::new(params, 123);
///
/// // Same parameters and seed produce identical sequences
/// for _ in 0..10 {
///     assert_eq!(rng1.advance(), rng2.advance());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct LinearGenerator {
    params: GeneratorParameters,
    /// Most recent raw value, reduced into `[0, m)`.
    state: u64,
}

impl LinearGenerator {
    /// Creates a generator from validated parameters and a seed.
    ///
    /// Any `i64` seed is accepted; it is reduced modulo `m` before the first
    /// step, which does not change the sequence.
    #[inline]
    pub fn new(params: GeneratorParameters, seed: i64) -> Self {
        Self {
            state: params.modulus().reduce(i128::from(seed)),
            params,
        }
    }

    /// Creates a generator from an untyped parameter triple.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Parameter` if `m <= 0`.
    pub fn from_raw(a: i64, b: i64, m: i64, seed: i64) -> Result<Self, GeneratorError> {
        Ok(Self::new(GeneratorParameters::new(a, b, m)?, seed))
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> GeneratorParameters {
        self.params
    }

    /// Returns the most recent raw value (the reduced seed before the first step).
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl CongruentialGenerator for LinearGenerator {
    #[inline]
    fn modulus(&self) -> Modulus {
        self.params.modulus()
    }

    #[inline]
    fn advance_raw(&mut self) -> u64 {
        self.state = mul_add_mod(
            i128::from(self.params.a),
            i128::from(self.state),
            i128::from(self.params.b),
            self.params.modulus().get(),
        );
        self.state
    }
}

/// Generates `count` normalised values from `seed`.
///
/// # Examples
///
/// ```rust
/// use congruent_core::GeneratorParameters;
/// use congruent_sim::rng::linear::generate;
///
/// let params = GeneratorParameters::new(5, 13, 1 << 31).unwrap();
/// let sequence = generate(params, 123, 10);
///
/// assert_eq!(sequence.len(), 10);
/// assert_eq!(sequence[0], 628.0 / 2_147_483_648.0);
/// assert!(generate(params, 123, 0).is_empty());
/// ```
pub fn generate(params: GeneratorParameters, seed: i64, count: usize) -> Sequence {
    LinearGenerator::new(params, seed).take_sequence(count)
}

/// Measures the cycle length reached from `seed`.
///
/// Counts steps until the state returns to `seed mod m`. Returns `None` if
/// that does not happen within `limit` steps, which includes every seed
/// lying on a tail that never re-enters itself.
///
/// A full-period triple gives `Some(m)` for every seed once `limit >= m`.
///
/// # Examples
///
/// ```rust
/// use congruent_core::GeneratorParameters;
/// use congruent_sim::rng::measure_period;
///
/// let full = GeneratorParameters::new(5, 1, 8).unwrap();
/// assert_eq!(measure_period(full, 0, 100), Some(8));
///
/// // 2·x mod 8 collapses onto 0 and never returns to 1
/// let short = GeneratorParameters::new(2, 0, 8).unwrap();
/// assert_eq!(measure_period(short, 1, 100), None);
/// ```
pub fn measure_period(params: GeneratorParameters, seed: i64, limit: u64) -> Option<u64> {
    let mut generator = LinearGenerator::new(params, seed);
    let start = generator.state();
    (1..=limit).find(|_| generator.advance_raw() == start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const M31: i64 = 1 << 31;

    #[test]
    fn test_seed_is_not_emitted() {
        let params = GeneratorParameters::new(5, 13, M31).unwrap();
        let mut generator = LinearGenerator::new(params, 123);
        assert_eq!(generator.state(), 123);

        let raw: Vec<u64> = (0..5).map(|_| generator.advance_raw()).collect();
        assert_eq!(raw, vec![628, 3153, 15778, 78903, 394528]);
    }

    #[test]
    fn test_full_period_small_modulus() {
        // a - 1 = 4 is divisible by 2 and 4, gcd(1, 8) = 1
        let params = GeneratorParameters::new(5, 1, 8).unwrap();
        assert!(params.is_full_period());

        let mut generator = LinearGenerator::new(params, 0);
        let raw: Vec<u64> = (0..8).map(|_| generator.advance_raw()).collect();
        assert_eq!(raw, vec![1, 6, 7, 4, 5, 2, 3, 0]);

        let distinct: HashSet<u64> = raw.iter().copied().collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_measure_period_matches_full_period() {
        let params = GeneratorParameters::new(5, 1, 8).unwrap();
        for seed in 0..8 {
            assert_eq!(measure_period(params, seed, 8), Some(8));
        }
        assert_eq!(measure_period(params, 0, 7), None);

        // a - 1 = 2 misses the factor 4, so the cycle is shorter than m
        let short = GeneratorParameters::new(3, 1, 8).unwrap();
        let period = measure_period(short, 0, 100).unwrap();
        assert!(period < 8);
    }

    #[test]
    fn test_negative_seed_reduced() {
        let params = GeneratorParameters::new(5, 1, 8).unwrap();
        let mut negative = LinearGenerator::new(params, -3);
        let mut positive = LinearGenerator::new(params, 5);
        for _ in 0..16 {
            assert_eq!(negative.advance_raw(), positive.advance_raw());
        }
    }

    #[test]
    fn test_negative_parameters_stay_in_range() {
        let params = GeneratorParameters::new(-7, -3, 16).unwrap();
        let mut generator = LinearGenerator::new(params, 9);
        for _ in 0..100 {
            let value = generator.advance();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let m = i64::MAX;
        let params = GeneratorParameters::new(i64::MAX - 1, i64::MAX - 2, m).unwrap();
        let mut generator = LinearGenerator::new(params, i64::MAX - 3);
        for _ in 0..100 {
            assert!(generator.advance_raw() < m as u64);
        }
    }

    #[test]
    fn test_huge_modulus_stays_below_one() {
        // raw values near m round to the same double as m itself
        let params = GeneratorParameters::new(1, i64::MAX - 1, i64::MAX).unwrap();
        let mut generator = LinearGenerator::new(params, 0);
        assert_eq!(generator.params(), params);

        assert_eq!(generator.clone().advance_raw(), i64::MAX as u64 - 1);
        let value = generator.advance();
        assert!(value < 1.0, "normalised value {} reached 1", value);

        let sequence = generate(params, 0, 3);
        assert!(sequence.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_from_raw_rejects_invalid_modulus() {
        assert!(matches!(
            LinearGenerator::from_raw(5, 13, 0, 123),
            Err(GeneratorError::Parameter(_))
        ));
        assert!(LinearGenerator::from_raw(5, 13, 8, 1).is_ok());
    }

    #[test]
    fn test_generate_is_reproducible() {
        let params = GeneratorParameters::new(5, 13, M31).unwrap();
        assert_eq!(generate(params, 123, 50), generate(params, 123, 50));
        assert_ne!(generate(params, 123, 10), generate(params, 124, 10));
    }
}
