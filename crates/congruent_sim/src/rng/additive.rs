//! Lag-3 additive congruential generator.
//!
//! The first three outputs are the seeds themselves (normalised by `m`).
//! From the fourth value on:
//!
//! ```text
//! xᵢ = (2¹³ · (xᵢ₋₁ + xᵢ₋₂ + xᵢ₋₃)) mod m
//! ```

use congruent_core::Modulus;

use super::error::GeneratorError;
use super::generator::CongruentialGenerator;
use super::sequence::Sequence;

/// Constant multiplier applied to the lagged sum.
pub const ADDITIVE_MULTIPLIER: u64 = 1 << 13;

/// Number of prior values the recurrence reads.
pub const ADDITIVE_LAG: usize = 3;

/// Lag-3 additive congruential generator.
///
/// Only the first [`ADDITIVE_LAG`] seeds are used; extra seeds are ignored.
///
/// # Examples
///
/// ```rust
/// use congruent_sim::rng::{AdditiveGenerator, CongruentialGenerator};
///
/// let m = 4_294_967_291;
/// let mut generator = AdditiveGenerator::new(&[123, 456, 789], m).unwrap();
///
/// // Seeds pass through unchanged
/// assert_eq!(generator.advance_raw(), 123);
/// assert_eq!(generator.advance_raw(), 456);
/// assert_eq!(generator.advance_raw(), 789);
///
/// // 2^13 * (123 + 456 + 789)
/// assert_eq!(generator.advance_raw(), 11_206_656);
/// ```
#[derive(Clone, Debug)]
pub struct AdditiveGenerator {
    modulus: Modulus,
    /// `[xᵢ₋₃, xᵢ₋₂, xᵢ₋₁]`, oldest first.
    history: [u64; ADDITIVE_LAG],
    /// Seeds still to be emitted before the recurrence takes over.
    pending_seeds: usize,
}

impl AdditiveGenerator {
    /// Creates a generator from at least three seeds.
    ///
    /// # Errors
    ///
    /// - `GeneratorError::Parameter` if `m <= 0`
    /// - `GeneratorError::InsufficientSeeds` if fewer than three seeds are given
    /// - `GeneratorError::SeedOutOfRange` if one of the first three seeds is
    ///   outside `[0, m)`
    pub fn new(seeds: &[i64], m: i64) -> Result<Self, GeneratorError> {
        let modulus = Modulus::new(m)?;
        if seeds.len() < ADDITIVE_LAG {
            return Err(GeneratorError::InsufficientSeeds { got: seeds.len() });
        }

        let mut history = [0_u64; ADDITIVE_LAG];
        for (slot, &seed) in history.iter_mut().zip(seeds) {
            if !modulus.contains(seed) {
                return Err(GeneratorError::SeedOutOfRange { seed, modulus });
            }
            *slot = seed.unsigned_abs();
        }

        Ok(Self {
            modulus,
            history,
            pending_seeds: ADDITIVE_LAG,
        })
    }

    /// Returns `true` once all seeds have been emitted.
    #[inline]
    pub fn seeds_exhausted(&self) -> bool {
        self.pending_seeds == 0
    }
}

impl CongruentialGenerator for AdditiveGenerator {
    #[inline]
    fn modulus(&self) -> Modulus {
        self.modulus
    }

    fn advance_raw(&mut self) -> u64 {
        if self.pending_seeds > 0 {
            let value = self.history[ADDITIVE_LAG - self.pending_seeds];
            self.pending_seeds -= 1;
            return value;
        }

        let [oldest, middle, newest] = self.history;
        let sum = u128::from(oldest) + u128::from(middle) + u128::from(newest);
        let next = (u128::from(ADDITIVE_MULTIPLIER) * sum) % u128::from(self.modulus.get());
        // next < m, which fits in u64
        let next = next as u64;
        self.history = [middle, newest, next];
        next
    }
}

/// Generates exactly `count` normalised values.
///
/// For `count < 3` the result is a prefix of the normalised seeds.
///
/// # Errors
///
/// As [`AdditiveGenerator::new`].
///
/// # Examples
///
/// ```rust
/// use congruent_sim::rng::additive::generate;
///
/// let sequence = generate(&[1, 2, 3], 5, 10).unwrap();
/// assert_eq!(sequence.len(), 5);
/// assert_eq!(&sequence[..3], &[0.1, 0.2, 0.3]);
///
/// assert!(generate(&[1, 2], 5, 10).is_err());
/// ```
pub fn generate(seeds: &[i64], count: usize, m: i64) -> Result<Sequence, GeneratorError> {
    Ok(AdditiveGenerator::new(seeds, m)?.take_sequence(count))
}
