//! Inversive congruential generator.
//!
//! The seed is emitted first. Every later value is
//!
//! ```text
//! xᵢ = (a · (xᵢ₋₁⁻¹ + c)) mod m
//! ```
//!
//! where `xᵢ₋₁⁻¹` is the modular inverse of the previous value. When
//! `gcd(xᵢ₋₁, m) ≠ 1` no inverse exists and [`FALLBACK_INVERSE`] is used
//! instead. Each fallback is reported to the generator's
//! [`FallbackObserver`].

use congruent_core::math::{mod_inverse, mul_add_mod};
use congruent_core::Modulus;

use super::error::GeneratorError;
use super::generator::CongruentialGenerator;
use super::observer::{FallbackEvent, FallbackObserver, TracingObserver};
use super::sequence::Sequence;

/// Substitute for the inverse of a value that shares a factor with `m`.
pub const FALLBACK_INVERSE: u64 = 1;

/// Inversive congruential generator `x ↦ a·(x⁻¹ + c) mod m`.
///
/// The observer type `O` defaults to [`TracingObserver`], which logs each
/// fallback at `debug` level.
///
/// # Examples
///
/// ```rust
/// use congruent_sim::rng::{CongruentialGenerator, InversiveGenerator};
///
/// // 97 is prime, so every non-zero value has an inverse
/// let mut generator = InversiveGenerator::new(5, 17, 31, 97).unwrap();
/// assert_eq!(generator.advance_raw(), 5);
///
/// // 5⁻¹ mod 97 = 39, 17 · (39 + 31) mod 97 = 26
/// assert_eq!(generator.advance_raw(), 26);
/// assert_eq!(generator.fallback_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct InversiveGenerator<O = TracingObserver> {
    a: i64,
    c: i64,
    modulus: Modulus,
    /// Most recent raw value.
    state: u64,
    /// Index of the next value to emit.
    step: usize,
    fallbacks: usize,
    observer: O,
}

impl InversiveGenerator<TracingObserver> {
    /// Creates a generator that logs fallbacks through `tracing`.
    ///
    /// # Errors
    ///
    /// - `GeneratorError::Parameter` if `m <= 0`
    /// - `GeneratorError::SeedOutOfRange` if `seed` is outside `[0, m)`
    pub fn new(seed: i64, a: i64, c: i64, m: i64) -> Result<Self, GeneratorError> {
        Self::with_observer(seed, a, c, m, TracingObserver)
    }
}

impl<O: FallbackObserver> InversiveGenerator<O> {
    /// Creates a generator reporting fallbacks to `observer`.
    ///
    /// # Errors
    ///
    /// As [`InversiveGenerator::new`].
    pub fn with_observer(
        seed: i64,
        a: i64,
        c: i64,
        m: i64,
        observer: O,
    ) -> Result<Self, GeneratorError> {
        let modulus = Modulus::new(m)?;
        if !modulus.contains(seed) {
            return Err(GeneratorError::SeedOutOfRange { seed, modulus });
        }

        Ok(Self {
            a,
            c,
            modulus,
            state: seed.unsigned_abs(),
            step: 0,
            fallbacks: 0,
            observer,
        })
    }

    /// Returns the number of fallbacks so far.
    #[inline]
    pub fn fallback_count(&self) -> usize {
        self.fallbacks
    }

    /// Returns a reference to the observer.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the generator and returns the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<O: FallbackObserver> CongruentialGenerator for InversiveGenerator<O> {
    #[inline]
    fn modulus(&self) -> Modulus {
        self.modulus
    }

    fn advance_raw(&mut self) -> u64 {
        let step = self.step;
        self.step += 1;
        if step == 0 {
            return self.state;
        }

        let m = self.modulus.get();
        let inverse = match mod_inverse(i128::from(self.state), m) {
            Some(inverse) => inverse,
            None => {
                self.fallbacks += 1;
                self.observer.on_fallback(FallbackEvent {
                    step,
                    previous: self.state,
                    modulus: m,
                });
                FALLBACK_INVERSE
            }
        };

        self.state = mul_add_mod(
            i128::from(self.a),
            i128::from(inverse) + i128::from(self.c),
            0,
            m,
        );
        self.state
    }
}

/// Generates exactly `count` normalised values, the first being `seed / m`.
///
/// Fallbacks are logged at `debug` level.
///
/// # Errors
///
/// As [`InversiveGenerator::new`].
pub fn generate(
    seed: i64,
    a: i64,
    c: i64,
    m: i64,
    count: usize,
) -> Result<Sequence, GeneratorError> {
    Ok(InversiveGenerator::new(seed, a, c, m)?.take_sequence(count))
}

/// As [`generate`], reporting fallbacks to `observer`.
///
/// # Errors
///
/// As [`InversiveGenerator::new`].
pub fn generate_with_observer<O: FallbackObserver>(
    seed: i64,
    a: i64,
    c: i64,
    m: i64,
    count: usize,
    observer: O,
) -> Result<Sequence, GeneratorError> {
    Ok(InversiveGenerator::with_observer(seed, a, c, m, observer)?.take_sequence(count))
}
