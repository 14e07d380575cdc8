//! The trait shared by every congruential generator.

use congruent_core::Modulus;

use super::sequence::Sequence;

/// A deterministic congruential generator over a fixed modulus.
///
/// Implementors provide the raw recurrence via [`advance_raw`]; the
/// normalised value, batch filling and sequence collection come for free.
/// Every raw value lies in `[0, m)`, so every normalised value lies in
/// `[0, 1)`.
///
/// [`advance_raw`]: CongruentialGenerator::advance_raw
///
/// # Examples
///
/// ```
/// use congruent_core::GeneratorParameters;
/// use congruent_sim::rng::{CongruentialGenerator, LinearGenerator};
///
/// let params = GeneratorParameters::new(5, 13, 1 << 31).unwrap();
/// let mut generator = LinearGenerator::new(params, 123);
///
/// assert_eq!(generator.advance_raw(), 628);
/// assert_eq!(generator.advance(), 3153.0 / 2_147_483_648.0);
///
/// let sequence = generator.take_sequence(8);
/// assert_eq!(sequence.len(), 8);
/// ```
pub trait CongruentialGenerator {
    /// Returns the modulus the generator reduces by.
    fn modulus(&self) -> Modulus;

    /// Advances the state by one step and returns the raw residue in `[0, m)`.
    fn advance_raw(&mut self) -> u64;

    /// Advances the state by one step and returns the value normalised to `[0, 1)`.
    #[inline]
    fn advance(&mut self) -> f64 {
        let raw = self.advance_raw();
        self.modulus().normalise(raw)
    }

    /// Fills the buffer with consecutive normalised values.
    ///
    /// An empty buffer leaves the state unchanged.
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.advance();
        }
    }

    /// Collects the next `count` normalised values into a [`Sequence`].
    fn take_sequence(&mut self, count: usize) -> Sequence {
        let mut sequence = Sequence::with_capacity(count);
        for _ in 0..count {
            sequence.push(self.advance());
        }
        sequence
    }
}
