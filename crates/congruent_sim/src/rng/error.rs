//! Error types for generator construction.

use congruent_core::{Modulus, ParameterError};
use thiserror::Error;

/// Generator construction errors.
///
/// Generators never fail once built; every variant is raised by a
/// constructor and is fatal for it.
///
/// # Variants
/// - `Parameter`: The modulus (or another parameter) was rejected by congruent_core
/// - `InsufficientSeeds`: The additive generator got fewer than three seeds
/// - `SeedOutOfRange`: A seed does not lie in `[0, m)`
///
/// # Examples
/// ```
/// use congruent_sim::rng::GeneratorError;
///
/// let err = GeneratorError::InsufficientSeeds { got: 2 };
/// assert_eq!(
///     err.to_string(),
///     "Additive generator requires at least 3 seeds, got 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Parameter error from congruent_core.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Fewer seeds than the additive recurrence's lag.
    #[error("Additive generator requires at least 3 seeds, got {got}")]
    InsufficientSeeds {
        /// Number of seeds supplied
        got: usize,
    },

    /// A seed lies outside `[0, m)`.
    #[error("Seed {seed} is out of range for modulus {modulus}: must be in [0, {modulus})")]
    SeedOutOfRange {
        /// The rejected seed
        seed: i64,
        /// The generator modulus
        modulus: Modulus,
    },
}
