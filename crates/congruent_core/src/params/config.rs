//! Parameter search configuration.

/// Default iteration bound for [`crate::params::search()`].
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Configuration for the bounded parameter search.
///
/// The Hull–Dobell theorem guarantees a valid pair exists for every
/// positive modulus, but the enumeration has no intrinsic limit. This bound
/// is the search's cancellation mechanism.
///
/// # Example
///
/// ```
/// use congruent_core::params::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.max_iterations, 1_000_000);
///
/// let custom = SearchConfig::new(5_000);
/// assert_eq!(custom.max_iterations, 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of candidates examined before giving up.
    ///
    /// Each tested `(a, b)` pair counts as one iteration, and so does each
    /// jump past multipliers that no increment can complete.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    /// Default values:
    /// - `max_iterations`: 1,000,000
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with the given iteration bound.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0`.
    pub fn new(max_iterations: usize) -> Self {
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self { max_iterations }
    }
}
