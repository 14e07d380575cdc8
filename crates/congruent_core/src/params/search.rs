//! Deterministic search for full-period parameters.
//!
//! Candidates are enumerated in a fixed total order: `a = a_start` with
//! `b = b_start, b_start + 1, …, m − 1`, then `b` resets to 1 and `a` moves
//! on by one. The first candidate tested is `(a_start, b_start)` itself.

use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::validator::HullDobell;
use crate::types::{GeneratorParameters, Modulus, ParameterError};

/// Terminal state of a bounded search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A full-period pair was found.
    Found {
        /// Multiplier
        a: i64,
        /// Increment
        b: i64,
        /// Iterations consumed, including the successful one
        iterations: usize,
    },
    /// The iteration bound was reached first.
    Exhausted {
        /// Iterations consumed
        iterations: usize,
        /// Multiplier the search would have examined next
        last_a: i64,
        /// Increment the search would have examined next
        last_b: i64,
    },
}

impl SearchOutcome {
    /// Returns the found pair, if any.
    pub fn pair(&self) -> Option<(i64, i64)> {
        match *self {
            Self::Found { a, b, .. } => Some((a, b)),
            Self::Exhausted { .. } => None,
        }
    }

    /// Returns the number of iterations consumed.
    pub fn iterations(&self) -> usize {
        match *self {
            Self::Found { iterations, .. } | Self::Exhausted { iterations, .. } => iterations,
        }
    }
}

/// Where the parameters returned by [`select_or_generate`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionOrigin {
    /// The caller's pair was already full-period and is returned unchanged.
    Supplied,
    /// The caller's pair was rejected; this one was found by the search.
    Searched {
        /// Iterations the search consumed
        iterations: usize,
    },
}

/// Full-period parameters together with their origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// The selected parameter triple
    pub params: GeneratorParameters,
    /// Whether the triple was supplied or searched for
    pub origin: SelectionOrigin,
}

/// Searches for the first full-period pair at or after `(a_start, b_start)`.
///
/// Multipliers that fail the prime-factor conditions cannot be completed by
/// any increment, so the search jumps straight to the next multiplier that
/// can, at `b = 1`, in a single iteration. The first valid pair in the
/// enumeration order is unaffected by this.
///
/// # Arguments
///
/// * `m` - Modulus (must be positive)
/// * `a_start` - First multiplier to examine
/// * `b_start` - First increment to examine for `a_start`
/// * `config` - Iteration bound
///
/// # Errors
///
/// Returns `ParameterError::InvalidModulus` if `m <= 0`. Running out of
/// iterations is not an error here; it is reported as
/// [`SearchOutcome::Exhausted`].
///
/// # Examples
///
/// ```
/// use congruent_core::params::{search, SearchConfig, SearchOutcome};
///
/// let outcome = search(1 << 31, 5, 12, &SearchConfig::default()).unwrap();
/// assert_eq!(outcome, SearchOutcome::Found { a: 5, b: 13, iterations: 2 });
/// ```
pub fn search(
    m: i64,
    a_start: i64,
    b_start: i64,
    config: &SearchConfig,
) -> Result<SearchOutcome, ParameterError> {
    let modulus = Modulus::new(m)?;
    Ok(search_with(&HullDobell::new(modulus), a_start, b_start, config))
}

/// Runs the search against rules whose modulus is already factorised.
fn search_with(
    rules: &HullDobell,
    a_start: i64,
    b_start: i64,
    config: &SearchConfig,
) -> SearchOutcome {
    let m = rules.modulus().signed();
    let mut a = a_start;
    let mut b = b_start;
    let mut iterations = 0_usize;

    while iterations < config.max_iterations {
        iterations += 1;

        if !rules.multiplier_ok(a) {
            match rules.next_multiplier(a) {
                Some(next) => {
                    a = next;
                    b = 1;
                    continue;
                }
                None => break,
            }
        }

        if rules.increment_ok(b) {
            debug!(a, b, m, iterations, "Full-period parameters found");
            return SearchOutcome::Found { a, b, iterations };
        }

        match b.checked_add(1) {
            Some(next) if next < m => b = next,
            _ => match a.checked_add(1) {
                Some(next) => {
                    a = next;
                    b = 1;
                }
                None => break,
            },
        }
    }

    warn!(
        m,
        a_start,
        b_start,
        iterations,
        max_iterations = config.max_iterations,
        "Parameter search exhausted its iteration bound"
    );
    SearchOutcome::Exhausted {
        iterations,
        last_a: a,
        last_b: b,
    }
}

/// Returns `(a, b)` unchanged if full-period, otherwise the first valid pair
/// found by [`search`] starting from `(a, b)`.
///
/// The search result is re-validated before it is returned.
///
/// # Errors
///
/// - `ParameterError::InvalidModulus` if `m <= 0`
/// - `ParameterError::BoundedSearchExhausted` if the iteration bound is hit
/// - `ParameterError::InvariantViolation` if the searched pair fails
///   re-validation
///
/// # Examples
///
/// ```
/// use congruent_core::params::{select_or_generate, SearchConfig, SelectionOrigin};
///
/// let config = SearchConfig::default();
///
/// let kept = select_or_generate(5, 13, 1 << 31, &config).unwrap();
/// assert_eq!(kept.origin, SelectionOrigin::Supplied);
///
/// let searched = select_or_generate(5, 12, 1 << 31, &config).unwrap();
/// assert_eq!((searched.params.a, searched.params.b), (5, 13));
/// assert!(matches!(searched.origin, SelectionOrigin::Searched { .. }));
/// ```
pub fn select_or_generate(
    a: i64,
    b: i64,
    m: i64,
    config: &SearchConfig,
) -> Result<Selection, ParameterError> {
    let params = GeneratorParameters::new(a, b, m)?;
    // factorise once for the check, the search and the re-check
    let rules = HullDobell::new(params.modulus());
    if rules.is_full_period(a, b) {
        debug!(a, b, m, "Supplied parameters are full-period");
        return Ok(Selection {
            params,
            origin: SelectionOrigin::Supplied,
        });
    }

    info!(a, b, m, "Supplied parameters rejected, searching for a full-period pair");
    match search_with(&rules, a, b, config) {
        SearchOutcome::Found {
            a: found_a,
            b: found_b,
            iterations,
        } => {
            let found = GeneratorParameters::new(found_a, found_b, m)?;
            if !rules.is_full_period(found_a, found_b) {
                return Err(ParameterError::InvariantViolation {
                    a: found_a,
                    b: found_b,
                    modulus: m,
                });
            }
            info!(a = found_a, b = found_b, m, iterations, "Selected full-period parameters");
            Ok(Selection {
                params: found,
                origin: SelectionOrigin::Searched { iterations },
            })
        }
        SearchOutcome::Exhausted { .. } => Err(ParameterError::BoundedSearchExhausted {
            modulus: m,
            a_start: a,
            b_start: b,
            max_iterations: config.max_iterations,
        }),
    }
}
