//! Single-pass claim simulator.

use tracing::{debug, info};

use super::config::ClaimParams;
use super::error::SimulationError;
use super::result::SimulationResult;
use crate::rng::CongruentialGenerator;

/// Monte Carlo claim simulator.
///
/// Stateless apart from its [`ClaimParams`]; the same input always gives the
/// same [`SimulationResult`].
///
/// # Examples
///
/// ```rust
/// use congruent_sim::mc::{ClaimParams, MonteCarloSimulator};
/// use congruent_sim::rng::AdditiveGenerator;
///
/// let simulator = MonteCarloSimulator::new(ClaimParams::default());
/// let mut generator = AdditiveGenerator::new(&[123, 456, 789], 4_294_967_291).unwrap();
///
/// let result = simulator.simulate_from(&mut generator, 1_000).unwrap();
/// assert_eq!(result.sample_size, 1_000);
/// assert_eq!(result.mean_payout, result.total_payout / 1_000.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MonteCarloSimulator {
    params: ClaimParams,
}

impl MonteCarloSimulator {
    /// Creates a simulator for the given claim model.
    #[inline]
    pub fn new(params: ClaimParams) -> Self {
        Self { params }
    }

    /// Returns the claim model.
    #[inline]
    pub fn params(&self) -> ClaimParams {
        self.params
    }

    /// Simulates one client per value of `sequence`.
    ///
    /// A client claims iff its value is strictly below `p_event`. The input
    /// is read once, in order, and never modified.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::EmptyInput` if `sequence` is empty.
    pub fn simulate(&self, sequence: &[f64]) -> Result<SimulationResult, SimulationError> {
        if sequence.is_empty() {
            return Err(SimulationError::EmptyInput);
        }
        if self.params.is_degenerate() {
            debug!(
                p_event = self.params.p_event,
                "Event probability outside [0, 1]"
            );
        }

        let n = sequence.len();
        let total_events = sequence
            .iter()
            .filter(|&&x| x < self.params.p_event)
            .count();
        let total_payout = total_events as f64 * self.params.payout;

        let result = SimulationResult {
            total_events,
            total_payout,
            mean_payout: total_payout / n as f64,
            empirical_probability: total_events as f64 / n as f64,
            sample_size: n,
        };

        info!(
            clients = n,
            events = total_events,
            total_payout,
            "Claim simulation complete"
        );
        Ok(result)
    }

    /// Draws `count` values from `generator` and simulates over them.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::EmptyInput` if `count == 0`.
    pub fn simulate_from<G: CongruentialGenerator>(
        &self,
        generator: &mut G,
        count: usize,
    ) -> Result<SimulationResult, SimulationError> {
        let sequence = generator.take_sequence(count);
        self.simulate(&sequence)
    }
}

/// Simulates claims over `sequence` with the given model.
///
/// Shorthand for `MonteCarloSimulator::new(ClaimParams::new(p_event, payout)).simulate(sequence)`.
///
/// # Errors
///
/// Returns `SimulationError::EmptyInput` if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use congruent_sim::mc::{simulate, SimulationError};
///
/// let result = simulate(&[0.01, 0.5, 0.019, 0.02], 0.02, 100_000.0).unwrap();
/// // 0.02 itself is not below the threshold
/// assert_eq!(result.total_events, 2);
///
/// assert_eq!(simulate(&[], 0.02, 1.0), Err(SimulationError::EmptyInput));
/// ```
pub fn simulate(
    sequence: &[f64],
    p_event: f64,
    payout: f64,
) -> Result<SimulationResult, SimulationError> {
    MonteCarloSimulator::new(ClaimParams::new(p_event, payout)).simulate(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_sequence_below_threshold() {
        let result = simulate(&[0.0; 100], 0.02, 100_000.0).unwrap();
        assert_eq!(result.total_events, 100);
        assert_eq!(result.total_payout, 10_000_000.0);
        assert_eq!(result.mean_payout, 100_000.0);
        assert_eq!(result.empirical_probability, 1.0);
    }

    #[test]
    fn test_constant_sequence_above_threshold() {
        let result = simulate(&[0.5; 100], 0.02, 100_000.0).unwrap();
        assert_eq!(result.total_events, 0);
        assert_eq!(result.total_payout, 0.0);
        assert_eq!(result.mean_payout, 0.0);
        assert_eq!(result.empirical_probability, 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let result = simulate(&[0.25, 0.25], 0.25, 1.0).unwrap();
        assert_eq!(result.total_events, 0);
    }

    #[test]
    fn test_exact_division() {
        let result = simulate(&[0.1, 0.9, 0.9], 0.5, 7.0).unwrap();
        assert_eq!(result.total_events, 1);
        assert_eq!(result.total_payout, 7.0);
        assert_eq!(result.mean_payout, 7.0 / 3.0);
        assert_eq!(result.empirical_probability, 1.0 / 3.0);
        assert_eq!(result.sample_size, 3);
    }

    #[test]
    fn test_empty_input() {
        let simulator = MonteCarloSimulator::default();
        assert_eq!(simulator.simulate(&[]), Err(SimulationError::EmptyInput));
    }

    #[test]
    fn test_degenerate_probabilities_not_rejected() {
        let all = simulate(&[0.0, 0.5, 0.999], 1.5, 1.0).unwrap();
        assert_eq!(all.total_events, 3);

        let none = simulate(&[0.0, 0.5, 0.999], -0.5, 1.0).unwrap();
        assert_eq!(none.total_events, 0);
    }

    #[test]
    fn test_certain_event_on_huge_modulus() {
        // every normalised value is below 1, so p_event = 1 claims every client
        let params = congruent_core::GeneratorParameters::new(1, i64::MAX - 1, i64::MAX).unwrap();
        let mut generator = crate::rng::LinearGenerator::new(params, 0);
        let simulator = MonteCarloSimulator::new(ClaimParams::new(1.0, 10.0));

        let result = simulator.simulate_from(&mut generator, 100).unwrap();
        assert_eq!(result.total_events, 100);
        assert_relative_eq!(result.empirical_probability, 1.0);
    }

    #[test]
    fn test_input_not_modified() {
        let sequence = vec![0.3, 0.01, 0.7];
        let before = sequence.clone();
        let _ = simulate(&sequence, 0.02, 1.0).unwrap();
        assert_eq!(sequence, before);
    }

    #[test]
    fn test_probability_error() {
        let result = simulate(&[0.01, 0.5, 0.5, 0.5], 0.2, 1.0).unwrap();
        assert_relative_eq!(result.probability_error(0.2), 0.05, epsilon = 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_result_invariants(
                values in prop::collection::vec(0.0_f64..1.0, 1..500),
                p_event in 0.0_f64..=1.0,
                payout in 0.0_f64..1e6,
            ) {
                let result = simulate(&values, p_event, payout).unwrap();
                let n = values.len();
                prop_assert_eq!(result.sample_size, n);
                prop_assert!(result.total_events <= n);
                prop_assert_eq!(result.total_payout, result.total_events as f64 * payout);
                prop_assert_eq!(result.mean_payout, result.total_payout / n as f64);
                prop_assert!((0.0..=1.0).contains(&result.empirical_probability));
            }
        }
    }
}
