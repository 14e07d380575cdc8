//! Claim simulation result.

/// Aggregate outcome of one simulation run.
///
/// Created once per run by [`MonteCarloSimulator`](super::MonteCarloSimulator)
/// and never modified afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Number of clients that filed a claim.
    pub total_events: usize,
    /// `total_events × payout`.
    pub total_payout: f64,
    /// `total_payout / sample_size`.
    pub mean_payout: f64,
    /// `total_events / sample_size`, in `[0, 1]`.
    pub empirical_probability: f64,
    /// Number of clients simulated.
    pub sample_size: usize,
}

impl SimulationResult {
    /// Returns the gap between the observed and the modelled claim probability.
    #[inline]
    pub fn probability_error(&self, p_event: f64) -> f64 {
        self.empirical_probability - p_event
    }
}
