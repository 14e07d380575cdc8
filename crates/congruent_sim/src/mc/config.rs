//! Claim model parameters.

/// Default per-client claim probability.
pub const DEFAULT_P_EVENT: f64 = 0.02;

/// Default payout per claim.
pub const DEFAULT_PAYOUT: f64 = 100_000.0;

/// Claim model: a client claims when its uniform value is `< p_event`, and
/// each claim pays `payout`.
///
/// Values are not range-checked. A `p_event` outside `[0, 1]` is
/// degenerate (every client claims, or none does) but well-defined.
///
/// # Examples
///
/// ```rust
/// use congruent_sim::mc::ClaimParams;
///
/// let params = ClaimParams::default();
/// assert_eq!(params.p_event, 0.02);
/// assert_eq!(params.payout, 100_000.0);
/// assert!(!params.is_degenerate());
///
/// assert!(ClaimParams::new(1.5, 1.0).is_degenerate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimParams {
    /// Probability that a single client files a claim.
    pub p_event: f64,
    /// Amount paid per claim.
    pub payout: f64,
}

impl Default for ClaimParams {
    /// Default values:
    /// - `p_event`: 0.02
    /// - `payout`: 100,000
    fn default() -> Self {
        Self {
            p_event: DEFAULT_P_EVENT,
            payout: DEFAULT_PAYOUT,
        }
    }
}

impl ClaimParams {
    /// Creates claim parameters.
    #[inline]
    pub fn new(p_event: f64, payout: f64) -> Self {
        Self { p_event, payout }
    }

    /// Returns `true` if `p_event` lies outside `[0, 1]` (or is NaN).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(0.0..=1.0).contains(&self.p_event)
    }
}
