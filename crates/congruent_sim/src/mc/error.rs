//! Error types for the claim simulator.

use thiserror::Error;

/// Simulation errors.
///
/// # Variants
/// - `EmptyInput`: The input sequence had no values, so no mean exists
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// The input sequence was empty.
    #[error("Cannot simulate over an empty sequence")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_display() {
        assert!(SimulationError::EmptyInput.to_string().contains("empty sequence"));
    }
}
