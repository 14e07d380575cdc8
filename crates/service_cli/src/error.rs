//! CLI error types
//!
//! Every failure of a command ends up here and is reported once by `main`.

use congruent_core::ParameterError;
use congruent_sim::{GeneratorError, SimulationError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `congruent` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Parameter validation or search failed.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// A generator could not be constructed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// The claim simulation failed.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
