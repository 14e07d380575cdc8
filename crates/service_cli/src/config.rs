//! Runner configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments. Defaults reproduce the reference scenarios exactly.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::scenario::Scenario;

/// Environment variable selecting the scenario.
pub const ENV_SCENARIO: &str = "CONGRUENT_SCENARIO";
/// Environment variable selecting the log level.
pub const ENV_LOG_LEVEL: &str = "CONGRUENT_LOG_LEVEL";
/// Environment variable overriding the search bound.
pub const ENV_MAX_ITERATIONS: &str = "CONGRUENT_MAX_ITERATIONS";
/// Environment variable overriding the printed decimal places.
pub const ENV_DECIMALS: &str = "CONGRUENT_DECIMALS";

/// Largest number of decimal places worth printing for an `f64`.
pub const MAX_DECIMALS: usize = 17;

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error(
        "Invalid scenario: {0}. Must be one of: showcase, linear-claims, additive-claims, inversive-claims"
    )]
    InvalidScenario(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// How reports are rendered
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for sequence listings
    pub decimals: usize,
    /// Prefix each listed value with its 1-based position
    pub show_index: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            decimals: 8,
            show_index: true,
        }
    }
}

/// Parameter search settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub max_iterations: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: congruent_core::params::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Claim model shared by every claims scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClaimsSection {
    /// Number of simulated clients
    pub clients: usize,
    pub p_event: f64,
    pub payout: f64,
}

impl Default for ClaimsSection {
    fn default() -> Self {
        Self {
            clients: 1_000,
            p_event: congruent_sim::mc::DEFAULT_P_EVENT,
            payout: congruent_sim::mc::DEFAULT_PAYOUT,
        }
    }
}

/// Showcase scenario settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseSection {
    pub modulus: i64,
    /// Starting multiplier for parameter selection
    pub a: i64,
    /// Starting increment for parameter selection
    pub b: i64,
    /// One linear sequence is printed per seed
    pub linear_seeds: Vec<i64>,
    pub additive_seeds: Vec<i64>,
    pub inversive_seed: i64,
    pub inversive_a: i64,
    pub inversive_c: i64,
    /// Values per sequence
    pub count: usize,
}

impl Default for ShowcaseSection {
    fn default() -> Self {
        Self {
            modulus: 1 << 31,
            a: 5,
            b: 12,
            linear_seeds: vec![123, 124],
            additive_seeds: vec![123, 456, 789],
            inversive_seed: 123,
            inversive_a: 17,
            inversive_c: 31,
            count: 10,
        }
    }
}

/// Linear claims scenario settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinearClaimsSection {
    pub a: i64,
    pub b: i64,
    pub modulus: i64,
    pub seed: i64,
    /// Replace non-full-period parameters with the next valid pair
    pub enforce_full_period: bool,
}

impl Default for LinearClaimsSection {
    fn default() -> Self {
        Self {
            a: 5,
            b: 13,
            modulus: 4_294_967_295,
            seed: 123,
            enforce_full_period: false,
        }
    }
}

/// Additive claims scenario settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdditiveClaimsSection {
    pub modulus: i64,
    pub seeds: Vec<i64>,
}

impl Default for AdditiveClaimsSection {
    fn default() -> Self {
        Self {
            modulus: 4_294_967_291,
            seeds: vec![123, 456, 789],
        }
    }
}

/// Inversive claims scenario settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InversiveClaimsSection {
    pub modulus: i64,
    pub seed: i64,
    pub a: i64,
    pub c: i64,
}

impl Default for InversiveClaimsSection {
    fn default() -> Self {
        Self {
            modulus: 4_294_967_291,
            seed: 123,
            a: 17,
            c: 31,
        }
    }
}

/// Runner configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Scenario run by `congruent run` without `--scenario`
    pub scenario: Scenario,
    pub output: OutputConfig,
    pub search: SearchSection,
    pub claims: ClaimsSection,
    pub showcase: ShowcaseSection,
    pub linear_claims: LinearClaimsSection,
    pub additive_claims: AdditiveClaimsSection,
    pub inversive_claims: InversiveClaimsSection,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(scenario) = lookup(ENV_SCENARIO) {
            self.scenario = Scenario::from_str(&scenario)?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(max_iterations) = lookup(ENV_MAX_ITERATIONS) {
            self.search.max_iterations = max_iterations.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_MAX_ITERATIONS, max_iterations
                ))
            })?;
        }

        if let Some(decimals) = lookup(ENV_DECIMALS) {
            self.output.decimals = decimals.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_DECIMALS, decimals
                ))
            })?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_iterations == 0 {
            return Err(invalid("search.max_iterations", "must be > 0"));
        }
        if self.output.decimals > MAX_DECIMALS {
            return Err(invalid(
                "output.decimals",
                format!("must be at most {}", MAX_DECIMALS),
            ));
        }

        if self.claims.clients == 0 {
            return Err(invalid("claims.clients", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.claims.p_event) {
            return Err(invalid(
                "claims.p_event",
                format!("{} is outside [0, 1]", self.claims.p_event),
            ));
        }
        if !(self.claims.payout >= 0.0 && self.claims.payout.is_finite()) {
            return Err(invalid(
                "claims.payout",
                format!("{} must be finite and non-negative", self.claims.payout),
            ));
        }

        let moduli = [
            ("showcase.modulus", self.showcase.modulus),
            ("linear_claims.modulus", self.linear_claims.modulus),
            ("additive_claims.modulus", self.additive_claims.modulus),
            ("inversive_claims.modulus", self.inversive_claims.modulus),
        ];
        for (field, modulus) in moduli {
            if modulus <= 0 {
                return Err(invalid(field, format!("{} must be positive", modulus)));
            }
        }

        let seed_lists = [
            ("showcase.additive_seeds", &self.showcase.additive_seeds),
            ("additive_claims.seeds", &self.additive_claims.seeds),
        ];
        for (field, seeds) in seed_lists {
            if seeds.len() < congruent_sim::rng::ADDITIVE_LAG {
                return Err(invalid(
                    field,
                    format!("needs at least 3 seeds, got {}", seeds.len()),
                ));
            }
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if let Some(scenario) = cli.scenario {
            self.scenario = scenario;
        }
        Ok(())
    }

    /// Returns the search configuration for congruent_core.
    pub fn search_config(&self) -> congruent_core::SearchConfig {
        congruent_core::SearchConfig {
            max_iterations: self.search.max_iterations,
        }
    }

    /// Returns the claim model for congruent_sim.
    pub fn claim_params(&self) -> congruent_sim::ClaimParams {
        congruent_sim::ClaimParams::new(self.claims.p_event, self.claims.payout)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Shorthand for a debug log level
    pub verbose: bool,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Scenario override
    pub scenario: Option<Scenario>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// As [`build_config`], reading environment variables through `lookup`.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
