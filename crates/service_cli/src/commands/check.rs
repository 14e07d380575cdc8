//! Check command implementation
//!
//! Validates a parameter triple against the Hull–Dobell conditions, and
//! optionally searches for the next valid pair and measures the period.

use congruent_core::params::{diagnose, search, SearchOutcome, Violation};
use congruent_core::GeneratorParameters;
use congruent_sim::rng::measure_period;
use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};
use crate::{report, CliError, Result};

/// Largest modulus whose period is measured step by step
pub const MAX_MEASURED_MODULUS: i64 = 1 << 24;

/// Period measured from one seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodReport {
    pub seed: i64,
    /// Steps allowed before giving up
    pub limit: u64,
    /// `None` if the seed did not recur within `limit` steps
    pub length: Option<u64>,
}

/// Outcome of `congruent check`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub a: i64,
    pub b: i64,
    pub m: i64,
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// Present when `--search` was given
    pub search: Option<SearchOutcome>,
    /// Present when `--measure-period` was given
    pub period: Option<PeriodReport>,
}

/// Options of the check command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckArgs {
    pub a: i64,
    pub b: i64,
    pub m: i64,
    pub search: bool,
    pub measure_period: bool,
    pub seed: i64,
}

/// Run the check command
pub fn run(args: CheckArgs, config: &AppConfig) -> Result<()> {
    info!("Checking parameters...");
    info!("  a = {}, b = {}, m = {}", args.a, args.b, args.m);

    let outcome = check(args, config)?;
    let text = match config.output.format {
        OutputFormat::Json => report::render_json(&outcome)?,
        OutputFormat::Table => report::format_check(&outcome),
    };
    println!("{}", text);
    Ok(())
}

/// Build the check report without printing it
pub fn check(args: CheckArgs, config: &AppConfig) -> Result<CheckReport> {
    let violations = diagnose(args.a, args.b, args.m)?;

    let next_pair = if args.search {
        Some(search(args.m, args.a, args.b, &config.search_config())?)
    } else {
        None
    };

    let period = if args.measure_period {
        if args.m > MAX_MEASURED_MODULUS {
            return Err(CliError::InvalidArgument(format!(
                "--measure-period supports moduli up to {}, got {}",
                MAX_MEASURED_MODULUS, args.m
            )));
        }
        let params = GeneratorParameters::new(args.a, args.b, args.m)?;
        // m is positive here, so the cast is lossless
        let limit = args.m as u64;
        Some(PeriodReport {
            seed: args.seed,
            limit,
            length: measure_period(params, args.seed, limit),
        })
    } else {
        None
    };

    Ok(CheckReport {
        a: args.a,
        b: args.b,
        m: args.m,
        valid: violations.is_empty(),
        violations,
        search: next_pair,
        period,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use congruent_core::ParameterError;

    fn args(a: i64, b: i64, m: i64) -> CheckArgs {
        CheckArgs {
            a,
            b,
            m,
            search: false,
            measure_period: false,
            seed: 0,
        }
    }

    #[test]
    fn test_check_valid_triple() {
        let report = check(args(5, 13, 1 << 31), &AppConfig::default()).unwrap();
        assert!(report.valid);
        assert!(report.violations.is_empty());
        assert!(report.search.is_none());
        assert!(report.period.is_none());
    }

    #[test]
    fn test_check_with_search() {
        let report = check(
            CheckArgs {
                search: true,
                ..args(5, 12, 1 << 31)
            },
            &AppConfig::default(),
        )
        .unwrap();

        assert!(!report.valid);
        assert_eq!(
            report.violations,
            vec![Violation::IncrementNotCoprime { gcd: 4 }]
        );
        assert_eq!(report.search.and_then(|s| s.pair()), Some((5, 13)));
    }

    #[test]
    fn test_check_with_period() {
        let report = check(
            CheckArgs {
                measure_period: true,
                seed: 3,
                ..args(5, 1, 8)
            },
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(
            report.period,
            Some(PeriodReport {
                seed: 3,
                limit: 8,
                length: Some(8)
            })
        );
        assert!(report::format_check(&report).contains("Period from seed 3: 8"));
    }

    #[test]
    fn test_check_short_period_reported() {
        let report = check(
            CheckArgs {
                measure_period: true,
                seed: 1,
                ..args(2, 0, 8)
            },
            &AppConfig::default(),
        )
        .unwrap();

        assert_eq!(report.period.as_ref().map(|p| p.length), Some(None));
        let text = report::format_check(&report);
        assert!(text.contains("not full period"));
        assert!(text.contains("does not recur within 8 steps"));
    }

    #[test]
    fn test_check_rejects_large_period_measurement() {
        let result = check(
            CheckArgs {
                measure_period: true,
                ..args(5, 13, 1 << 31)
            },
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_check_invalid_modulus() {
        let result = check(args(5, 13, 0), &AppConfig::default());
        assert!(matches!(
            result,
            Err(CliError::Parameter(ParameterError::InvalidModulus { modulus: 0 }))
        ));
    }

    #[test]
    fn test_check_json() {
        let report = check(
            CheckArgs {
                search: true,
                ..args(5, 13, 4_294_967_295)
            },
            &AppConfig::default(),
        )
        .unwrap();
        let json = report::render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["violations"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["search"]["Found"]["a"], 4_294_967_296_i64);
    }
}
