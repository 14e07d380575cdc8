//! Scenario dispatch
//!
//! Each scenario is an independent operation that returns structured data.
//! Nothing here prints; rendering lives in [`crate::report`].

use std::str::FromStr;

use congruent_core::params::{diagnose, select_or_generate, Selection, Violation};
use congruent_core::GeneratorParameters;
use congruent_sim::mc::{ClaimParams, MonteCarloSimulator, SimulationResult};
use congruent_sim::rng::{
    additive, linear, AdditiveGenerator, CongruentialGenerator, InversiveGenerator, Sequence,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{AppConfig, ConfigError};
use crate::Result;

/// The runnable scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Parameter selection and a short sequence from every generator
    #[default]
    Showcase,
    /// Claim simulation driven by the linear generator
    LinearClaims,
    /// Claim simulation driven by the additive generator
    AdditiveClaims,
    /// Claim simulation driven by the inversive generator
    InversiveClaims,
}

impl Scenario {
    /// Every scenario, in menu order
    pub const ALL: [Scenario; 4] = [
        Scenario::Showcase,
        Scenario::LinearClaims,
        Scenario::AdditiveClaims,
        Scenario::InversiveClaims,
    ];

    /// Kebab-case name used in configuration and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Showcase => "showcase",
            Scenario::LinearClaims => "linear-claims",
            Scenario::AdditiveClaims => "additive-claims",
            Scenario::InversiveClaims => "inversive-claims",
        }
    }
}

impl FromStr for Scenario {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == wanted)
            .ok_or_else(|| ConfigError::InvalidScenario(s.to_string()))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A generated sequence with a short description of its origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledSequence {
    pub label: String,
    pub values: Sequence,
}

/// Output of [`Scenario::Showcase`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseReport {
    /// Starting pair the selection was asked about
    pub requested: (i64, i64),
    pub selection: Selection,
    /// One sequence per configured linear seed
    pub linear: Vec<LabelledSequence>,
    pub additive: LabelledSequence,
    pub inversive: LabelledSequence,
    pub inversive_fallbacks: usize,
}

/// Output of the claims scenarios
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimsReport {
    /// Generator family, e.g. "linear"
    pub generator: &'static str,
    /// Human-readable generator parameters
    pub parameters: String,
    /// Hull–Dobell conditions the linear parameters fail (empty otherwise)
    pub violations: Vec<Violation>,
    /// No-inverse fallbacks (inversive generator only)
    pub fallbacks: Option<usize>,
    pub claims: ClaimParams,
    pub result: SimulationResult,
}

/// Structured result of one scenario run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scenario", rename_all = "kebab-case")]
pub enum ScenarioReport {
    Showcase(ShowcaseReport),
    Claims(ClaimsReport),
}

/// Run `scenario` with the settings in `config`
pub fn dispatch(scenario: Scenario, config: &AppConfig) -> Result<ScenarioReport> {
    info!(%scenario, "Running scenario");
    let report = match scenario {
        Scenario::Showcase => ScenarioReport::Showcase(run_showcase(config)?),
        Scenario::LinearClaims => ScenarioReport::Claims(run_linear_claims(config)?),
        Scenario::AdditiveClaims => ScenarioReport::Claims(run_additive_claims(config)?),
        Scenario::InversiveClaims => ScenarioReport::Claims(run_inversive_claims(config)?),
    };
    info!(%scenario, "Scenario complete");
    Ok(report)
}

/// Select full-period parameters and draw a short sequence from each generator
pub fn run_showcase(config: &AppConfig) -> Result<ShowcaseReport> {
    let section = &config.showcase;
    let m = section.modulus;

    let selection = select_or_generate(section.a, section.b, m, &config.search_config())?;
    info!(params = %selection.params, origin = ?selection.origin, "Parameters selected");

    let linear = section
        .linear_seeds
        .iter()
        .map(|&seed| LabelledSequence {
            label: format!("linear, seed {}", seed),
            values: linear::generate(selection.params, seed, section.count),
        })
        .collect();

    let additive = LabelledSequence {
        label: format!("additive, seeds {:?}", &section.additive_seeds[..]),
        values: additive::generate(&section.additive_seeds, section.count, m)?,
    };

    let mut inversive_generator = InversiveGenerator::new(
        section.inversive_seed,
        section.inversive_a,
        section.inversive_c,
        m,
    )?;
    let inversive = LabelledSequence {
        label: format!(
            "inversive, a = {}, c = {}, seed {}",
            section.inversive_a, section.inversive_c, section.inversive_seed
        ),
        values: inversive_generator.take_sequence(section.count),
    };

    Ok(ShowcaseReport {
        requested: (section.a, section.b),
        selection,
        linear,
        additive,
        inversive,
        inversive_fallbacks: inversive_generator.fallback_count(),
    })
}

/// Simulate claims with the linear generator
///
/// The configured parameters are used as supplied unless
/// `linear_claims.enforce_full_period` is set.
pub fn run_linear_claims(config: &AppConfig) -> Result<ClaimsReport> {
    let section = &config.linear_claims;
    let mut params = GeneratorParameters::new(section.a, section.b, section.modulus)?;
    let violations = diagnose(section.a, section.b, section.modulus)?;

    if !violations.is_empty() {
        if section.enforce_full_period {
            let selection = select_or_generate(
                section.a,
                section.b,
                section.modulus,
                &config.search_config(),
            )?;
            info!(params = %selection.params, "Replaced non-full-period parameters");
            params = selection.params;
        } else {
            warn!(
                %params,
                failed_conditions = violations.len(),
                "Linear parameters do not have full period; using them as supplied"
            );
        }
    }

    let mut generator = linear::LinearGenerator::new(params, section.seed);
    Ok(ClaimsReport {
        generator: "linear",
        parameters: format!("{}, seed = {}", params, section.seed),
        violations: diagnose(params.a, params.b, params.modulus().signed())?,
        fallbacks: None,
        claims: config.claim_params(),
        result: simulate(config, &mut generator)?,
    })
}

/// Simulate claims with the additive generator
pub fn run_additive_claims(config: &AppConfig) -> Result<ClaimsReport> {
    let section = &config.additive_claims;
    let mut generator = AdditiveGenerator::new(&section.seeds, section.modulus)?;

    Ok(ClaimsReport {
        generator: "additive",
        parameters: format!("m = {}, seeds = {:?}", section.modulus, &section.seeds[..]),
        violations: Vec::new(),
        fallbacks: None,
        claims: config.claim_params(),
        result: simulate(config, &mut generator)?,
    })
}

/// Simulate claims with the inversive generator
pub fn run_inversive_claims(config: &AppConfig) -> Result<ClaimsReport> {
    let section = &config.inversive_claims;
    let mut generator =
        InversiveGenerator::new(section.seed, section.a, section.c, section.modulus)?;
    let result = simulate(config, &mut generator)?;

    Ok(ClaimsReport {
        generator: "inversive",
        parameters: format!(
            "a = {}, c = {}, m = {}, seed = {}",
            section.a, section.c, section.modulus, section.seed
        ),
        violations: Vec::new(),
        fallbacks: Some(generator.fallback_count()),
        claims: config.claim_params(),
        result,
    })
}

fn simulate<G: CongruentialGenerator>(
    config: &AppConfig,
    generator: &mut G,
) -> Result<SimulationResult> {
    let simulator = MonteCarloSimulator::new(config.claim_params());
    Ok(simulator.simulate_from(generator, config.claims.clients)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use congruent_core::params::SelectionOrigin;

    #[test]
    fn test_scenario_parsing() {
        assert_eq!(Scenario::from_str("showcase").unwrap(), Scenario::Showcase);
        assert_eq!(
            Scenario::from_str("Linear_Claims").unwrap(),
            Scenario::LinearClaims
        );
        assert_eq!(
            Scenario::from_str(" additive-claims ").unwrap(),
            Scenario::AdditiveClaims
        );
        assert!(Scenario::from_str("3").is_err());
    }

    #[test]
    fn test_scenario_display_round_trips() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_str(&scenario.to_string()).unwrap(), scenario);
        }
    }

    #[test]
    fn test_showcase() {
        let report = run_showcase(&AppConfig::default()).unwrap();

        assert_eq!(report.requested, (5, 12));
        assert_eq!((report.selection.params.a, report.selection.params.b), (5, 13));
        assert!(matches!(
            report.selection.origin,
            SelectionOrigin::Searched { .. }
        ));

        assert_eq!(report.linear.len(), 2);
        assert_eq!(report.linear[0].values[0], 628.0 / 2_147_483_648.0);
        assert_eq!(report.linear[1].values[0], 633.0 / 2_147_483_648.0);
        assert_eq!(report.additive.values.len(), 10);
        assert_eq!(report.additive.values[0], 123.0 / 2_147_483_648.0);
        assert_eq!(report.inversive.values[0], 123.0 / 2_147_483_648.0);
        // 506317810 is even, and so is every later value
        assert_eq!(report.inversive_fallbacks, 8);
    }

    #[test]
    fn test_linear_claims_as_supplied() {
        let report = run_linear_claims(&AppConfig::default()).unwrap();
        assert_eq!(report.generator, "linear");
        assert_eq!(report.violations.len(), 5);
        assert_eq!(report.result.total_events, 21);
        assert_eq!(report.result.sample_size, 1_000);
    }

    #[test]
    fn test_linear_claims_enforced() {
        let mut config = AppConfig::default();
        config.linear_claims.enforce_full_period = true;

        let report = run_linear_claims(&config).unwrap();
        assert!(report.violations.is_empty());
        assert!(report.parameters.starts_with("a = 4294967296, b = 1"));
    }

    #[test]
    fn test_additive_claims() {
        let report = run_additive_claims(&AppConfig::default()).unwrap();
        assert_eq!(report.result.total_events, 32);
        assert_eq!(report.result.total_payout, 3_200_000.0);
    }

    #[test]
    fn test_inversive_claims() {
        let report = run_inversive_claims(&AppConfig::default()).unwrap();
        assert_eq!(report.result.total_events, 28);
        assert_eq!(report.fallbacks, Some(0));
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let config = AppConfig::default();
        assert_eq!(
            dispatch(Scenario::AdditiveClaims, &config).unwrap(),
            ScenarioReport::Claims(run_additive_claims(&config).unwrap())
        );
        assert!(matches!(
            dispatch(Scenario::Showcase, &config).unwrap(),
            ScenarioReport::Showcase(_)
        ));
    }

    #[test]
    fn test_dispatch_propagates_generator_errors() {
        let mut config = AppConfig::default();
        config.additive_claims.seeds = vec![1, 2, 3];
        config.additive_claims.modulus = 2;
        assert!(matches!(
            dispatch(Scenario::AdditiveClaims, &config),
            Err(crate::CliError::Generator(_))
        ));
    }

    #[test]
    fn test_exhausted_search_is_an_error() {
        let mut config = AppConfig::default();
        config.search.max_iterations = 1;
        config.showcase.b = 2;
        assert!(matches!(
            run_showcase(&config),
            Err(crate::CliError::Parameter(_))
        ));
    }
}
