//! Run command implementation
//!
//! Dispatches one scenario and prints its report to stdout.

use tracing::info;

use crate::config::AppConfig;
use crate::scenario::{self, Scenario};
use crate::{report, Result};

/// Run the run command
pub fn run(scenario: Option<Scenario>, config: &AppConfig) -> Result<()> {
    let scenario = scenario.unwrap_or(config.scenario);
    info!("  Scenario: {}", scenario);
    info!("  Output format: {:?}", config.output.format);

    let text = execute(scenario, config)?;
    println!("{}", text);
    Ok(())
}

/// Dispatch `scenario` and render the report without printing it
pub fn execute(scenario: Scenario, config: &AppConfig) -> Result<String> {
    let outcome = scenario::dispatch(scenario, config)?;
    report::render(&outcome, &config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_execute_every_scenario() {
        let config = AppConfig::default();
        for scenario in Scenario::ALL {
            let text = execute(scenario, &config).unwrap();
            assert!(!text.is_empty(), "{} produced no output", scenario);
        }
    }

    #[test]
    fn test_execute_json() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;

        let text = execute(Scenario::InversiveClaims, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["fallbacks"], 0);
        assert_eq!(value["result"]["total_events"], 28);
    }

    #[test]
    fn test_execute_showcase_json() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;

        let text = execute(Scenario::Showcase, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["scenario"], "showcase");
        assert_eq!(value["selection"]["params"]["b"], 13);
        assert_eq!(value["selection"]["params"]["m"], 2_147_483_648_i64);
        assert_eq!(value["linear"].as_array().map(Vec::len), Some(2));
    }
}
