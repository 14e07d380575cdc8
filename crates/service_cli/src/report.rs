//! Report rendering
//!
//! Pure functions from structured results to `String`. Commands decide where
//! the text goes.

use congruent_core::params::{Selection, SelectionOrigin};
use serde::Serialize;

use crate::commands::check::CheckReport;
use crate::config::{OutputConfig, OutputFormat};
use crate::scenario::{ClaimsReport, LabelledSequence, ScenarioReport, ShowcaseReport};
use crate::Result;

/// Render a scenario report in the configured format
pub fn render(report: &ScenarioReport, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => render_json(report),
        OutputFormat::Table => Ok(match report {
            ScenarioReport::Showcase(showcase) => format_showcase(showcase, output),
            ScenarioReport::Claims(claims) => format_claims(claims),
        }),
    }
}

/// Pretty-printed JSON for any serialisable report
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// List a sequence rounded to `decimals` places, optionally 1-based indexed
pub fn format_sequence(values: &[f64], decimals: usize, show_index: bool) -> String {
    let mut out = String::from("Rounded sequence:\n");
    for (i, x) in values.iter().enumerate() {
        if show_index {
            out.push_str(&format!("{}: {:.*}\n", i + 1, decimals, x));
        } else {
            out.push_str(&format!("{:.*}\n", decimals, x));
        }
    }
    out
}

/// Describe how a parameter pair was obtained
pub fn format_selection(requested: (i64, i64), selection: &Selection) -> String {
    let (a, b) = requested;
    let mut out = format!(
        "Checking parameters: a = {}, b = {}, m = {}\n",
        a, b, selection.params.m
    );
    match selection.origin {
        SelectionOrigin::Supplied => out.push_str("Parameters are valid\n"),
        SelectionOrigin::Searched { iterations } => {
            out.push_str("Parameters failed the full-period check, searching for valid ones\n");
            out.push_str(&format!(
                "Found valid parameters: a = {}, b = {} ({} iterations)\n",
                selection.params.a, selection.params.b, iterations
            ));
        }
    }
    out
}

fn format_labelled(sequence: &LabelledSequence, output: &OutputConfig) -> String {
    format!(
        "\n{}\n{}",
        sequence.label,
        format_sequence(&sequence.values, output.decimals, output.show_index)
    )
}

/// Text rendering of the showcase scenario
pub fn format_showcase(report: &ShowcaseReport, output: &OutputConfig) -> String {
    let mut out = format_selection(report.requested, &report.selection);

    out.push_str("\nLinear congruential generator:\n");
    for sequence in &report.linear {
        out.push_str(&format_labelled(sequence, output));
    }

    out.push_str("\nAdditive congruential generator:\n");
    out.push_str(&format_labelled(&report.additive, output));

    out.push_str("\nInversive congruential generator:\n");
    out.push_str(&format_labelled(&report.inversive, output));
    if report.inversive_fallbacks > 0 {
        out.push_str(&format!(
            "No modular inverse found {} times, used 1 instead\n",
            report.inversive_fallbacks
        ));
    }

    out
}

/// Text rendering of a claims scenario
pub fn format_claims(report: &ClaimsReport) -> String {
    let result = &report.result;
    let mut out = format!("{} generator: {}\n", capitalise(report.generator), report.parameters);

    for violation in &report.violations {
        out.push_str(&format!("warning: not full-period, {}\n", violation));
    }
    if let Some(fallbacks) = report.fallbacks.filter(|&n| n > 0) {
        out.push_str(&format!("No modular inverse found {} times, used 1 instead\n", fallbacks));
    }

    let rows = [
        ("Clients", result.sample_size.to_string()),
        ("Event probability", report.claims.p_event.to_string()),
        ("Payout per claim", format!("{:.2}", report.claims.payout)),
        (
            "Claims",
            format!("{} of {}", result.total_events, result.sample_size),
        ),
        ("Total payout", format!("{:.2}", result.total_payout)),
        ("Mean payout per client", format!("{:.2}", result.mean_payout)),
        (
            "Empirical probability",
            format!("{:.4}", result.empirical_probability),
        ),
    ];
    out.push_str(&table(&rows));
    out
}

/// Text rendering of a parameter check
pub fn format_check(report: &CheckReport) -> String {
    let mut out = format!(
        "a = {}, b = {}, m = {}: {}\n",
        report.a,
        report.b,
        report.m,
        if report.valid {
            "full period"
        } else {
            "not full period"
        }
    );
    for violation in &report.violations {
        out.push_str(&format!("  - {}\n", violation));
    }
    if let Some(outcome) = &report.search {
        match outcome.pair() {
            Some((a, b)) => out.push_str(&format!(
                "Next valid pair: a = {}, b = {} ({} iterations)\n",
                a,
                b,
                outcome.iterations()
            )),
            None => out.push_str(&format!(
                "No valid pair within {} iterations\n",
                outcome.iterations()
            )),
        }
    }
    if let Some(period) = &report.period {
        match period.length {
            Some(length) => out.push_str(&format!(
                "Period from seed {}: {}\n",
                period.seed, length
            )),
            None => out.push_str(&format!(
                "Seed {} does not recur within {} steps\n",
                period.seed, period.limit
            )),
        }
    }
    out
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Two-column box table
fn table(rows: &[(&str, String)]) -> String {
    let left = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let right = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |l: char, m: char, r: char| {
        format!(
            "{}{}{}{}{}\n",
            l,
            "─".repeat(left + 2),
            m,
            "─".repeat(right + 2),
            r
        )
    };

    let mut out = rule('┌', '┬', '┐');
    for (key, value) in rows {
        out.push_str(&format!("│ {:<left$} │ {:>right$} │\n", key, value));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::scenario::{run_additive_claims, run_linear_claims, run_showcase};

    #[test]
    fn test_format_sequence_with_index() {
        let text = format_sequence(&[0.5, 0.123456789], 4, true);
        assert_eq!(text, "Rounded sequence:\n1: 0.5000\n2: 0.1235\n");
    }

    #[test]
    fn test_format_sequence_without_index() {
        let text = format_sequence(&[0.25], 2, false);
        assert_eq!(text, "Rounded sequence:\n0.25\n");
    }

    #[test]
    fn test_format_showcase() {
        let config = AppConfig::default();
        let report = run_showcase(&config).unwrap();
        let text = format_showcase(&report, &config.output);

        assert!(text.contains("Checking parameters: a = 5, b = 12, m = 2147483648"));
        assert!(text.contains("Found valid parameters: a = 5, b = 13"));
        assert!(text.contains("linear, seed 124"));
        assert!(text.contains("1: 0.00000029"));
        assert!(text.contains("Inversive congruential generator"));
    }

    #[test]
    fn test_format_claims() {
        let report = run_additive_claims(&AppConfig::default()).unwrap();
        let text = format_claims(&report);

        assert!(text.starts_with("Additive generator: m = 4294967291"));
        assert!(text.contains("32 of 1000"));
        assert!(text.contains("3200000.00"));
        assert!(text.contains("3200.00"));
        assert!(text.contains("0.0320"));
        assert!(text.contains('┌') && text.contains('┘'));
    }

    #[test]
    fn test_format_claims_lists_violations() {
        let report = run_linear_claims(&AppConfig::default()).unwrap();
        let text = format_claims(&report);
        assert!(text.contains("warning: not full-period"));
        assert!(text.contains("prime factor 65537"));
    }

    #[test]
    fn test_render_json() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let report = ScenarioReport::Claims(run_additive_claims(&config).unwrap());

        let json = render(&report, &config.output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scenario"], "claims");
        assert_eq!(value["generator"], "additive");
        assert_eq!(value["result"]["total_events"], 32);
        assert_eq!(value["claims"]["payout"], 100_000.0);
    }

    #[test]
    fn test_table_alignment() {
        let text = table(&[("a", "1".to_string()), ("long key", "12345".to_string())]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert_eq!(lines[1], "│ a        │     1 │");
    }

    #[test]
    fn test_capitalise() {
        assert_eq!(capitalise("linear"), "Linear");
        assert_eq!(capitalise(""), "");
    }
}
