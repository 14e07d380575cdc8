//! Congruent CLI - Congruential Generators and Claim Simulation
//!
//! This is the operational entry point for the congruent_core and
//! congruent_sim crates.
//!
//! # Commands
//!
//! - `congruent run [--scenario <name>]` - Run a scenario and print its report
//! - `congruent check -a <a> -b <b> -m <m>` - Check a parameter triple for full period
//!
//! # Configuration
//!
//! Settings are layered: defaults, then `--config <file>` (TOML), then
//! `CONGRUENT_*` environment variables, then command-line flags.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the core and
//! simulation layers and owns all presentation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;
mod scenario;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, OutputFormat};
use scenario::Scenario;

/// Congruential generator toolkit CLI
#[derive(Parser)]
#[command(name = "congruent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug log level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CONGRUENT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print its report
    Run {
        /// Scenario to run (defaults to the configured one)
        #[arg(short, long, value_enum)]
        scenario: Option<Scenario>,
    },

    /// Check a parameter triple against the full-period conditions
    #[command(allow_negative_numbers = true)]
    Check {
        /// Multiplier
        #[arg(short)]
        a: i64,

        /// Increment
        #[arg(short)]
        b: i64,

        /// Modulus
        #[arg(short)]
        m: i64,

        /// Search for the next full-period pair from (a, b)
        #[arg(long)]
        search: bool,

        /// Measure the period from --seed (small moduli only)
        #[arg(long)]
        measure_period: bool,

        /// Seed for --measure-period
        #[arg(long, default_value_t = 0)]
        seed: i64,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let scenario = match &cli.command {
        Commands::Run { scenario } => *scenario,
        Commands::Check { .. } => None,
    };
    let args = CliArgs {
        config_file: cli.config,
        log_level: cli.log_level,
        verbose: cli.verbose,
        format: cli.format,
        scenario,
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        scenario = %config.scenario,
        max_iterations = config.search.max_iterations,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Run { .. } => commands::run::run(None, &config),
        Commands::Check {
            a,
            b,
            m,
            search,
            measure_period,
            seed,
        } => commands::check::run(
            commands::check::CheckArgs {
                a,
                b,
                m,
                search,
                measure_period,
                seed,
            },
            &config,
        ),
    }
}
