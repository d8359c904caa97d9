//! # iban CLI entry point
//!
//! Parses command-line arguments, resolves output settings and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use iban_cli::bic::{run_bic, BicArgs};
use iban_cli::build::{run_build, BuildArgs};
use iban_cli::check_digit::{run_check_digit, CheckDigitArgs};
use iban_cli::config::{CliConfig, OutputFormat, Settings};
use iban_cli::countries::{run_countries, CountriesArgs};
use iban_cli::validate::{run_validate, ValidateArgs};

/// IBAN and BIC validation toolkit.
///
/// Validates and decomposes IBANs (ISO 13616) and BICs (ISO 9362), computes
/// IBAN check digits, and composes IBANs from their national fields.
#[derive(Parser, Debug)]
#[command(name = "iban", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format. Overrides the configuration file.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Strip whitespace and upper-case input before validating.
    #[arg(long, global = true)]
    normalize: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate and decompose IBANs.
    Validate(ValidateArgs),

    /// Validate and decompose BICs.
    Bic(BicArgs),

    /// Compute the check digits for a country code and BBAN.
    CheckDigit(CheckDigitArgs),

    /// Compose an IBAN from field values.
    Build(BuildArgs),

    /// List supported countries and their BBAN layouts.
    Countries(CountriesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "iban CLI starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let file = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            CliConfig::load(path)?
        }
        None => CliConfig::default(),
    };
    let settings = Settings::resolve(cli.format, cli.normalize, &file);
    tracing::debug!(format = ?settings.format, normalize = settings.normalize, "resolved settings");

    match &cli.command {
        Commands::Validate(args) => run_validate(args, &settings),
        Commands::Bic(args) => run_bic(args, &settings),
        Commands::CheckDigit(args) => run_check_digit(args, &settings),
        Commands::Build(args) => run_build(args, &settings),
        Commands::Countries(args) => run_countries(args, &settings),
    }
}
