//! # gs1 CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gs1_cli::ais::{run_ais, AisArgs};
use gs1_cli::check_digit::{run_check_digit, CheckDigitArgs};
use gs1_cli::config::{CliConfig, OutputFormat};
use gs1_cli::decode::{run_decode, DecodeArgs};
use gs1_cli::encode::{run_encode, EncodeArgs};
use gs1_cli::validate::{run_validate, ValidateArgs};

/// GS1-128 label codes.
///
/// Encodes label fields into GS1-128 data strings, decodes scanned strings
/// back into `(AI)value` groups, validates requests, and computes check
/// digits.
#[derive(Parser, Debug)]
#[command(name = "gs1", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the config file and GS1_OUTPUT_FORMAT.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode label fields into a GS1-128 data string.
    Encode(EncodeArgs),

    /// Decode a data string into `(AI)value` groups.
    Decode(DecodeArgs),

    /// Validate label fields without encoding them.
    Validate(ValidateArgs),

    /// Compute or verify a GS1 mod-10 check digit.
    CheckDigit(CheckDigitArgs),

    /// List the supported Application Identifiers.
    Ais(AisArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("gs1 CLI starting");

    let result = CliConfig::load(cli.config.as_deref())
        .context("failed to load configuration")
        .and_then(|mut config| {
            if let Some(format) = cli.format {
                config.format = format;
            }
            tracing::debug!(format = ?config.format, glyph = %config.separator_glyph, "resolved configuration");
            dispatch(&cli.command, &config)
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn dispatch(command: &Commands, config: &CliConfig) -> anyhow::Result<u8> {
    match command {
        Commands::Encode(args) => run_encode(args, config),
        Commands::Decode(args) => run_decode(args, config),
        Commands::Validate(args) => run_validate(args, config),
        Commands::CheckDigit(args) => run_check_digit(args, config),
        Commands::Ais(args) => run_ais(args, config),
    }
}
