//! # AIs Subcommand
//!
//! Lists the supported Application Identifiers with their lengths and
//! value kinds.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use gs1_core::{list_supported_ais, ValueKind};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `gs1 ais` subcommand.
#[derive(Args, Debug)]
pub struct AisArgs {}

/// Execute the ais subcommand against stdout.
pub fn run_ais(args: &AisArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    execute(args, config, &mut stdout.lock())
}

/// Execute the ais subcommand, writing to `out`.
pub fn execute<W: Write>(_args: &AisArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let registry = list_supported_ais();
    match config.format {
        OutputFormat::Json => crate::write_json(out, &registry)?,
        OutputFormat::Text => {
            writeln!(out, "{:<4} {:<16} {:<20} {:<6} KIND", "AI", "FIELD", "LABEL", "LENGTH")?;
            for descriptor in registry {
                let length = if descriptor.is_fixed_length {
                    descriptor.length.to_string()
                } else {
                    format!("..{}", descriptor.length)
                };
                let kind = match descriptor.kind {
                    ValueKind::Numeric => "numeric",
                    ValueKind::Date => "date",
                    ValueKind::Alphanumeric => "alphanumeric",
                };
                writeln!(
                    out,
                    "{:<4} {:<16} {:<20} {:<6} {kind}",
                    descriptor.code, descriptor.semantic_name, descriptor.display_label, length
                )?;
            }
        }
    }
    Ok(0)
}
