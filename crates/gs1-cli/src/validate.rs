//! # Validate Subcommand
//!
//! Reports every problem with a request without encoding it. Takes the
//! same field flags and `--input` file as `encode`.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use gs1_core::validate_gs1_params;

use crate::config::{CliConfig, OutputFormat};
use crate::fields::FieldArgs;

/// Arguments for the `gs1 validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Execute the validate subcommand against stdout.
///
/// Returns exit code: 0 when the request is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    execute(args, config, &mut stdout.lock())
}

/// Execute the validate subcommand, writing to `out`.
pub fn execute<W: Write>(args: &ValidateArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let request = args.fields.to_request()?;
    let report = validate_gs1_params(&request);

    match config.format {
        OutputFormat::Json => crate::write_json(out, &report)?,
        OutputFormat::Text if report.is_valid() => writeln!(out, "OK: request is valid")?,
        OutputFormat::Text => {
            for error in report.errors() {
                writeln!(out, "FAIL: {error}")?;
            }
            writeln!(out, "\n{} problem(s) found.", report.errors().len())?;
        }
    }

    Ok(if report.is_valid() { 0 } else { 1 })
}
