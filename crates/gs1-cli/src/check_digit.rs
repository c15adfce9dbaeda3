//! # Check-Digit Subcommand
//!
//! Computes the GS1 mod-10 check digit for a payload, or with `--verify`
//! checks that the last digit of a complete code is correct.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use gs1_core::{calculate_check_digit, verify_check_digit};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `gs1 check-digit` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// Digits to check. Non-digit characters are ignored.
    #[arg(value_name = "DIGITS")]
    pub digits: String,

    /// Treat the last digit as a check digit and verify it.
    #[arg(long)]
    pub verify: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
enum CheckDigitOutput<'a> {
    #[serde(rename_all = "camelCase")]
    Calculate { payload: &'a str, check_digit: u8 },
    Verify { code: &'a str, valid: bool },
}

/// Execute the check-digit subcommand against stdout.
///
/// Returns exit code: 0 on success, 1 when `--verify` finds a mismatch.
pub fn run_check_digit(args: &CheckDigitArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    execute(args, config, &mut stdout.lock())
}

/// Execute the check-digit subcommand, writing to `out`.
pub fn execute<W: Write>(args: &CheckDigitArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let digits: String = args.digits.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        bail!("no digits in input {:?}", args.digits);
    }

    if args.verify {
        let valid = verify_check_digit(&digits);
        match config.format {
            OutputFormat::Json => crate::write_json(
                out,
                &CheckDigitOutput::Verify {
                    code: &digits,
                    valid,
                },
            )?,
            OutputFormat::Text if valid => writeln!(out, "OK: {digits}")?,
            OutputFormat::Text => writeln!(out, "FAIL: {digits} has an incorrect check digit")?,
        }
        return Ok(if valid { 0 } else { 1 });
    }

    let check_digit = calculate_check_digit(&digits);
    match config.format {
        OutputFormat::Json => crate::write_json(
            out,
            &CheckDigitOutput::Calculate {
                payload: &digits,
                check_digit,
            },
        )?,
        OutputFormat::Text => writeln!(out, "{check_digit}")?,
    }
    Ok(0)
}
