//! # Encode Subcommand
//!
//! Builds a GS1-128 data string from field flags and/or a request file.
//!
//! Text output prints the data string with each group separator shown as
//! the configured glyph, followed by the human-readable line. JSON output
//! prints the full encoding result.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use gs1_core::{generate_gs1_code, EncodingResult, FieldError};

use crate::config::{CliConfig, OutputFormat};
use crate::fields::FieldArgs;

/// Arguments for the `gs1 encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// JSON shape of an encode run. Keys match the library's `EncodingResult`,
/// plus `display` with separators rendered as the configured glyph.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodeOutput<'a> {
    data_string: Option<&'a str>,
    display: Option<String>,
    #[serde(rename = "humanReadableString")]
    human_readable: Option<&'a str>,
    #[serde(rename = "validationErrors")]
    errors: &'a [FieldError],
}

/// Execute the encode subcommand against stdout.
///
/// Returns exit code: 0 on success, 1 when the request is rejected.
pub fn run_encode(args: &EncodeArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    execute(args, config, &mut stdout.lock())
}

/// Execute the encode subcommand, writing to `out`.
pub fn execute<W: Write>(args: &EncodeArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let request = args.fields.to_request()?;
    let result = generate_gs1_code(&request);

    match config.format {
        OutputFormat::Json => write_json_result(&result, config, out)?,
        OutputFormat::Text => write_text_result(&result, config, out)?,
    }

    if result.is_ok() {
        tracing::info!("encoded request");
        Ok(0)
    } else {
        tracing::info!(error_count = result.errors.len(), "request rejected");
        Ok(1)
    }
}

fn write_text_result<W: Write>(
    result: &EncodingResult,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    if let (Some(data), Some(human)) = (&result.data_string, &result.human_readable) {
        writeln!(
            out,
            "data:  {}",
            crate::render_separators(data, &config.separator_glyph)
        )?;
        writeln!(out, "human: {human}")?;
        return Ok(());
    }
    for error in &result.errors {
        writeln!(out, "error: {error}")?;
    }
    Ok(())
}

fn write_json_result<W: Write>(
    result: &EncodingResult,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let output = EncodeOutput {
        data_string: result.data_string.as_deref(),
        display: result
            .data_string
            .as_deref()
            .map(|data| crate::render_separators(data, &config.separator_glyph)),
        human_readable: result.human_readable.as_deref(),
        errors: &result.errors,
    };
    crate::write_json(out, &output)
}
