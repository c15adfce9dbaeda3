//! # Decode Subcommand
//!
//! Renders a scanned or stored data string as `(AI)value` groups. The
//! input may spell group separators with the configured glyph, and may
//! carry a leading symbology identifier such as `]C1`.
//!
//! Decoding is best effort: unrecognised characters are skipped, so this
//! command never fails on data.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use gs1_core::{decode_elements, DecodedElement};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `gs1 decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Data string to decode.
    #[arg(value_name = "RAW")]
    pub raw: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DecodeOutput {
    #[serde(rename = "humanReadableString")]
    human_readable: String,
    elements: Vec<DecodedElement>,
}

/// Execute the decode subcommand against stdout. Always exits 0.
pub fn run_decode(args: &DecodeArgs, config: &CliConfig) -> Result<u8> {
    let stdout = std::io::stdout();
    execute(args, config, &mut stdout.lock())
}

/// Execute the decode subcommand, writing to `out`.
pub fn execute<W: Write>(args: &DecodeArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let raw = crate::restore_separators(&args.raw, &config.separator_glyph);
    let elements = decode_elements(&raw);
    let human_readable = elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(element_count = elements.len(), "decoded data string");

    match config.format {
        OutputFormat::Json => crate::write_json(
            out,
            &DecodeOutput {
                human_readable,
                elements,
            },
        )?,
        OutputFormat::Text => {
            writeln!(out, "{human_readable}")?;
            for element in &elements {
                writeln!(
                    out,
                    "  ({}) {}: {}",
                    element.ai.code(),
                    element.ai.display_label(),
                    element.display_value()
                )?;
            }
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(raw: &str, format: OutputFormat) -> String {
        let config = CliConfig {
            format,
            ..CliConfig::default()
        };
        let mut out = Vec::new();
        let code = execute(
            &DecodeArgs {
                raw: raw.to_string(),
            },
            &config,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_decode_with_glyph_separators() {
        let out = run("]C1010750123456789010L1<GS>21A", OutputFormat::Text);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("(01)07501234567890 (10)L1 (21)A"));
        assert_eq!(lines.next(), Some("  (01) GTIN: 07501234567890"));
        assert_eq!(lines.next(), Some("  (10) Lot: L1"));
        assert_eq!(lines.next(), Some("  (21) Serial: A"));
    }

    #[test]
    fn test_decode_shows_dates_as_iso() {
        let out = run("01075012345678901725123121A", OutputFormat::Text);
        assert!(out.contains("  (17) Expiration date: 2025-12-31"));
    }

    #[test]
    fn test_decode_json() {
        let out = run("0107501234567890", OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["humanReadableString"], "(01)07501234567890");
        assert_eq!(json["elements"][0]["value"], "07501234567890");
    }

    #[test]
    fn test_human_line_agrees_with_library_formatter() {
        let raw = "]C1010750123456789010L1\u{1D}21A\u{1D}3712";
        let out = run(raw, OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json["humanReadableString"],
            gs1_core::format_gs1_human_readable(raw)
        );
        assert_eq!(json["elements"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        let out = run("zz", OutputFormat::Text);
        assert_eq!(out, "\n");
    }
}
