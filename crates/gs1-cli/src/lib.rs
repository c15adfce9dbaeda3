//! # gs1-cli: GS1 Label Code Command-Line Interface
//!
//! A clap-based front end over `gs1-core` for label printing scripts and
//! for checking scanner output by hand.
//!
//! ## Subcommands
//!
//! - `encode`: Build a data string from field flags or a request file
//! - `decode`: Render a scanned or stored data string as `(AI)value` groups
//! - `validate`: Report every problem with a request without encoding it
//! - `check-digit`: Compute or verify a GS1 mod-10 check digit
//! - `ais`: List the supported Application Identifiers
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the codec. Handlers delegate to
//!   `gs1-core`; no encoding rules live here.
//! - Every handler has an `execute` function writing to any `Write`, so
//!   output is testable without capturing stdout.
//! - Exit codes: 0 success, 1 rejected input, 2 operational error.

pub mod ais;
pub mod check_digit;
pub mod config;
pub mod decode;
pub mod encode;
pub mod fields;
pub mod validate;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use gs1_core::GROUP_SEPARATOR;

/// Replace every group separator in `data` with a visible glyph.
pub fn render_separators(data: &str, glyph: &str) -> String {
    data.replace(GROUP_SEPARATOR, glyph)
}

/// Turn visible glyphs typed on a terminal back into group separators.
pub fn restore_separators(raw: &str, glyph: &str) -> String {
    if glyph.is_empty() {
        return raw.to_string();
    }
    raw.replace(glyph, &GROUP_SEPARATOR.to_string())
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize JSON output")?;
    writeln!(out)?;
    Ok(())
}
