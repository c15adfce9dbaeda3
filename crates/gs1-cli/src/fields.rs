//! # Field Arguments
//!
//! Shared by `encode` and `validate`. A request is assembled from an
//! optional JSON or YAML file, then each field flag given on the command
//! line replaces the file's value for that field.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gs1_core::{ApplicationIdentifier, EncodingRequest};

/// Label field flags.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Trade item number, 8 to 14 digits (AI 01).
    #[arg(long)]
    pub gtin: Option<String>,

    /// Batch or lot number, up to 20 characters (AI 10).
    #[arg(long)]
    pub lot: Option<String>,

    /// Serial number, up to 20 characters (AI 21).
    #[arg(long)]
    pub serial: Option<String>,

    /// Expiration date as YYYY-MM-DD (AI 17).
    #[arg(long, value_name = "DATE")]
    pub expiration_date: Option<String>,

    /// Best before date as YYYY-MM-DD (AI 15).
    #[arg(long, value_name = "DATE")]
    pub best_before_date: Option<String>,

    /// Packaging date as YYYY-MM-DD (AI 13).
    #[arg(long, value_name = "DATE")]
    pub packaging_date: Option<String>,

    /// Production date as YYYY-MM-DD (AI 11).
    #[arg(long, value_name = "DATE")]
    pub production_date: Option<String>,

    /// Count of trade items, 1 to 99999999 (AI 37).
    #[arg(long)]
    pub count: Option<String>,

    /// Variable count, 1 to 99999999 (AI 30).
    #[arg(long)]
    pub var_count: Option<String>,

    /// Serial shipping container code, up to 18 digits (AI 00).
    #[arg(long)]
    pub sscc: Option<String>,

    /// GTIN of contained trade items (AI 02).
    #[arg(long)]
    pub content: Option<String>,

    /// Request file (`.json`, otherwise read as YAML).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl FieldArgs {
    /// Flag value for one AI, if given.
    fn flag(&self, ai: ApplicationIdentifier) -> Option<&String> {
        match ai {
            ApplicationIdentifier::Sscc => self.sscc.as_ref(),
            ApplicationIdentifier::Gtin => self.gtin.as_ref(),
            ApplicationIdentifier::ContentGtin => self.content.as_ref(),
            ApplicationIdentifier::Lot => self.lot.as_ref(),
            ApplicationIdentifier::ProductionDate => self.production_date.as_ref(),
            ApplicationIdentifier::PackagingDate => self.packaging_date.as_ref(),
            ApplicationIdentifier::BestBeforeDate => self.best_before_date.as_ref(),
            ApplicationIdentifier::ExpirationDate => self.expiration_date.as_ref(),
            ApplicationIdentifier::Serial => self.serial.as_ref(),
            ApplicationIdentifier::VariableCount => self.var_count.as_ref(),
            ApplicationIdentifier::Count => self.count.as_ref(),
        }
    }

    /// Build the request: file values first, flags on top.
    pub fn to_request(&self) -> Result<EncodingRequest> {
        let mut request = match &self.input {
            Some(path) => load_request(path)?,
            None => EncodingRequest::default(),
        };
        for &ai in ApplicationIdentifier::all() {
            if let Some(value) = self.flag(ai) {
                *request.slot_mut(ai) = Some(value.clone());
            }
        }
        Ok(request)
    }
}

/// Read a request file. `.json` files are parsed as JSON, anything else
/// as YAML.
pub fn load_request(path: &Path) -> Result<EncodingRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let request = if is_json {
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON request {}", path.display()))?
    } else {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse YAML request {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "loaded request file");
    Ok(request)
}
