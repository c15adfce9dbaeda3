//! # Element String Encoder
//!
//! Assembles a validated [`EncodingRequest`] into the GS1 data string a
//! symbol renderer consumes, plus its parenthesized human-readable form.
//!
//! ## Wire Format
//!
//! Elements are emitted in [`CANONICAL_ORDER`]. Each element is the AI code
//! followed by its value. A variable-length value is terminated by
//! [`GROUP_SEPARATOR`] unless it is the last element; fixed-length values
//! never are. The human-readable form wraps each code in parentheses and
//! joins elements with a single space.
//!
//! ```text
//! data:   01 07501234567890 17 251231 21 A        (spaces added for reading)
//! human:  (01)07501234567890 (17)251231 (21)A
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FieldError;
use crate::gtin::{digits_only, normalize_to_gtin14};
use crate::registry::{ApplicationIdentifier, CANONICAL_ORDER};
use crate::temporal::format_date_to_gs1;
use crate::validate::validate_gs1_params;
use crate::GROUP_SEPARATOR;

/// The semantic fields to encode.
///
/// Field names serialize in camelCase, matching
/// [`ApplicationIdentifier::semantic_name`]. Count fields accept JSON
/// numbers as well as strings. A field holding an empty string is treated
/// exactly like an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingRequest {
    /// Trade item GTIN (AI 01), 8–14 digits. Mandatory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Batch or lot number (AI 10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot: Option<String>,
    /// Serial number (AI 21).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// Production date (AI 11), ISO form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    /// Packaging date (AI 13), ISO form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging_date: Option<String>,
    /// Best before date (AI 15), ISO form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<String>,
    /// Expiration date (AI 17), ISO form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Count of contained trade items (AI 37).
    #[serde(
        default,
        deserialize_with = "string_or_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<String>,
    /// Variable count of items (AI 30).
    #[serde(
        default,
        deserialize_with = "string_or_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub var_count: Option<String>,
    /// Serial Shipping Container Code (AI 00).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sscc: Option<String>,
    /// GTIN of contained trade items (AI 02).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl EncodingRequest {
    /// A request carrying only a GTIN.
    pub fn with_gtin(gtin: impl Into<String>) -> Self {
        Self {
            gtin: Some(gtin.into()),
            ..Self::default()
        }
    }

    /// The raw value supplied for `ai`, or `None` if absent or empty.
    pub fn value_for(&self, ai: ApplicationIdentifier) -> Option<&str> {
        let slot = match ai {
            ApplicationIdentifier::Sscc => &self.sscc,
            ApplicationIdentifier::Gtin => &self.gtin,
            ApplicationIdentifier::ContentGtin => &self.content,
            ApplicationIdentifier::Lot => &self.lot,
            ApplicationIdentifier::ProductionDate => &self.production_date,
            ApplicationIdentifier::PackagingDate => &self.packaging_date,
            ApplicationIdentifier::BestBeforeDate => &self.best_before_date,
            ApplicationIdentifier::ExpirationDate => &self.expiration_date,
            ApplicationIdentifier::Serial => &self.serial,
            ApplicationIdentifier::VariableCount => &self.var_count,
            ApplicationIdentifier::Count => &self.count,
        };
        slot.as_deref().filter(|v| !v.is_empty())
    }

    /// Mutable access to the slot carrying `ai`'s value.
    pub fn slot_mut(&mut self, ai: ApplicationIdentifier) -> &mut Option<String> {
        match ai {
            ApplicationIdentifier::Sscc => &mut self.sscc,
            ApplicationIdentifier::Gtin => &mut self.gtin,
            ApplicationIdentifier::ContentGtin => &mut self.content,
            ApplicationIdentifier::Lot => &mut self.lot,
            ApplicationIdentifier::ProductionDate => &mut self.production_date,
            ApplicationIdentifier::PackagingDate => &mut self.packaging_date,
            ApplicationIdentifier::BestBeforeDate => &mut self.best_before_date,
            ApplicationIdentifier::ExpirationDate => &mut self.expiration_date,
            ApplicationIdentifier::Serial => &mut self.serial,
            ApplicationIdentifier::VariableCount => &mut self.var_count,
            ApplicationIdentifier::Count => &mut self.count,
        }
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Signed(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    }))
}

/// Output of [`generate_gs1_code`].
///
/// Either both strings are present and `errors` is empty, or both strings
/// are `None` and `errors` lists every validation failure.
///
/// Serializes in camelCase like [`EncodingRequest`], as `dataString`,
/// `humanReadableString` and `validationErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingResult {
    /// The data string, group separators included.
    pub data_string: Option<String>,
    /// `(AI)value` groups joined by spaces. Display only.
    #[serde(rename = "humanReadableString")]
    pub human_readable: Option<String>,
    /// Validation failures that prevented encoding.
    #[serde(rename = "validationErrors")]
    pub errors: Vec<FieldError>,
}

impl EncodingResult {
    fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            data_string: None,
            human_readable: None,
            errors,
        }
    }

    /// `true` when a data string was produced.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.data_string.is_some()
    }
}

/// The value `ai` contributes to the data string, after its transform.
fn wire_value(ai: ApplicationIdentifier, raw: &str) -> Option<String> {
    match ai {
        ApplicationIdentifier::Gtin | ApplicationIdentifier::ContentGtin => {
            normalize_to_gtin14(raw)
        }
        ApplicationIdentifier::Sscc => {
            let digits = digits_only(raw);
            (!digits.is_empty() && digits.len() <= ai.length())
                .then(|| format!("{digits:0>width$}", width = ai.length()))
        }
        ApplicationIdentifier::ProductionDate
        | ApplicationIdentifier::PackagingDate
        | ApplicationIdentifier::BestBeforeDate
        | ApplicationIdentifier::ExpirationDate => format_date_to_gs1(raw),
        ApplicationIdentifier::Count | ApplicationIdentifier::VariableCount => {
            raw.trim().parse::<u64>().ok().map(|n| n.to_string())
        }
        ApplicationIdentifier::Lot | ApplicationIdentifier::Serial => Some(raw.to_string()),
    }
}

/// Validate `request` and, if it passes, build its data string and
/// human-readable form.
pub fn generate_gs1_code(request: &EncodingRequest) -> EncodingResult {
    let report = validate_gs1_params(request);
    if !report.is_valid() {
        return EncodingResult::rejected(report.into_errors());
    }

    let elements: Vec<(ApplicationIdentifier, String)> = CANONICAL_ORDER
        .iter()
        .filter_map(|&ai| {
            let value = wire_value(ai, request.value_for(ai)?)?;
            Some((ai, value))
        })
        .collect();

    let mut data = String::new();
    let mut groups = Vec::with_capacity(elements.len());
    for (index, (ai, value)) in elements.iter().enumerate() {
        data.push_str(ai.code());
        data.push_str(value);
        if !ai.is_fixed_length() && index + 1 < elements.len() {
            data.push(GROUP_SEPARATOR);
        }
        groups.push(format!("({}){}", ai.code(), value));
    }

    tracing::debug!(
        element_count = elements.len(),
        data_len = data.len(),
        "assembled GS1 data string"
    );

    EncodingResult {
        data_string: Some(data),
        human_readable: Some(groups.join(" ")),
        errors: Vec::new(),
    }
}
