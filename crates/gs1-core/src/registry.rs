//! # Application Identifier Registry
//!
//! Defines the `ApplicationIdentifier` enum with every AI this codec can
//! emit or read, the static descriptor table behind [`get_ai_config`], and
//! the canonical emission order used by the encoder.
//!
//! Every `match` on `ApplicationIdentifier` is exhaustive. Adding an AI
//! forces the registry, the encoder's field extraction, and the validator
//! to handle it at compile time.
//!
//! ## Wire Rules
//!
//! Fixed-length AIs are concatenated with no separator. Variable-length AIs
//! are followed by the group separator unless they are the last element of
//! the data string. The registry only records the length class; the encoder
//! applies the rule.

use serde::Serialize;
use std::str::FromStr;

use crate::error::Gs1Error;

/// How the value of an AI is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Digits only; fixed numeric fields are zero-padded on the left.
    Numeric,
    /// Six-digit `YYMMDD` calendar date.
    Date,
    /// GS1 alphanumeric text (lot and serial numbers).
    Alphanumeric,
}

/// Every Application Identifier supported by the codec.
///
/// Variants are declared in ascending AI code order, which is also the
/// order of [`list_supported_ais`].
///
/// | AI | Variant | Length |
/// |----|---------|--------|
/// | 00 | `Sscc` | fixed 18 |
/// | 01 | `Gtin` | fixed 14 |
/// | 02 | `ContentGtin` | fixed 14 |
/// | 10 | `Lot` | variable ≤ 20 |
/// | 11 | `ProductionDate` | fixed 6 |
/// | 13 | `PackagingDate` | fixed 6 |
/// | 15 | `BestBeforeDate` | fixed 6 |
/// | 17 | `ExpirationDate` | fixed 6 |
/// | 21 | `Serial` | variable ≤ 20 |
/// | 30 | `VariableCount` | variable ≤ 8 |
/// | 37 | `Count` | variable ≤ 8 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApplicationIdentifier {
    /// Serial Shipping Container Code of a logistics unit.
    #[serde(rename = "sscc")]
    Sscc,
    /// GTIN of the trade item.
    #[serde(rename = "gtin")]
    Gtin,
    /// GTIN of the trade items contained in a logistics unit.
    #[serde(rename = "content")]
    ContentGtin,
    /// Batch or lot number.
    #[serde(rename = "lot")]
    Lot,
    /// Production date.
    #[serde(rename = "productionDate")]
    ProductionDate,
    /// Packaging date.
    #[serde(rename = "packagingDate")]
    PackagingDate,
    /// Best before date.
    #[serde(rename = "bestBeforeDate")]
    BestBeforeDate,
    /// Expiration date.
    #[serde(rename = "expirationDate")]
    ExpirationDate,
    /// Serial number.
    #[serde(rename = "serial")]
    Serial,
    /// Variable count of items.
    #[serde(rename = "varCount")]
    VariableCount,
    /// Count of trade items contained in a logistics unit.
    #[serde(rename = "count")]
    Count,
}

/// Number of supported Application Identifiers.
pub const AI_COUNT: usize = 11;

/// Order in which the encoder emits AIs.
///
/// GS1 does not mandate an order on the wire; fixing one keeps the encoder's
/// output deterministic.
pub const CANONICAL_ORDER: [ApplicationIdentifier; AI_COUNT] = [
    ApplicationIdentifier::Sscc,
    ApplicationIdentifier::Gtin,
    ApplicationIdentifier::ContentGtin,
    ApplicationIdentifier::ExpirationDate,
    ApplicationIdentifier::BestBeforeDate,
    ApplicationIdentifier::PackagingDate,
    ApplicationIdentifier::ProductionDate,
    ApplicationIdentifier::Lot,
    ApplicationIdentifier::Serial,
    ApplicationIdentifier::Count,
    ApplicationIdentifier::VariableCount,
];

/// Immutable description of one AI's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDescriptor {
    /// The enum variant this row describes.
    #[serde(skip)]
    pub ai: ApplicationIdentifier,
    /// The AI digits as they appear on the wire.
    pub code: &'static str,
    /// Request field name carrying the value.
    pub semantic_name: &'static str,
    /// Exact length for fixed AIs, maximum length for variable AIs.
    pub length: usize,
    /// Whether the value has a fixed length (no separator needed).
    pub is_fixed_length: bool,
    /// How the value is interpreted.
    pub kind: ValueKind,
    /// Human-facing name, used in messages only.
    pub display_label: &'static str,
}

static REGISTRY: [AiDescriptor; AI_COUNT] = [
    ApplicationIdentifier::Sscc.describe(),
    ApplicationIdentifier::Gtin.describe(),
    ApplicationIdentifier::ContentGtin.describe(),
    ApplicationIdentifier::Lot.describe(),
    ApplicationIdentifier::ProductionDate.describe(),
    ApplicationIdentifier::PackagingDate.describe(),
    ApplicationIdentifier::BestBeforeDate.describe(),
    ApplicationIdentifier::ExpirationDate.describe(),
    ApplicationIdentifier::Serial.describe(),
    ApplicationIdentifier::VariableCount.describe(),
    ApplicationIdentifier::Count.describe(),
];

impl ApplicationIdentifier {
    /// Returns all supported AIs in ascending code order.
    pub fn all() -> &'static [ApplicationIdentifier] {
        &[
            Self::Sscc,
            Self::Gtin,
            Self::ContentGtin,
            Self::Lot,
            Self::ProductionDate,
            Self::PackagingDate,
            Self::BestBeforeDate,
            Self::ExpirationDate,
            Self::Serial,
            Self::VariableCount,
            Self::Count,
        ]
    }

    /// The AI digits, e.g. `"01"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sscc => "00",
            Self::Gtin => "01",
            Self::ContentGtin => "02",
            Self::Lot => "10",
            Self::ProductionDate => "11",
            Self::PackagingDate => "13",
            Self::BestBeforeDate => "15",
            Self::ExpirationDate => "17",
            Self::Serial => "21",
            Self::VariableCount => "30",
            Self::Count => "37",
        }
    }

    /// The request field name, matching the serde name of the variant.
    pub const fn semantic_name(self) -> &'static str {
        match self {
            Self::Sscc => "sscc",
            Self::Gtin => "gtin",
            Self::ContentGtin => "content",
            Self::Lot => "lot",
            Self::ProductionDate => "productionDate",
            Self::PackagingDate => "packagingDate",
            Self::BestBeforeDate => "bestBeforeDate",
            Self::ExpirationDate => "expirationDate",
            Self::Serial => "serial",
            Self::VariableCount => "varCount",
            Self::Count => "count",
        }
    }

    /// Exact length for fixed AIs, maximum length for variable AIs.
    pub const fn length(self) -> usize {
        match self {
            Self::Sscc => 18,
            Self::Gtin | Self::ContentGtin => 14,
            Self::ProductionDate
            | Self::PackagingDate
            | Self::BestBeforeDate
            | Self::ExpirationDate => 6,
            Self::Lot | Self::Serial => 20,
            Self::VariableCount | Self::Count => 8,
        }
    }

    /// Whether the value is fixed-length and therefore never followed by a separator.
    pub const fn is_fixed_length(self) -> bool {
        match self {
            Self::Sscc
            | Self::Gtin
            | Self::ContentGtin
            | Self::ProductionDate
            | Self::PackagingDate
            | Self::BestBeforeDate
            | Self::ExpirationDate => true,
            Self::Lot | Self::Serial | Self::VariableCount | Self::Count => false,
        }
    }

    /// How the value is interpreted.
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::Sscc
            | Self::Gtin
            | Self::ContentGtin
            | Self::VariableCount
            | Self::Count => ValueKind::Numeric,
            Self::ProductionDate
            | Self::PackagingDate
            | Self::BestBeforeDate
            | Self::ExpirationDate => ValueKind::Date,
            Self::Lot | Self::Serial => ValueKind::Alphanumeric,
        }
    }

    /// Human-facing name used in validation messages.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Sscc => "SSCC",
            Self::Gtin => "GTIN",
            Self::ContentGtin => "Content GTIN",
            Self::Lot => "Lot",
            Self::ProductionDate => "Production date",
            Self::PackagingDate => "Packaging date",
            Self::BestBeforeDate => "Best before date",
            Self::ExpirationDate => "Expiration date",
            Self::Serial => "Serial",
            Self::VariableCount => "Variable count",
            Self::Count => "Count",
        }
    }

    const fn describe(self) -> AiDescriptor {
        AiDescriptor {
            ai: self,
            code: self.code(),
            semantic_name: self.semantic_name(),
            length: self.length(),
            is_fixed_length: self.is_fixed_length(),
            kind: self.kind(),
            display_label: self.display_label(),
        }
    }

    /// The registry row for this AI.
    pub fn descriptor(self) -> &'static AiDescriptor {
        // Variants are declared in registry order.
        &REGISTRY[self as usize]
    }

    /// Look up an AI by its wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|ai| ai.code() == code)
    }
}

impl std::fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ApplicationIdentifier {
    type Err = Gs1Error;

    /// Parse an AI from its wire code (`"01"`, `"17"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Gs1Error::UnknownAi(s.to_string()))
    }
}

/// Look up the descriptor for an AI code. Unknown codes return `None`.
pub fn get_ai_config(code: &str) -> Option<&'static AiDescriptor> {
    ApplicationIdentifier::from_code(code).map(ApplicationIdentifier::descriptor)
}

/// All supported AI descriptors in ascending code order.
pub fn list_supported_ais() -> &'static [AiDescriptor] {
    &REGISTRY
}
