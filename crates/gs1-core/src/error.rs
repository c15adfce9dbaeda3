//! # Error Hierarchy
//!
//! Structured error types for the codec, built with `thiserror`.
//!
//! Two families live here:
//!
//! - [`FieldError`] describes one rejected request field. The validator
//!   collects these into a list rather than returning on the first one, so
//!   they are carried as data inside [`crate::ValidationReport`] and
//!   [`crate::EncodingResult`].
//! - [`Gs1Error`] is returned by the typed constructors
//!   ([`crate::Gs1Date::parse_iso`], `ApplicationIdentifier::from_str`, ...)
//!   where a single `Result` is the natural shape.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Top-level error type for the codec's fallible constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Gs1Error {
    /// The code is not a supported Application Identifier.
    #[error("unknown application identifier: {0:?}")]
    UnknownAi(String),

    /// A date could not be parsed in the expected representation.
    #[error("invalid date {input:?} (expected {expected})")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The expected representation, e.g. `YYMMDD`.
        expected: &'static str,
    },
}

/// One validation failure for one request field.
///
/// `field` is always the display label of the offending Application
/// Identifier (for example `"GTIN"` or `"Expiration date"`), so messages are
/// readable without knowing the wire codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A mandatory field is absent.
    #[error("{field} is required")]
    Missing {
        /// Display label of the missing field.
        field: &'static str,
    },

    /// The number of digits falls outside the accepted range.
    #[error("{field} must contain between {min} and {max} digits, got {actual}")]
    InvalidLength {
        /// Display label of the field.
        field: &'static str,
        /// Minimum accepted digit count.
        min: usize,
        /// Maximum accepted digit count.
        max: usize,
        /// Digit count found after stripping non-digits.
        actual: usize,
    },

    /// A variable-length value exceeds its AI's maximum.
    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        /// Display label of the field.
        field: &'static str,
        /// Maximum length declared by the registry.
        max: usize,
        /// Character count of the value.
        actual: usize,
    },

    /// The value contains characters outside GS1 character set 82.
    #[error("{field} contains characters outside the GS1 character set")]
    InvalidCharacters {
        /// Display label of the field.
        field: &'static str,
    },

    /// A date field is not a valid calendar date.
    #[error("{field} is not a valid date: {value:?}")]
    InvalidDate {
        /// Display label of the field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A count is not an integer within the accepted range.
    #[error("{field} must be an integer between {min} and {max}, got {value:?}")]
    OutOfRange {
        /// Display label of the field.
        field: &'static str,
        /// Smallest accepted value.
        min: u64,
        /// Largest accepted value.
        max: u64,
        /// The rejected input.
        value: String,
    },
}

impl FieldError {
    /// Display label of the field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::InvalidLength { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidCharacters { field }
            | Self::InvalidDate { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

// Errors travel to callers as their human-readable message.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
