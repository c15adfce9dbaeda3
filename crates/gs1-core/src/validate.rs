//! # Request Validation
//!
//! Checks an [`EncodingRequest`] against the registry before any string is
//! assembled. Every violation is collected; the validator never stops at
//! the first one, so a form can show all problems at once.
//!
//! ## Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | GTIN | mandatory; 8–14 digits after stripping non-digits |
//! | Content GTIN | 8–14 digits after stripping non-digits |
//! | SSCC | 1–18 digits after stripping non-digits |
//! | Lot, Serial | at most 20 characters, all from GS1 character set 82 |
//! | Dates | a real calendar date in ISO form |
//! | Count, Variable count | an integer in `1..=99999999` |

use serde::Serialize;

use crate::encode::EncodingRequest;
use crate::error::FieldError;
use crate::gtin::digits_only;
use crate::registry::ApplicationIdentifier;
use crate::temporal::Gs1Date;

/// Shortest GTIN accepted (GTIN-8).
const GTIN_MIN_DIGITS: usize = 8;

/// Outcome of [`validate_gs1_params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: Vec<FieldError>,
}

impl ValidationReport {
    fn new(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// `true` when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The violations, in registry order of the offending fields.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The violations rendered as human-readable messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Consume the report, keeping the violations.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Validate every field of `request`.
pub fn validate_gs1_params(request: &EncodingRequest) -> ValidationReport {
    let mut errors = Vec::new();

    for &ai in ApplicationIdentifier::all() {
        match request.value_for(ai) {
            Some(value) => check_field(ai, value, &mut errors),
            None if ai == ApplicationIdentifier::Gtin => errors.push(FieldError::Missing {
                field: ai.display_label(),
            }),
            None => {}
        }
    }

    let report = ValidationReport::new(errors);
    if !report.is_valid() {
        tracing::debug!(
            error_count = report.errors.len(),
            "GS1 request failed validation"
        );
    }
    report
}

fn check_field(ai: ApplicationIdentifier, value: &str, errors: &mut Vec<FieldError>) {
    let field = ai.display_label();
    match ai {
        ApplicationIdentifier::Gtin | ApplicationIdentifier::ContentGtin => {
            check_digit_count(field, value, GTIN_MIN_DIGITS, ai.length(), errors);
        }
        ApplicationIdentifier::Sscc => {
            check_digit_count(field, value, 1, ai.length(), errors);
        }
        ApplicationIdentifier::Lot | ApplicationIdentifier::Serial => {
            let actual = value.chars().count();
            if actual > ai.length() {
                errors.push(FieldError::TooLong {
                    field,
                    max: ai.length(),
                    actual,
                });
            }
            if !value.chars().all(is_cset82) {
                errors.push(FieldError::InvalidCharacters { field });
            }
        }
        ApplicationIdentifier::ProductionDate
        | ApplicationIdentifier::PackagingDate
        | ApplicationIdentifier::BestBeforeDate
        | ApplicationIdentifier::ExpirationDate => {
            if Gs1Date::parse_iso(value).is_err() {
                errors.push(FieldError::InvalidDate {
                    field,
                    value: value.to_string(),
                });
            }
        }
        ApplicationIdentifier::Count | ApplicationIdentifier::VariableCount => {
            let max = max_count(ai);
            match value.trim().parse::<u64>() {
                Ok(n) if (1..=max).contains(&n) => {}
                _ => errors.push(FieldError::OutOfRange {
                    field,
                    min: 1,
                    max,
                    value: value.to_string(),
                }),
            }
        }
    }
}

/// Whether `c` is in GS1 AI encodable character set 82: ASCII letters and
/// digits plus `! " % & ' ( ) * + , - . / : ; < = > ? _`. Space, control
/// characters and non-ASCII text are outside it.
fn is_cset82(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!'
                | '"'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '<'
                | '='
                | '>'
                | '?'
                | '_'
        )
}

fn check_digit_count(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<FieldError>,
) {
    let actual = digits_only(value).len();
    if !(min..=max).contains(&actual) {
        errors.push(FieldError::InvalidLength {
            field,
            min,
            max,
            actual,
        });
    }
}

/// Largest count that fits the AI's maximum width (99999999 for 8 digits).
pub(crate) fn max_count(ai: ApplicationIdentifier) -> u64 {
    10u64.pow(ai.length() as u32) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_gtin() -> EncodingRequest {
        EncodingRequest::with_gtin("12345678901234")
    }

    #[test]
    fn test_empty_request_requires_gtin() {
        let report = validate_gs1_params(&EncodingRequest::default());
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert!(report.messages()[0].contains("GTIN"));
    }

    #[test]
    fn test_gtin_only_is_valid() {
        let report = validate_gs1_params(&with_gtin());
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_empty_string_gtin_counts_as_missing() {
        let request = EncodingRequest::with_gtin("");
        let report = validate_gs1_params(&request);
        assert_eq!(report.errors(), &[FieldError::Missing { field: "GTIN" }]);
    }

    #[test]
    fn test_gtin_digit_bounds() {
        for (gtin, ok) in [
            ("1234567", false),
            ("12345678", true),
            ("1234-5678", true),
            ("12345678901234", true),
            ("123456789012345", false),
            ("ABCDEFGHIJ", false),
        ] {
            let report = validate_gs1_params(&EncodingRequest::with_gtin(gtin));
            assert_eq!(report.is_valid(), ok, "gtin {gtin:?}");
        }
    }

    #[test]
    fn test_lot_boundary() {
        let mut request = with_gtin();
        request.lot = Some("L".repeat(20));
        assert!(validate_gs1_params(&request).is_valid());

        request.lot = Some("L".repeat(21));
        let report = validate_gs1_params(&request);
        assert_eq!(
            report.errors(),
            &[FieldError::TooLong {
                field: "Lot",
                max: 20,
                actual: 21,
            }]
        );
    }

    #[test]
    fn test_serial_boundary() {
        let mut request = with_gtin();
        request.serial = Some("S/N-0001.A_(7)S/N-00".to_string());
        assert!(validate_gs1_params(&request).is_valid());
        request.serial = Some("9".repeat(21));
        assert_eq!(validate_gs1_params(&request).errors()[0].field(), "Serial");
    }

    #[test]
    fn test_non_ascii_lot_rejected() {
        let mut request = EncodingRequest::with_gtin("12345678");
        request.lot = Some("é ü".to_string());
        let result = crate::generate_gs1_code(&request);
        assert!(result.data_string.is_none());
        assert_eq!(
            result.errors,
            vec![FieldError::InvalidCharacters { field: "Lot" }]
        );

        request.lot = None;
        request.serial = Some("é".repeat(20));
        assert_eq!(
            validate_gs1_params(&request).errors(),
            &[FieldError::InvalidCharacters { field: "Serial" }]
        );
    }

    #[test]
    fn test_lot_character_set() {
        let every_cset82_symbol = "!\"%&'()*+,-./:;<=>?_";
        for (lot, ok) in [
            (every_cset82_symbol, true),
            ("AZaz09", true),
            ("A B", false),
            ("A#1", false),
            ("A$1", false),
            ("A@1", false),
            ("A[1]", false),
            ("A\\1", false),
            ("A^1", false),
            ("A`1", false),
            ("A{1}", false),
            ("A|1", false),
            ("A~1", false),
        ] {
            let mut request = with_gtin();
            request.lot = Some(lot.to_string());
            assert_eq!(validate_gs1_params(&request).is_valid(), ok, "lot {lot:?}");
        }
    }

    #[test]
    fn test_content_gtin_digit_bounds() {
        for (content, ok) in [
            ("1234567", false),
            ("12345678", true),
            ("12345678901234", true),
            ("123456789012345", false),
        ] {
            let mut request = with_gtin();
            request.content = Some(content.to_string());
            let report = validate_gs1_params(&request);
            assert_eq!(report.is_valid(), ok, "content {content:?}");
            if !ok {
                assert_eq!(report.errors()[0].field(), "Content GTIN");
            }
        }

        let mut request = with_gtin();
        request.content = Some("1234".to_string());
        assert_eq!(
            validate_gs1_params(&request).messages(),
            vec!["Content GTIN must contain between 8 and 14 digits, got 4"]
        );
    }

    #[test]
    fn test_separator_inside_lot_rejected() {
        let mut request = with_gtin();
        request.lot = Some("AB\u{1D}21XYZ".to_string());
        let report = validate_gs1_params(&request);
        assert_eq!(report.errors(), &[FieldError::InvalidCharacters { field: "Lot" }]);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        let mut request = with_gtin();
        request.expiration_date = Some("2025-02-30".to_string());
        request.production_date = Some("yesterday".to_string());
        let report = validate_gs1_params(&request);
        let fields: Vec<&str> = report.errors().iter().map(FieldError::field).collect();
        assert_eq!(fields, vec!["Production date", "Expiration date"]);
    }

    #[test]
    fn test_other_dates_rejected() {
        let mut request = with_gtin();
        request.best_before_date = Some("2025-13-01".to_string());
        request.packaging_date = Some("soon".to_string());
        let report = validate_gs1_params(&request);
        assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn test_count_range() {
        for (count, ok) in [
            ("0", false),
            ("1", true),
            ("99999999", true),
            ("100000000", false),
            ("-1", false),
            ("12.5", false),
            ("abc", false),
            (" 42 ", true),
        ] {
            let mut request = with_gtin();
            request.count = Some(count.to_string());
            assert_eq!(validate_gs1_params(&request).is_valid(), ok, "count {count:?}");
        }
    }

    #[test]
    fn test_empty_count_is_absent() {
        let mut request = with_gtin();
        request.count = Some(String::new());
        assert!(validate_gs1_params(&request).is_valid());
    }

    #[test]
    fn test_variable_count_shares_count_rule() {
        let mut request = with_gtin();
        request.var_count = Some("0".to_string());
        let report = validate_gs1_params(&request);
        assert_eq!(report.errors()[0].field(), "Variable count");
    }

    #[test]
    fn test_sscc_digit_bounds() {
        let mut request = with_gtin();
        request.sscc = Some("106141411234567897".to_string());
        assert!(validate_gs1_params(&request).is_valid());
        request.sscc = Some("1061414112345678970".to_string());
        assert!(!validate_gs1_params(&request).is_valid());
    }

    #[test]
    fn test_all_violations_accumulate() {
        let request = EncodingRequest {
            gtin: None,
            lot: Some("X".repeat(25)),
            serial: Some("Y".repeat(30)),
            expiration_date: Some("bad".to_string()),
            production_date: Some("worse".to_string()),
            count: Some("0".to_string()),
            ..Default::default()
        };
        let report = validate_gs1_params(&request);
        assert_eq!(report.errors().len(), 6);
        assert!(report.messages().iter().any(|m| m.contains("GTIN")));
    }

    #[test]
    fn test_report_serializes_valid_flag_and_messages() {
        let report = validate_gs1_params(&EncodingRequest::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0], "GTIN is required");
    }

    #[test]
    fn test_max_count_matches_registry_width() {
        assert_eq!(max_count(ApplicationIdentifier::Count), 99_999_999);
        assert_eq!(max_count(ApplicationIdentifier::VariableCount), 99_999_999);
    }
}
