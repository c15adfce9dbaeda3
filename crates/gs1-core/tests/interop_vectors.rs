//! # Interoperability Vectors
//!
//! Pins the codec to externally published values so that codes printed
//! from this crate scan the same way on third-party readers.
//!
//! - Check digits come from the GS1 General Specifications and the
//!   classic UPC-A / EAN-13 worked examples.
//! - The encode/decode scenarios pin the exact data string layout a GS1-128
//!   printer receives, separators included.

use gs1_core::{
    calculate_check_digit, format_gs1_human_readable, generate_gs1_code, verify_check_digit,
    EncodingRequest, GROUP_SEPARATOR,
};

/// (payload without check digit, published check digit)
const CHECK_DIGIT_VECTORS: &[(&str, u8)] = &[
    // UPC-A 0 36000 29145 2
    ("03600029145", 2),
    // EAN-13 4 006381 33393 1
    ("400638133393", 1),
    // EAN-8 9638 5074 (check digit 4)
    ("9638507", 4),
    // GTIN-14 1 0614141 00000 2
    ("1061414100000", 2),
    // SSCC 1 0614141 123456789 7
    ("10614141123456789", 7),
];

#[test]
fn check_digits_match_published_vectors() {
    for (payload, expected) in CHECK_DIGIT_VECTORS {
        assert_eq!(
            calculate_check_digit(payload),
            *expected,
            "check digit mismatch for {payload}"
        );
        assert!(verify_check_digit(&format!("{payload}{expected}")));
    }
}

#[test]
fn documented_scenario_encodes_and_decodes() {
    let request = EncodingRequest {
        gtin: Some("7501234567890".to_string()),
        expiration_date: Some("2025-12-31".to_string()),
        serial: Some("A".to_string()),
        ..Default::default()
    };

    let result = generate_gs1_code(&request);
    assert!(result.errors.is_empty(), "unexpected errors: {:?}", result.errors);

    let human = result.human_readable.expect("human readable");
    assert_eq!(human, "(01)07501234567890 (17)251231 (21)A");

    let data = result.data_string.expect("data string");
    assert!(!data.ends_with(GROUP_SEPARATOR));
    assert_eq!(format_gs1_human_readable(&data), human);
}

#[test]
fn scanner_output_with_symbology_identifier_decodes() {
    let request = EncodingRequest {
        gtin: Some("4006381333931".to_string()),
        lot: Some("BATCH-7".to_string()),
        serial: Some("0001".to_string()),
        count: Some("24".to_string()),
        ..Default::default()
    };
    let result = generate_gs1_code(&request);
    let data = result.data_string.expect("data string");
    assert_eq!(
        data,
        format!("010400638133393110BATCH-7{gs}210001{gs}3724", gs = GROUP_SEPARATOR)
    );

    let scanned = format!("]C1{data}");
    assert_eq!(
        format_gs1_human_readable(&scanned),
        "(01)04006381333931 (10)BATCH-7 (21)0001 (37)24"
    );
}

#[test]
fn logistics_label_keeps_sscc_first() {
    let request = EncodingRequest {
        gtin: Some("10614141000002".to_string()),
        sscc: Some("106141411234567897".to_string()),
        content: Some("4006381333931".to_string()),
        count: Some("48".to_string()),
        ..Default::default()
    };
    let result = generate_gs1_code(&request);
    assert_eq!(
        result.human_readable.as_deref(),
        Some("(00)106141411234567897 (01)10614141000002 (02)04006381333931 (37)48")
    );
    assert!(verify_check_digit("106141411234567897"));
}
