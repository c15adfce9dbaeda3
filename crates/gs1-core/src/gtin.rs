//! # GTIN Primitives
//!
//! Normalization of EAN/UPC-family numbers to GTIN-14 and the GS1 mod-10
//! check digit shared by GTIN-8/12/13/14 and SSCC.
//!
//! ## Check Digit
//!
//! Digits are weighted from the right: the rightmost digit of the payload
//! (the one immediately left of where the check digit will go) has weight 3,
//! the next weight 1, alternating leftwards. The check digit brings the
//! weighted sum up to a multiple of ten.

/// Width of a normalized GTIN.
pub const GTIN14_LEN: usize = 14;

/// Keep only the ASCII digits of `s`.
pub(crate) fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize an 8–14 digit EAN/UPC/GTIN to 14 digits.
///
/// Non-digit characters (spaces, dashes) are stripped and the remainder is
/// left-padded with `0`. Returns `None` when no digits remain or more than
/// 14 digits remain.
pub fn normalize_to_gtin14(code: &str) -> Option<String> {
    let digits = digits_only(code);
    if digits.is_empty() || digits.len() > GTIN14_LEN {
        return None;
    }
    Some(format!("{digits:0>width$}", width = GTIN14_LEN))
}

/// Compute the GS1 mod-10 check digit over the digits of `code`.
///
/// Non-digit characters are ignored. An input with no digits yields `0`.
pub fn calculate_check_digit(code: &str) -> u8 {
    let sum: u32 = code
        .chars()
        .filter_map(|c| c.to_digit(10))
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Whether the last digit of `code` is the correct check digit for the
/// digits before it. Codes with fewer than two digits never verify.
pub fn verify_check_digit(code: &str) -> bool {
    let digits = digits_only(code);
    let Some((payload, check)) = digits.len().checked_sub(1).map(|n| digits.split_at(n)) else {
        return false;
    };
    if payload.is_empty() {
        return false;
    }
    check.parse::<u8>().ok() == Some(calculate_check_digit(payload))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice is the same as normalizing once.
        #[test]
        fn normalize_idempotent(code in "[0-9]{1,14}") {
            let once = normalize_to_gtin14(&code).unwrap();
            prop_assert_eq!(once.len(), GTIN14_LEN);
            prop_assert_eq!(normalize_to_gtin14(&once), Some(once.clone()));
        }

        /// A payload with its computed check digit appended always verifies.
        #[test]
        fn appended_check_digit_verifies(payload in "[0-9]{1,17}") {
            let full = format!("{payload}{}", calculate_check_digit(&payload));
            prop_assert!(verify_check_digit(&full));
        }

        /// The check digit is always a single decimal digit.
        #[test]
        fn check_digit_in_range(code in "\\PC{0,32}") {
            prop_assert!(calculate_check_digit(&code) <= 9);
        }
    }
}
