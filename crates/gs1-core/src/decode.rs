//! # Best-Effort Decoder
//!
//! Recovers `(AI)value` groups from an existing data string, as read by a
//! scanner or produced by [`crate::generate_gs1_code`], for display.
//!
//! ## Scan
//!
//! 1. A leading symbology identifier (`]C1`, `]e0`, ...) is stripped.
//! 2. At each position a two-character AI is tried, then a
//!    three-character one. If neither is in the registry the scanner moves
//!    one character on.
//! 3. A fixed-length AI consumes exactly its registry length (or whatever
//!    remains). A variable-length AI consumes up to the next group
//!    separator or the end of input; the separator itself is skipped.
//!
//! Elements come out in scan order. Undecodable characters are dropped
//! without error. The output is advisory: digits inside a value that
//! happen to look like an AI can be misread, so callers must not use it to
//! reconstruct machine-actionable fields.

use serde::Serialize;

use crate::registry::{ApplicationIdentifier, ValueKind};
use crate::temporal::format_gs1_to_date;
use crate::GROUP_SEPARATOR;

/// Symbology identifiers a scanner may prepend to the data: GS1-128,
/// GS1 DataBar, GS1 DataMatrix, GS1 QR Code, and the `]J1` variant.
/// All are stripped the same way.
pub const SYMBOLOGY_IDENTIFIERS: [&str; 5] = ["]C1", "]e0", "]d2", "]Q3", "]J1"];

/// AI code widths tried at each scan position, in order.
const AI_WIDTHS: [usize; 2] = [2, 3];

/// One `(AI)value` group recovered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedElement {
    /// The identifier that was matched.
    pub ai: ApplicationIdentifier,
    /// The raw value as it appeared in the data string.
    pub value: String,
}

impl DecodedElement {
    /// The value for display: date AIs render as `YYYY-MM-DD` when the
    /// value is a valid `YYMMDD`, everything else is returned as read.
    pub fn display_value(&self) -> String {
        match self.ai.kind() {
            ValueKind::Date => {
                format_gs1_to_date(&self.value).unwrap_or_else(|| self.value.clone())
            }
            ValueKind::Numeric | ValueKind::Alphanumeric => self.value.clone(),
        }
    }
}

impl std::fmt::Display for DecodedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){}", self.ai.code(), self.value)
    }
}

/// Remove the first matching symbology identifier, if any.
pub fn strip_symbology_identifier(raw: &str) -> &str {
    SYMBOLOGY_IDENTIFIERS
        .iter()
        .find_map(|&prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw)
}

fn match_ai(rest: &[char]) -> Option<(ApplicationIdentifier, usize)> {
    AI_WIDTHS.iter().find_map(|&width| {
        let code: String = rest.get(..width)?.iter().collect();
        ApplicationIdentifier::from_code(&code).map(|ai| (ai, width))
    })
}

/// Scan `raw` into its elements. Never fails; unreadable input yields
/// fewer (or no) elements.
pub fn decode_elements(raw: &str) -> Vec<DecodedElement> {
    let chars: Vec<char> = strip_symbology_identifier(raw).chars().collect();
    let mut elements = Vec::new();
    let mut pos = 0;
    let mut skipped = 0usize;

    while pos < chars.len() {
        let Some((ai, width)) = match_ai(&chars[pos..]) else {
            skipped += 1;
            pos += 1;
            continue;
        };
        let start = pos + width;

        let (end, next) = if ai.is_fixed_length() {
            let end = (start + ai.length()).min(chars.len());
            (end, end)
        } else {
            let end = chars[start..]
                .iter()
                .position(|&c| c == GROUP_SEPARATOR)
                .map_or(chars.len(), |offset| start + offset);
            (end, (end + 1).min(chars.len()))
        };

        let value: String = chars[start..end].iter().collect();
        if !value.is_empty() {
            elements.push(DecodedElement { ai, value });
        }
        pos = next;
    }

    if skipped > 0 {
        tracing::trace!(skipped, decoded = elements.len(), "skipped undecodable characters");
    }
    elements
}

/// Render `raw` as space-joined `(AI)value` groups in scan order.
pub fn format_gs1_human_readable(raw: &str) -> String {
    decode_elements(raw)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The scanner never panics and never emits separators.
        #[test]
        fn decode_never_panics(raw in "\\PC{0,64}") {
            let human = format_gs1_human_readable(&raw);
            prop_assert!(!human.contains(GROUP_SEPARATOR));
        }

        /// Digit strings with separators sprinkled in never overrun a fixed AI.
        #[test]
        fn decode_digits_with_separators(raw in "[0-9\u{1D}]{0,64}") {
            for element in decode_elements(&raw) {
                prop_assert!(!element.value.is_empty());
                if element.ai.is_fixed_length() {
                    prop_assert!(element.value.chars().count() <= element.ai.length());
                }
            }
        }
    }
}
