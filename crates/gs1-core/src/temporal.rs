//! # Temporal Types: GS1 `YYMMDD` Dates
//!
//! Defines `Gs1Date`, a calendar date that converts between the ISO 8601
//! form callers supply (`2025-12-31`) and the six-digit `YYMMDD` form the
//! date AIs (11, 13, 15, 17) carry on the wire.
//!
//! ## Year Window
//!
//! Encoding keeps the last two digits of the year. Decoding maps `00`–`49`
//! to 2000–2049 and `50`–`99` to 1950–1999, so every date in 1950–2049
//! survives a round trip.
//!
//! ## Day `00`
//!
//! GS1 allows `DD = 00` on the wire to mean "end of the month". Decoding
//! resolves it to the last calendar day of that month.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Gs1Error;

/// Pivot for the two-digit year window: `00..=49` is 20xx, the rest 19xx.
const CENTURY_PIVOT: u32 = 50;

/// Length of `YYYY-MM-DD`.
const ISO_DATE_LEN: usize = 10;

/// A calendar date carried by a GS1 date AI.
///
/// # Construction
///
/// - [`Gs1Date::parse_iso()`]: from `YYYY-MM-DD` or an RFC 3339 timestamp.
/// - [`Gs1Date::from_yymmdd()`]: from the wire form, applying the year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gs1Date(NaiveDate);

impl Gs1Date {
    /// Parse an ISO calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or a
    /// full RFC 3339 timestamp. For timestamps only the date part as written
    /// is kept; no timezone conversion is applied. The date part must be
    /// zero-padded with a four-digit year and no sign (`2025-1-5` and
    /// `+2025-01-05` are rejected).
    ///
    /// # Errors
    ///
    /// Returns [`Gs1Error::InvalidDate`] if none of the forms match or the
    /// date does not exist (e.g. `2025-02-30`).
    pub fn parse_iso(s: &str) -> Result<Self, Gs1Error> {
        let s = s.trim();
        let invalid = || Gs1Error::InvalidDate {
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        };

        if !has_iso_date_prefix(s) {
            return Err(invalid());
        }
        if s.len() == ISO_DATE_LEN {
            return NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Self)
                .map_err(|_| invalid());
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.date_naive()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self(dt.date()));
        }
        Err(invalid())
    }

    /// Parse the six-digit wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Gs1Error::InvalidDate`] unless the input is exactly six
    /// ASCII digits naming a real date (day `00` meaning end of month).
    pub fn from_yymmdd(s: &str) -> Result<Self, Gs1Error> {
        let invalid = || Gs1Error::InvalidDate {
            input: s.to_string(),
            expected: "YYMMDD",
        };

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let field = |range: std::ops::Range<usize>| s[range].parse::<u32>().map_err(|_| invalid());
        let yy = field(0..2)?;
        let month = field(2..4)?;
        let day = field(4..6)?;

        let century = if yy < CENTURY_PIVOT { 2000 } else { 1900 };
        let year = (century + yy) as i32;

        let date = if day == 0 {
            last_day_of_month(year, month)
        } else {
            NaiveDate::from_ymd_opt(year, month, day)
        };
        date.map(Self).ok_or_else(invalid)
    }

    /// Render the six-digit wire form. The year is truncated to its last
    /// two digits.
    pub fn to_yymmdd(&self) -> String {
        format!(
            "{:02}{:02}{:02}",
            self.0.year().rem_euclid(100),
            self.0.month(),
            self.0.day()
        )
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for Gs1Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

/// `YYYY-MM-DD` with every position a digit or a dash, as the first ten
/// bytes of `s`.
fn has_iso_date_prefix(s: &str) -> bool {
    let Some(head) = s.as_bytes().get(..ISO_DATE_LEN) else {
        return false;
    };
    head.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Convert an ISO date to `YYMMDD`. Unparseable input yields `None`, which
/// callers treat as "field absent".
pub fn format_date_to_gs1(iso_date: &str) -> Option<String> {
    Gs1Date::parse_iso(iso_date).ok().map(|d| d.to_yymmdd())
}

/// Convert `YYMMDD` to an ISO date. Anything other than six digits naming a
/// real date yields `None`.
pub fn format_gs1_to_date(gs1_date: &str) -> Option<String> {
    Gs1Date::from_yymmdd(gs1_date).ok().map(|d| d.to_iso())
}
