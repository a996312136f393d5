//! Date parsing helpers.
//!
//! Holiday registries and callers hand dates over as ISO 8601 strings, either
//! as a bare calendar date (`YYYY-MM-DD`) or as a full datetime whose
//! time-of-day is irrelevant to the engine.  Both normalise to a
//! [`NaiveDate`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::{Error, Result};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a date string in ISO 8601 format.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and the RFC 3339 forms
/// with a `Z` or `±hh:mm` suffix.  The time-of-day is discarded; the date
/// component is taken exactly as written, without shifting across offsets.
///
/// # Errors
/// Returns [`Error::InvalidDate`] if the string is not a valid calendar date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if s.len() <= 10 {
        return NaiveDate::parse_from_str(s, ISO_DATE)
            .map_err(|e| Error::InvalidDate(format!("'{s}': {e}")));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.date())
        .map_err(|e| Error::InvalidDate(format!("'{s}': {e}")))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}
