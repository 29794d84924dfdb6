//! Calendar-date parsing.

use chrono::NaiveDate;
use feriados_core::errors::{Error, Result};

/// Parses a full ISO calendar date, `"YYYY-MM-DD"`.
///
/// Impossible dates such as `"2023-02-30"` are rejected along with
/// malformed text.
pub fn parse_iso(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        Error::InvalidInput(format!("malformed date {text:?}, expected \"YYYY-MM-DD\""))
    })
}
