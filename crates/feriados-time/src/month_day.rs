//! Year-less month/day values.

use chrono::{Datelike, NaiveDate};
use feriados_core::ensure_input;
use feriados_core::errors::Result;

/// Maximum day number for a month, with no year at hand.
///
/// February reports 29 so that a February 29 holiday can be stored; such a
/// holiday simply has no occurrence outside leap years.
fn days_in_month(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 29,
    }
}

/// A month/day pair with the year stripped, the storage form of a fixed
/// annual holiday.
///
/// The rendered form is always zero-padded `"MM-DD"`, which is also the
/// only form [`MonthDay::parse`] accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Builds a `MonthDay` from raw components, validating the day against
    /// the month's maximum length.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        ensure_input!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let max = days_in_month(month);
        ensure_input!(
            (1..=max).contains(&day),
            "day {day} out of range [1, {max}] for month {month:02}"
        );
        Ok(MonthDay { month, day })
    }

    /// Parses the strict `"MM-DD"` form, two digits, a dash, two digits.
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        ensure_input!(
            bytes.len() == 5
                && bytes[0].is_ascii_digit()
                && bytes[1].is_ascii_digit()
                && bytes[2] == b'-'
                && bytes[3].is_ascii_digit()
                && bytes[4].is_ascii_digit(),
            "malformed month-day {text:?}, expected \"MM-DD\""
        );
        let month = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let day = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        MonthDay::new(month, day)
    }

    /// Projects a full calendar date onto its month/day pair.
    pub fn from_date(date: NaiveDate) -> Self {
        MonthDay {
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Month number, 1 through 12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1 through the month's maximum.
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl std::fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthDay({self})")
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
