//! Western (Gregorian) Easter computus.

use chrono::NaiveDate;

/// First year of the Gregorian calendar for which the computus is defined.
pub const MIN_YEAR: i32 = 1583;
/// Last year for which the computus is defined.
pub const MAX_YEAR: i32 = 4099;

/// Computes the date of Easter Sunday in `year`.
///
/// Uses Oudin's form of the Anonymous Gregorian algorithm, which requires
/// signed arithmetic. Returns `None` outside [`MIN_YEAR`]..=[`MAX_YEAR`],
/// the range over which the algorithm is valid.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
