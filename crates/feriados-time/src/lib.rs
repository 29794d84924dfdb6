//! Calendar arithmetic for Brazilian public holidays.
//!
//! This crate owns the time-shaped half of the domain: the year-less
//! [`MonthDay`] used to store fixed annual holidays, the Gregorian Easter
//! computus, and the closed set of [`MovableFeast`]s whose dates are fixed
//! offsets from Easter Sunday.
//!
//! Everything here is pure arithmetic over [`chrono`] dates; no holiday
//! records, stores, or policy live in this crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod date;
pub mod easter;
pub mod month_day;
pub mod movable;

pub use date::parse_iso;
pub use easter::easter_sunday;
pub use month_day::MonthDay;
pub use movable::MovableFeast;
