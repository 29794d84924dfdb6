//! Holiday records as stored and served.

use chrono::NaiveDate;
use feriados_core::JurisdictionCode;
use feriados_time::MonthDay;

/// Opaque record identifier, assigned by the store on creation and immutable
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolidayId(pub i64);

impl std::fmt::Display for HolidayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scope class of a holiday record.
///
/// A record fanned out from a state-level write keeps kind [`State`] even
/// though it sits at a town code; the mismatch is what lets deletes tell a
/// town's own holiday from a state-mandated one.
///
/// [`State`]: HolidayKind::State
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayKind {
    /// Country-wide holiday at the national sentinel code.
    National,
    /// State holiday, stored at the state and at each of its towns.
    State,
    /// Holiday of a single town.
    Town,
    /// Movable feast registered for a single town; its date is computed
    /// per year, never stored.
    Movable,
}

impl HolidayKind {
    /// Lowercase label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayKind::National => "national",
            HolidayKind::State => "state",
            HolidayKind::Town => "town",
            HolidayKind::Movable => "movable",
        }
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The date field of a holiday record, in one of its three encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayDate {
    /// Recurs every year on the same month and day; rendered `"MM-DD"`.
    Annual(MonthDay),
    /// A single concrete date; rendered `"YYYY-MM-DD"`.
    Specific(NaiveDate),
    /// Computed from Easter each year; rendered as the empty string.
    Movable,
}

impl std::fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayDate::Annual(md) => write!(f, "{md}"),
            HolidayDate::Specific(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            HolidayDate::Movable => Ok(()),
        }
    }
}

/// A stored holiday record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// Store-assigned identifier.
    pub id: HolidayId,
    /// Display name, the only field updates may change.
    pub name: String,
    /// Jurisdiction the record is scoped to.
    pub code: JurisdictionCode,
    /// Stored date encoding.
    pub date: HolidayDate,
    /// Scope class.
    pub kind: HolidayKind,
}

/// A record about to be inserted, identical to [`Holiday`] minus the id.
#[derive(Debug, Clone)]
pub struct NewHoliday {
    /// Display name.
    pub name: String,
    /// Jurisdiction the record is scoped to.
    pub code: JurisdictionCode,
    /// Stored date encoding.
    pub date: HolidayDate,
    /// Scope class.
    pub kind: HolidayKind,
}
