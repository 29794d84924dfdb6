//! Movable feasts, holidays whose date is derived from Easter.

use chrono::{Duration, NaiveDate};

use crate::easter::easter_sunday;

/// The closed set of movable feasts the engine computes.
///
/// Each feast falls a fixed number of days from Easter Sunday, so a feast
/// plus a year fully determines a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovableFeast {
    /// Carnival Tuesday, 47 days before Easter.
    Carnaval,
    /// Good Friday, two days before Easter.
    SextaFeiraSanta,
    /// Easter Sunday itself.
    Pascoa,
    /// Corpus Christi, 60 days after Easter.
    CorpusChristi,
}

impl MovableFeast {
    /// Every recognized feast, in calendar order within a year.
    pub const ALL: [MovableFeast; 4] = [
        MovableFeast::Carnaval,
        MovableFeast::SextaFeiraSanta,
        MovableFeast::Pascoa,
        MovableFeast::CorpusChristi,
    ];

    /// Canonical display name, as stored and served.
    pub fn name(&self) -> &'static str {
        match self {
            MovableFeast::Carnaval => "Carnaval",
            MovableFeast::SextaFeiraSanta => "Sexta-Feira Santa",
            MovableFeast::Pascoa => "Páscoa",
            MovableFeast::CorpusChristi => "Corpus Christi",
        }
    }

    /// Signed day offset from Easter Sunday.
    pub fn offset_days(&self) -> i64 {
        match self {
            MovableFeast::Carnaval => -47,
            MovableFeast::SextaFeiraSanta => -2,
            MovableFeast::Pascoa => 0,
            MovableFeast::CorpusChristi => 60,
        }
    }

    /// Recognizes a feast by name.
    ///
    /// Matching is case-insensitive and treats `-` and `_` as spaces, so
    /// `"corpus_christi"` and `"CARNAVAL"` are accepted. The unaccented
    /// spelling `"pascoa"` is recognized alongside the canonical one.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "carnaval" => Some(MovableFeast::Carnaval),
            "sexta feira santa" => Some(MovableFeast::SextaFeiraSanta),
            "páscoa" | "pascoa" => Some(MovableFeast::Pascoa),
            "corpus christi" => Some(MovableFeast::CorpusChristi),
            _ => None,
        }
    }

    /// The feast's date in `year`, or `None` when the year is outside the
    /// computus range.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        let easter = easter_sunday(year)?;
        easter.checked_add_signed(Duration::days(self.offset_days()))
    }
}

impl std::fmt::Display for MovableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
