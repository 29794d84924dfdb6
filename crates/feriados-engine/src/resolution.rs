//! Holiday resolution by precedence.

use chrono::{Datelike, NaiveDate};
use feriados_core::errors::{Error, Result};
use feriados_core::JurisdictionCode;
use feriados_time::{MonthDay, MovableFeast};

use crate::holiday::{Holiday, HolidayDate};
use crate::store::HolidayStore;

/// Resolves which holiday, if any, applies at `code` on `date`.
///
/// Precedence, first match wins:
///
/// 1. A national record on the date's month and day. When the date is Good
///    Friday of its year, the national record named "Sexta-Feira Santa" is
///    looked up by name instead, since that record stores no date.
/// 2. A movable feast registered at `code` whose computed date for the
///    queried year equals `date`. Ties go to the oldest record.
/// 3. An annual record at `code` on the date's month and day.
/// 4. A record at `code` on the exact queried date.
///
/// National scope overrides everything below it, locally registered movable
/// feasts override plain annual recurrences, and a year-agnostic recurrence
/// beats a literal year-qualified date. No match is [`Error::NotFound`].
pub fn resolve<S: HolidayStore>(
    store: &S,
    code: &JurisdictionCode,
    date: NaiveDate,
) -> Result<Holiday> {
    let annual = HolidayDate::Annual(MonthDay::from_date(date));

    let national = if MovableFeast::SextaFeiraSanta.date_in(date.year()) == Some(date) {
        store.find_named(&JurisdictionCode::National, MovableFeast::SextaFeiraSanta.name())?
    } else {
        store.find_dated(&JurisdictionCode::National, &annual)?
    };
    if let Some(holiday) = national {
        return Ok(holiday);
    }

    for holiday in store.movable_for(code)? {
        let feast = match MovableFeast::from_name(&holiday.name) {
            Some(feast) => feast,
            None => continue,
        };
        if feast.date_in(date.year()) == Some(date) {
            return Ok(holiday);
        }
    }

    if let Some(holiday) = store.find_dated(code, &annual)? {
        return Ok(holiday);
    }
    if let Some(holiday) = store.find_dated(code, &HolidayDate::Specific(date))? {
        return Ok(holiday);
    }
    Err(Error::NotFound)
}
