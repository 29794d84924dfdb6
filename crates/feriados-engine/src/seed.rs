//! National holiday reference data.

use feriados_core::errors::Result;
use feriados_core::JurisdictionCode;
use feriados_time::{MonthDay, MovableFeast};

use crate::holiday::{HolidayDate, HolidayKind, NewHoliday};
use crate::mutation::{upsert, Mutation};
use crate::regions::RegionProvider;
use crate::store::HolidayStore;

/// A seed entry: a national holiday and its fixed date.
#[derive(Debug, Clone, Copy)]
pub struct SeedHoliday {
    /// Display name.
    pub name: &'static str,
    /// Fixed date, `"MM-DD"`.
    pub date: &'static str,
}

/// The fixed-date national holidays every deployment starts from.
///
/// Sexta-Feira Santa is national as well but has no fixed date, so it is
/// seeded separately by [`seed_national`].
pub static NATIONAL_SEED: [SeedHoliday; 8] = [
    SeedHoliday { name: "Ano Novo", date: "01-01" },
    SeedHoliday { name: "Tiradentes", date: "04-21" },
    SeedHoliday { name: "Dia do Trabalhador", date: "05-01" },
    SeedHoliday { name: "Independência do Brasil", date: "09-07" },
    SeedHoliday { name: "Nossa Senhora Aparecida", date: "10-12" },
    SeedHoliday { name: "Finados", date: "11-02" },
    SeedHoliday { name: "Proclamação da República", date: "11-15" },
    SeedHoliday { name: "Natal", date: "12-25" },
];

/// Seeds the given national holidays, returning how many records were
/// created.
///
/// The entry list is passed in rather than read from [`NATIONAL_SEED`]
/// directly so deployments with their own reference data can substitute it.
/// Each entry runs through the same [`upsert`] entry point callers use, so
/// running this on every start is harmless: the dated entries are keyed by
/// (code, date) and the Good Friday record is inserted only when absent.
pub fn seed_national<S, R>(store: &mut S, regions: &R, entries: &[SeedHoliday]) -> Result<usize>
where
    S: HolidayStore,
    R: RegionProvider,
{
    let mut created = 0;
    for entry in entries {
        let date = MonthDay::parse(entry.date)?;
        let outcome = upsert(store, regions, entry.name, &JurisdictionCode::National, date)?;
        if let Mutation::Created(_) = outcome {
            created += 1;
        }
    }

    let good_friday = MovableFeast::SextaFeiraSanta.name();
    if store
        .find_named(&JurisdictionCode::National, good_friday)?
        .is_none()
    {
        store.insert(NewHoliday {
            name: good_friday.to_owned(),
            code: JurisdictionCode::National,
            date: HolidayDate::Movable,
            kind: HolidayKind::National,
        })?;
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::RegionTable;
    use crate::store::MemoryStore;

    #[test]
    fn seeding_is_idempotent() {
        let mut store = MemoryStore::new();
        let regions = RegionTable::builtin();
        assert_eq!(seed_national(&mut store, &regions, &NATIONAL_SEED).unwrap(), 9);
        assert_eq!(store.len(), 9);
        assert_eq!(seed_national(&mut store, &regions, &NATIONAL_SEED).unwrap(), 0);
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn good_friday_is_seeded_without_a_date() {
        let mut store = MemoryStore::new();
        let regions = RegionTable::builtin();
        seed_national(&mut store, &regions, &NATIONAL_SEED).unwrap();

        let record = store
            .find_named(&JurisdictionCode::National, "Sexta-Feira Santa")
            .unwrap()
            .unwrap();
        assert_eq!(record.kind, HolidayKind::National);
        assert_eq!(record.date, HolidayDate::Movable);
        assert_eq!(record.date.to_string(), "");
    }

    #[test]
    fn every_dated_entry_parses() {
        for entry in &NATIONAL_SEED {
            assert!(MonthDay::parse(entry.date).is_ok(), "{}", entry.name);
        }
    }
}
