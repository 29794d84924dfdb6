//! Keyed storage of holiday records.

use std::collections::BTreeMap;

use feriados_core::errors::{Error, Result};
use feriados_core::JurisdictionCode;

use crate::holiday::{Holiday, HolidayDate, HolidayId, HolidayKind, NewHoliday};

/// Keyed lookup, insert, update, and delete of holiday records.
///
/// Lookups scoped to a jurisdiction may match several records; every
/// implementation must break ties by creation order, oldest first, since the
/// resolution rules lean on that order being stable.
pub trait HolidayStore {
    /// Finds the oldest record at `code` whose stored date equals `date`.
    fn find_dated(&self, code: &JurisdictionCode, date: &HolidayDate) -> Result<Option<Holiday>>;

    /// Finds the oldest record at `code` carrying `name`, regardless of kind.
    fn find_named(&self, code: &JurisdictionCode, name: &str) -> Result<Option<Holiday>>;

    /// Finds the movable record at `code` carrying `name`.
    fn find_movable(&self, code: &JurisdictionCode, name: &str) -> Result<Option<Holiday>>;

    /// Every movable record at `code`, in creation order.
    fn movable_for(&self, code: &JurisdictionCode) -> Result<Vec<Holiday>>;

    /// Inserts a record and returns its assigned id.
    fn insert(&mut self, holiday: NewHoliday) -> Result<HolidayId>;

    /// Overwrites the name of the record with the given id.
    fn rename(&mut self, id: HolidayId, name: &str) -> Result<()>;

    /// Removes the record with the given id.
    fn remove(&mut self, id: HolidayId) -> Result<()>;
}

/// In-process [`HolidayStore`] backed by an ordered map.
///
/// Ids come from a monotonically increasing counter, so iterating the map in
/// key order is iterating in creation order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<HolidayId, Holiday>,
    next_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn first_matching(&self, pred: impl Fn(&Holiday) -> bool) -> Option<Holiday> {
        self.records.values().find(|h| pred(h)).cloned()
    }
}

impl HolidayStore for MemoryStore {
    fn find_dated(&self, code: &JurisdictionCode, date: &HolidayDate) -> Result<Option<Holiday>> {
        Ok(self.first_matching(|h| h.code == *code && h.date == *date))
    }

    fn find_named(&self, code: &JurisdictionCode, name: &str) -> Result<Option<Holiday>> {
        Ok(self.first_matching(|h| h.code == *code && h.name == name))
    }

    fn find_movable(&self, code: &JurisdictionCode, name: &str) -> Result<Option<Holiday>> {
        Ok(self.first_matching(|h| {
            h.code == *code && h.kind == HolidayKind::Movable && h.name == name
        }))
    }

    fn movable_for(&self, code: &JurisdictionCode) -> Result<Vec<Holiday>> {
        Ok(self
            .records
            .values()
            .filter(|h| h.code == *code && h.kind == HolidayKind::Movable)
            .cloned()
            .collect())
    }

    fn insert(&mut self, holiday: NewHoliday) -> Result<HolidayId> {
        self.next_id += 1;
        let id = HolidayId(self.next_id);
        self.records.insert(
            id,
            Holiday {
                id,
                name: holiday.name,
                code: holiday.code,
                date: holiday.date,
                kind: holiday.kind,
            },
        );
        Ok(id)
    }

    fn rename(&mut self, id: HolidayId, name: &str) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.name = name.to_owned();
                Ok(())
            }
            None => Err(Error::Repository(format!("no record with id {id}"))),
        }
    }

    fn remove(&mut self, id: HolidayId) -> Result<()> {
        match self.records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::Repository(format!("no record with id {id}"))),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use feriados_time::MonthDay;

    fn town() -> JurisdictionCode {
        JurisdictionCode::parse("3550308").unwrap()
    }

    fn new_annual(name: &str, code: JurisdictionCode, month: u8, day: u8) -> NewHoliday {
        NewHoliday {
            name: name.to_owned(),
            code,
            date: HolidayDate::Annual(MonthDay::new(month, day).unwrap()),
            kind: HolidayKind::Town,
        }
    }

    fn new_movable(name: &str, code: JurisdictionCode) -> NewHoliday {
        NewHoliday {
            name: name.to_owned(),
            code,
            date: HolidayDate::Movable,
            kind: HolidayKind::Movable,
        }
    }

    #[test]
    fn ids_increase_with_insertion() {
        let mut store = MemoryStore::new();
        let a = store.insert(new_annual("A", town(), 1, 2)).unwrap();
        let b = store.insert(new_annual("B", town(), 3, 4)).unwrap();
        assert!(a < b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn find_dated_matches_the_exact_encoding() {
        let mut store = MemoryStore::new();
        store.insert(new_annual("Aniversário", town(), 1, 25)).unwrap();
        store.insert(new_movable("Carnaval", town())).unwrap();

        let annual = HolidayDate::Annual(MonthDay::new(1, 25).unwrap());
        assert!(store.find_dated(&town(), &annual).unwrap().is_some());
        // A movable record has an empty stored date; an annual lookup must
        // never see it.
        let other = HolidayDate::Annual(MonthDay::new(2, 13).unwrap());
        assert!(store.find_dated(&town(), &other).unwrap().is_none());
        assert!(store.find_dated(&town(), &HolidayDate::Movable).unwrap().is_some());
    }

    #[test]
    fn movable_for_returns_creation_order() {
        let mut store = MemoryStore::new();
        store.insert(new_movable("Corpus Christi", town())).unwrap();
        store.insert(new_movable("Carnaval", town())).unwrap();
        let names: Vec<String> = store
            .movable_for(&town())
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, ["Corpus Christi", "Carnaval"]);
    }

    #[test]
    fn rename_overwrites_name_only() {
        let mut store = MemoryStore::new();
        let id = store.insert(new_annual("Old", town(), 6, 1)).unwrap();
        store.rename(id, "New").unwrap();
        let record = store.find_named(&town(), "New").unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.date, HolidayDate::Annual(MonthDay::new(6, 1).unwrap()));
    }

    #[test]
    fn remove_missing_id_is_a_repository_error() {
        let mut store = MemoryStore::new();
        let err = store.remove(HolidayId(99)).unwrap_err();
        assert!(matches!(err, Error::Repository(_)));
    }
}
