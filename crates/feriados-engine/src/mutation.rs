//! Holiday writes: upsert and delete with their propagation rules.

use feriados_core::ensure_input;
use feriados_core::errors::{Error, Result};
use feriados_core::JurisdictionCode;
use feriados_time::{MonthDay, MovableFeast};

use crate::holiday::{HolidayDate, HolidayId, HolidayKind, NewHoliday};
use crate::regions::RegionProvider;
use crate::store::HolidayStore;

/// Outcome of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A new record was created.
    Created(HolidayId),
    /// An existing record had its name overwritten.
    Updated(HolidayId),
    /// A record was removed.
    Deleted(HolidayId),
}

impl Mutation {
    /// Id of the record the write touched.
    pub fn id(&self) -> HolidayId {
        match self {
            Mutation::Created(id) | Mutation::Updated(id) | Mutation::Deleted(id) => *id,
        }
    }
}

/// Registers or renames the annual holiday at `code` on `date`.
///
/// The record is keyed by (code, date): a second upsert at the same key
/// overwrites the name and nothing else. A state-level write also writes a
/// copy at every town of the state, each keeping kind
/// [`HolidayKind::State`]; those copies are best-effort and their individual
/// failures only show up in the log, never in the reported outcome. An
/// unknown state is refused before anything is written.
pub fn upsert<S, R>(
    store: &mut S,
    regions: &R,
    name: &str,
    code: &JurisdictionCode,
    date: MonthDay,
) -> Result<Mutation>
where
    S: HolidayStore,
    R: RegionProvider,
{
    match code {
        JurisdictionCode::National => upsert_at(store, name, code, date, HolidayKind::National),
        JurisdictionCode::State(state) => {
            let towns = regions.towns_of(state).ok_or(Error::NotFound)?;
            let outcome = upsert_at(store, name, code, date, HolidayKind::State)?;
            for town in towns {
                let town_code = JurisdictionCode::Town(town);
                if let Err(error) = upsert_at(store, name, &town_code, date, HolidayKind::State) {
                    tracing::warn!(town = %town_code, %error, "state fan-out skipped a town upsert");
                }
            }
            Ok(outcome)
        }
        JurisdictionCode::Town(_) => upsert_at(store, name, code, date, HolidayKind::Town),
    }
}

/// Registers a movable feast for a town.
///
/// Keyed by (town, feast): registering an already present feast reports
/// [`Mutation::Updated`] without writing, since the stored name is always the
/// feast's canonical one. Codes other than towns are refused; movable feasts
/// are a per-town registration.
pub fn upsert_movable<S: HolidayStore>(
    store: &mut S,
    feast: MovableFeast,
    code: &JurisdictionCode,
) -> Result<Mutation> {
    ensure_input!(
        matches!(code, JurisdictionCode::Town(_)),
        "movable holidays are registered per town, not at {code}"
    );
    match store.find_movable(code, feast.name())? {
        Some(existing) => Ok(Mutation::Updated(existing.id)),
        None => {
            let id = store.insert(NewHoliday {
                name: feast.name().to_owned(),
                code: code.clone(),
                date: HolidayDate::Movable,
                kind: HolidayKind::Movable,
            })?;
            Ok(Mutation::Created(id))
        }
    }
}

/// Removes the annual holiday at `code` on `date`.
///
/// National records are never deletable through this path, whatever the
/// requesting code. A state-level delete removes the state record first and
/// then fans the delete out to the state's towns, ignoring their individual
/// results; a record whose kind does not match the requesting scope is left
/// alone and reported as forbidden.
pub fn delete<S, R>(
    store: &mut S,
    regions: &R,
    code: &JurisdictionCode,
    date: MonthDay,
) -> Result<Mutation>
where
    S: HolidayStore,
    R: RegionProvider,
{
    let key = DeleteKey::Dated(date);
    match code {
        JurisdictionCode::National => specific_delete(store, code, &key, HolidayKind::National),
        JurisdictionCode::State(state) => {
            let outcome = specific_delete(store, code, &key, HolidayKind::State)?;
            if let Some(towns) = regions.towns_of(state) {
                for town in towns {
                    let town_code = JurisdictionCode::Town(town);
                    if let Err(error) = specific_delete(store, &town_code, &key, HolidayKind::State)
                    {
                        tracing::debug!(town = %town_code, %error, "state fan-out skipped a town delete");
                    }
                }
            }
            Ok(outcome)
        }
        JurisdictionCode::Town(_) => specific_delete(store, code, &key, HolidayKind::Town),
    }
}

/// Removes a town's movable feast registration.
///
/// A feast whose name matches a national record, Sexta-Feira Santa above
/// all, is protected the same way dated national holidays are.
pub fn delete_movable<S: HolidayStore>(
    store: &mut S,
    code: &JurisdictionCode,
    feast: MovableFeast,
) -> Result<Mutation> {
    ensure_input!(
        matches!(code, JurisdictionCode::Town(_)),
        "movable holidays are registered per town, not at {code}"
    );
    specific_delete(store, code, &DeleteKey::Movable(feast), HolidayKind::Movable)
}

// ── Primitives ─────────────────────────────────────────────────────────────

/// Create-or-rename at (code, date). The only field an update may touch is
/// the name.
fn upsert_at<S: HolidayStore>(
    store: &mut S,
    name: &str,
    code: &JurisdictionCode,
    date: MonthDay,
    kind: HolidayKind,
) -> Result<Mutation> {
    let date = HolidayDate::Annual(date);
    match store.find_dated(code, &date)? {
        Some(existing) => {
            store.rename(existing.id, name)?;
            Ok(Mutation::Updated(existing.id))
        }
        None => {
            let id = store.insert(NewHoliday {
                name: name.to_owned(),
                code: code.clone(),
                date,
                kind,
            })?;
            Ok(Mutation::Created(id))
        }
    }
}

enum DeleteKey {
    Dated(MonthDay),
    Movable(MovableFeast),
}

fn specific_delete<S: HolidayStore>(
    store: &mut S,
    code: &JurisdictionCode,
    key: &DeleteKey,
    expected: HolidayKind,
) -> Result<Mutation> {
    match key {
        DeleteKey::Movable(feast) => {
            if let Some(existing) = store.find_movable(code, feast.name())? {
                store.remove(existing.id)?;
                return Ok(Mutation::Deleted(existing.id));
            }
            // A feast backed by a national record of the same name is
            // protected even where the town never registered it.
            if store
                .find_named(&JurisdictionCode::National, feast.name())?
                .is_some()
            {
                return Err(Error::Forbidden("national holidays cannot be deleted".to_owned()));
            }
            Err(Error::NotFound)
        }
        DeleteKey::Dated(month_day) => {
            let date = HolidayDate::Annual(*month_day);
            if store
                .find_dated(&JurisdictionCode::National, &date)?
                .is_some()
            {
                return Err(Error::Forbidden("national holidays cannot be deleted".to_owned()));
            }
            match store.find_dated(code, &date)? {
                None => Err(Error::NotFound),
                Some(existing) if existing.kind != expected => {
                    Err(Error::Forbidden("incompatible types".to_owned()))
                }
                Some(existing) => {
                    store.remove(existing.id)?;
                    Ok(Mutation::Deleted(existing.id))
                }
            }
        }
    }
}
