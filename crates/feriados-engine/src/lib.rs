//! Holiday resolution and mutation engine.
//!
//! This crate decides, for a jurisdiction code and a calendar date, which of
//! several overlapping holiday definitions applies (national, state, town,
//! or movable), and carries out holiday writes with their propagation rules:
//! a state-level write fans out to every town of that state, national records
//! are immutable through the public mutation entry points, and type-mismatched
//! deletes are refused.
//!
//! Storage is behind the [`HolidayStore`] trait; [`MemoryStore`] is the
//! in-process implementation. The state-to-town hierarchy comes from a
//! [`RegionProvider`], normally the bundled [`RegionTable`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod holiday;
pub mod mutation;
pub mod regions;
pub mod resolution;
pub mod seed;
pub mod store;

pub use holiday::{Holiday, HolidayDate, HolidayId, HolidayKind, NewHoliday};
pub use mutation::{delete, delete_movable, upsert, upsert_movable, Mutation};
pub use regions::{RegionProvider, RegionTable};
pub use resolution::resolve;
pub use seed::{seed_national, SeedHoliday, NATIONAL_SEED};
pub use store::{HolidayStore, MemoryStore};
