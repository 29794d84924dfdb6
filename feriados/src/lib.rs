//! # feriados
//!
//! Resolution and registration of Brazilian public holidays across the
//! national, state, and town jurisdiction hierarchy.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Library consumers should depend on this
//! crate rather than the individual `feriados-*` crates; the HTTP service
//! lives separately in `feriados-server`.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feriados = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use feriados::core::JurisdictionCode;
//! use feriados::engine::{resolve, seed_national, MemoryStore, RegionTable, NATIONAL_SEED};
//!
//! let regions = RegionTable::builtin();
//! let mut store = MemoryStore::new();
//! seed_national(&mut store, &regions, &NATIONAL_SEED)?;
//!
//! let town = JurisdictionCode::parse("3550308")?;
//! let tiradentes = NaiveDate::from_ymd_opt(2024, 4, 21).unwrap();
//! assert_eq!(resolve(&store, &town, tiradentes)?.name, "Tiradentes");
//! # Ok::<(), feriados::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy and jurisdiction codes.
pub use feriados_core as core;

/// Month-day values, Easter computus, and movable feasts.
pub use feriados_time as time;

/// Resolution, mutation, storage, and reference data.
pub use feriados_engine as engine;
