//! # feriados-core
//!
//! Foundational types shared across the feriados-rs workspace: the error
//! taxonomy, the `Result` alias, and jurisdiction-code classification.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_input!` validation macro.
pub mod errors;

/// Jurisdiction codes (national sentinel, state, town).
pub mod jurisdiction;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use jurisdiction::JurisdictionCode;
