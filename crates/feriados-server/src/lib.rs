//! HTTP interface for the holiday engine.
//!
//! Deliberately thin: routes decode path and body into the engine's input
//! types, call it, and encode outcomes back into status codes and JSON
//! bodies. All decision logic lives in `feriados-engine`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
