//! Tracing setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity comes from `FERIADOS_LOG`, an `EnvFilter` directive string,
/// defaulting to info.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("FERIADOS_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
