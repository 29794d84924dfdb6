//! feriados-server binary: seed, bind, serve.

use std::sync::Arc;

use feriados_engine::{seed_national, MemoryStore, RegionTable, NATIONAL_SEED};
use feriados_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    feriados_server::telemetry::init();

    let config = ServerConfig::from_env();
    let regions = match &config.regions_path {
        Some(path) => RegionTable::from_csv_path(path)?,
        None => RegionTable::builtin(),
    };

    let mut store = MemoryStore::new();
    let created = seed_national(&mut store, &regions, &NATIONAL_SEED)?;
    tracing::info!(created, states = regions.state_count(), "holiday store seeded");

    let state = Arc::new(AppState::new(store, regions));
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
