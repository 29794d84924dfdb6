//! Shared server state.

use std::sync::RwLock;

use feriados_engine::{MemoryStore, RegionTable};

/// State shared by every request handler.
///
/// The store sits behind an `RwLock`: resolves take the read lock, mutations
/// the write lock, making every engine call one serializable transaction
/// with respect to concurrent requests.
#[derive(Debug)]
pub struct AppState {
    /// Holiday records.
    pub store: RwLock<MemoryStore>,
    /// State-to-town hierarchy, immutable after load.
    pub regions: RegionTable,
}

impl AppState {
    /// Bundles a loaded store and region table.
    pub fn new(store: MemoryStore, regions: RegionTable) -> Self {
        AppState {
            store: RwLock::new(store),
            regions,
        }
    }
}
