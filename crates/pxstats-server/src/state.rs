//! Shared application state.

use parking_lot::{Mutex, RwLock};
use pxstats_core::{PxStatsConfig, Result};
use pxstats_runtime::ClassifierEngine;
use tracing::debug;

/// Shared state accessible from all route handlers. The engine is the
/// single writer; summary reads take the read lock.
pub struct AppState {
    pub config: PxStatsConfig,
    pub engine: RwLock<ClassifierEngine>,
    /// `recorded` counter at the last snapshot, for dirty tracking.
    last_saved: Mutex<u64>,
}

impl AppState {
    pub fn new(config: PxStatsConfig, engine: ClassifierEngine) -> Self {
        let recorded = engine.counters().recorded;
        Self {
            config,
            engine: RwLock::new(engine),
            last_saved: Mutex::new(recorded),
        }
    }

    /// Write the store snapshot if anything was recorded since the last
    /// save. Returns whether a write happened.
    pub fn save_snapshot(&self) -> Result<bool> {
        let engine = self.engine.read();
        let recorded = engine.counters().recorded;

        let mut last_saved = self.last_saved.lock();
        if recorded == *last_saved {
            debug!("Snapshot clean, skipping save");
            return Ok(false);
        }

        pxstats_store::save(engine.store(), &self.config.data_paths.events_file)?;
        *last_saved = recorded;
        Ok(true)
    }
}
