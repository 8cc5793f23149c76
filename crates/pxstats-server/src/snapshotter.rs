//! Background periodic snapshot task.
//!
//! Durability is best-effort: the store is flushed on an interval, only
//! when dirty. Crash-consistency of the snapshot file is out of scope.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::state::AppState;

pub fn start_snapshot_worker(state: Arc<AppState>) {
    let interval = Duration::from_secs(state.config.snapshot_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick fires immediately; skip it
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match state.save_snapshot() {
                Ok(true) => debug!("Periodic snapshot written"),
                Ok(false) => {}
                Err(e) => warn!("Periodic snapshot failed: {}", e),
            }
        }
    });
}
