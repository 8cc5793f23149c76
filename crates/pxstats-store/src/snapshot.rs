//! Flat JSON snapshot of the event log.
//!
//! Events round-trip losslessly; the only asymmetry is the retention
//! bound, which applies identically before and after a reload.

use std::path::Path;

use pxstats_core::{Error, Event, Result};
use tracing::{info, warn};

use crate::ring::EventStore;

/// Write the full store to `path` as a JSON array, oldest first.
pub fn save(store: &EventStore, path: &Path) -> Result<()> {
    let events: Vec<&Event> = store.iter().collect();
    let data = serde_json::to_string_pretty(&events)?;
    std::fs::write(path, data)?;
    info!("Saved {} events to {}", events.len(), path.display());
    Ok(())
}

/// Load a snapshot written by [`save`]. A missing file yields an empty
/// store; a malformed file is an error. Snapshots larger than `capacity`
/// keep only the newest entries.
pub fn load(path: &Path, capacity: usize) -> Result<EventStore> {
    if !path.exists() {
        info!("No snapshot at {}, starting empty", path.display());
        return Ok(EventStore::with_capacity(capacity));
    }

    let data = std::fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&data)
        .map_err(|e| Error::Snapshot(format!("{}: {}", path.display(), e)))?;

    Ok(fill(events, capacity))
}

/// Import a log written by the legacy bot. Same array shape, but entries
/// were loosely typed; anything that does not convert is skipped, not
/// fatal. Returns the store and the number of skipped entries.
pub fn load_legacy(path: &Path, capacity: usize) -> Result<(EventStore, usize)> {
    let data = std::fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&data)
        .map_err(|e| Error::Snapshot(format!("{}: {}", path.display(), e)))?;

    let total = raw.len();
    let events: Vec<Event> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Event>(value) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping legacy entry: {}", e);
                None
            }
        })
        .collect();

    let skipped = total - events.len();
    info!("Imported {} legacy events ({} skipped)", events.len(), skipped);
    Ok((fill(events, capacity), skipped))
}

fn fill(events: Vec<Event>, capacity: usize) -> EventStore {
    let mut store = EventStore::with_capacity(capacity);
    let skip = events.len().saturating_sub(capacity);
    for event in events.into_iter().skip(skip) {
        store.append(event);
    }
    store
}
