//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ring-buffer capacity bounds; values outside are clamped.
pub const MIN_RING_CAPACITY: usize = 10_000;
pub const MAX_RING_CAPACITY: usize = 100_000;

/// Paths to all PXstats data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Event log snapshot (`data/events.json`).
    pub events_file: PathBuf,
    /// Species lookup table (`data/dex.json`).
    pub dex_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            events_file: root.join("events.json"),
            dex_file: root.join("dex.json"),
            root,
        })
    }
}

/// Top-level PXstats configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PxStatsConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data file paths.
    pub data_paths: DataPaths,
    /// Event store capacity (events beyond this evict oldest-first).
    pub ring_capacity: usize,
    /// Seconds within which a battle notice and its encounter notice pair.
    pub pair_window_secs: i64,
    /// Correlation window entry capacity.
    pub correlation_capacity: usize,
    /// Interval between background snapshot writes.
    pub snapshot_interval_secs: u64,
    /// Default summary window in hours.
    pub summary_window_hours: i64,
}

impl PxStatsConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(10000);

        let ring_capacity = std::env::var("PXSTATS_RING_CAPACITY")
            .ok()
            .and_then(|c| c.parse().ok())
            .unwrap_or(50_000)
            .clamp(MIN_RING_CAPACITY, MAX_RING_CAPACITY);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            ring_capacity,
            pair_window_secs: 10,
            correlation_capacity: 200,
            snapshot_interval_secs: 60,
            summary_window_hours: 24,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths() {
        let dir = std::env::temp_dir().join("pxstats-config-test");
        let paths = DataPaths::new(&dir).unwrap();
        assert!(paths.root.exists());
        assert_eq!(paths.events_file.file_name().unwrap(), "events.json");
        assert_eq!(paths.dex_file.file_name().unwrap(), "dex.json");
    }
}
