//! PXstats Store — append-ordered event log with bounded retention.

pub mod ring;
pub mod snapshot;

pub use ring::{EventStore, StoreStats, DEFAULT_CAPACITY};
pub use snapshot::{load, load_legacy, save};
