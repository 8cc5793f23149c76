//! PXstats Core — event model, configuration, errors.

pub mod config;
pub mod error;
pub mod event;

pub use config::{DataPaths, PxStatsConfig};
pub use error::{Error, Result};
pub use event::{EncounterSource, Event, EventType, IvTriple, Notice, NoticeField, MAX_IV};
