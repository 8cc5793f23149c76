//! PXstats Runtime — one engine instance owns the whole pipeline.

pub mod engine;
pub mod types;

pub use engine::ClassifierEngine;
pub use types::{IngestCounters, IngestOutcome, SuppressReason};
