//! PXstats Correlate — keeps one real-world occurrence from becoming two
//! logical events.
//!
//! Timed activities (raids, max battles) emit a battle notice and, moments
//! later, a generic encounter notice for the same entity. A short bounded
//! window of recent battles lets the ingest path suppress both the
//! repeated battle notice and the trailing encounter notice.

pub mod window;

pub use window::{BattleKind, CorrelationWindow, DEFAULT_CAPACITY, DEFAULT_PAIR_WINDOW_SECS};
