//! Summary types.

use chrono::{DateTime, Utc};
use pxstats_core::Event;
use serde::{Deserialize, Serialize};

/// Consumer-selected rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryView {
    #[default]
    #[serde(rename = "catch-rate")]
    CatchRate,
    #[serde(rename = "shiny-rate")]
    ShinyRate,
}

/// Counts keyed by encounter source plus timed-activity type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub wild: u64,
    pub incense: u64,
    pub lure: u64,
    pub quest: u64,
    pub raid: u64,
    pub rocket: u64,
    pub max: u64,
    pub runaways: u64,
}

/// The windowed summary handed to consumers.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub view: SummaryView,
    pub window_hours: i64,
    pub generated_at: DateTime<Utc>,
    /// Everything that was available to respond to: encounters of any
    /// source plus quest, raid, rocket, and max-battle events.
    pub encounters: u64,
    pub catches: u64,
    pub shinies: u64,
    pub perfect: u64,
    /// Explicit flee notices. Reported alongside the estimate below; the
    /// two measure different things.
    pub fled: u64,
    /// `max(0, encounters - catches)` — an estimate, since not every
    /// notice format emits a flee signal.
    pub runaways_estimate: u64,
    pub catch_rate: f64,
    pub shiny_rate: f64,
    pub breakdown: Breakdown,
    pub latest_catches: Vec<Event>,
    pub latest_shinies: Vec<Event>,
}
