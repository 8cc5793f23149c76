//! Bounded FIFO of recently observed timed-activity events.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 200;
pub const DEFAULT_PAIR_WINDOW_SECS: i64 = 10;

/// Timed-activity kinds that participate in pairing. Quest and Rocket
/// encounters are always recorded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleKind {
    Raid,
    MaxBattle,
}

#[derive(Debug, Clone)]
struct WindowEntry {
    timestamp: DateTime<Utc>,
    name: String,
    kind: BattleKind,
}

/// Sliding window of recent battles, keyed by entity name. Entries age
/// out only by capacity; the pair window bounds the lookback in time.
#[derive(Debug)]
pub struct CorrelationWindow {
    entries: VecDeque<WindowEntry>,
    capacity: usize,
    pair_window: Duration,
}

impl CorrelationWindow {
    pub fn new(capacity: usize, pair_window_secs: i64) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            pair_window: Duration::seconds(pair_window_secs),
        }
    }

    /// Record a battle notice. Returns `false` (and records nothing) when
    /// the same name+kind was already seen within the pair window — a
    /// repeated notice for the same occurrence, not an error.
    pub fn record_battle(&mut self, name: &str, kind: BattleKind, ts: DateTime<Utc>) -> bool {
        // Full backward scan: insertion order is not guaranteed to be
        // time order (backfill), and the buffer is small.
        let duplicate = self
            .entries
            .iter()
            .rev()
            .filter(|e| within(e.timestamp, ts, self.pair_window))
            .any(|e| e.kind == kind && e.name == name);

        if duplicate {
            debug!("Duplicate {:?} notice for {} suppressed", kind, name);
            return false;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(WindowEntry {
            timestamp: ts,
            name: name.to_string(),
            kind,
        });
        true
    }

    /// Any battle kind recorded for `name` within the pair window. Used by
    /// the encounter path: the battle event already stands in for the
    /// encounter-phase notice.
    pub fn recently_paired(&self, name: &str, ts: DateTime<Utc>) -> Option<BattleKind> {
        self.entries
            .iter()
            .rev()
            .filter(|e| within(e.timestamp, ts, self.pair_window))
            .find(|e| e.name == name)
            .map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CorrelationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_PAIR_WINDOW_SECS)
    }
}

/// Absolute delta comparison, so slightly out-of-order probes still pair.
fn within(entry_ts: DateTime<Utc>, probe_ts: DateTime<Utc>, window: Duration) -> bool {
    (probe_ts - entry_ts).abs() < window
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_duplicate_battle_within_window() {
        let mut w = CorrelationWindow::default();
        assert!(w.record_battle("X", BattleKind::Raid, t(0)));
        assert!(!w.record_battle("X", BattleKind::Raid, t(3)));
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_battle_past_window_is_new() {
        let mut w = CorrelationWindow::default();
        assert!(w.record_battle("X", BattleKind::Raid, t(0)));
        assert!(w.record_battle("X", BattleKind::Raid, t(10)));
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let mut w = CorrelationWindow::default();
        assert!(w.record_battle("X", BattleKind::Raid, t(0)));
        assert!(w.record_battle("X", BattleKind::MaxBattle, t(1)));
    }

    #[test]
    fn test_recently_paired() {
        let mut w = CorrelationWindow::default();
        w.record_battle("Larvitar", BattleKind::Raid, t(0));

        assert_eq!(w.recently_paired("Larvitar", t(3)), Some(BattleKind::Raid));
        assert_eq!(w.recently_paired("Pidgey", t(3)), None);
        assert_eq!(w.recently_paired("Larvitar", t(30)), None);
    }

    #[test]
    fn test_out_of_order_probe_still_pairs() {
        let mut w = CorrelationWindow::default();
        w.record_battle("X", BattleKind::MaxBattle, t(5));
        assert_eq!(w.recently_paired("X", t(2)), Some(BattleKind::MaxBattle));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut w = CorrelationWindow::new(2, 1_000_000);
        w.record_battle("A", BattleKind::Raid, t(0));
        w.record_battle("B", BattleKind::Raid, t(1));
        w.record_battle("C", BattleKind::Raid, t(2));
        assert_eq!(w.len(), 2);
        assert_eq!(w.recently_paired("A", t(3)), None);
        assert_eq!(w.recently_paired("B", t(3)), Some(BattleKind::Raid));
    }
}
