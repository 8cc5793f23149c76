//! Ring-buffer event store.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use pxstats_core::Event;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 50_000;

/// Append-ordered, capacity-bounded event log. Oldest entries are
/// silently dropped on overflow — accepted lossy retention, not an error.
#[derive(Debug)]
pub struct EventStore {
    events: VecDeque<Event>,
    capacity: usize,
    evicted: u64,
}

/// Store-level statistics for the serving surface.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_events: usize,
    pub capacity: usize,
    pub evicted: u64,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

impl EventStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            evicted: 0,
        }
    }

    /// Append one event. Never rejects on ordering: historical backfill
    /// may insert timestamps older than the newest entry.
    pub fn append(&mut self, event: Event) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.evicted += 1;
            if self.evicted % 1000 == 1 {
                debug!("Event store over capacity, evicting oldest (total {})", self.evicted);
            }
        }
        self.events.push_back(event);
    }

    /// All events with `timestamp >= now - duration`, in store order.
    /// Returns an owned copy, so aggregation reads a consistent snapshot.
    /// Store order is not time order after out-of-order backfill; callers
    /// needing sorted output sort explicitly.
    pub fn window(&self, now: DateTime<Utc>, duration: Duration) -> Vec<Event> {
        let cutoff = now - duration;
        self.events
            .iter()
            .filter(|e| e.timestamp >= cutoff)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_events: self.events.len(),
            capacity: self.capacity,
            evicted: self.evicted,
            oldest: self.events.front().map(|e| e.timestamp),
            newest: self.events.back().map(|e| e.timestamp),
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxstats_core::EventType;

    fn event_at(ts: DateTime<Utc>) -> Event {
        Event::new(EventType::Catch, "Larvitar", ts)
    }

    #[test]
    fn test_window_cutoff() {
        let now = Utc::now();
        let mut store = EventStore::default();
        store.append(event_at(now - Duration::hours(25)));
        store.append(event_at(now - Duration::hours(1)));

        let windowed = store.window(now, Duration::hours(24));
        assert_eq!(windowed.len(), 1);
        assert_eq!(windowed[0].timestamp, now - Duration::hours(1));
    }

    #[test]
    fn test_out_of_order_append_accepted() {
        let now = Utc::now();
        let mut store = EventStore::default();
        store.append(event_at(now));
        store.append(event_at(now - Duration::hours(2)));
        assert_eq!(store.len(), 2);
        // Store order preserved, not time order
        assert_eq!(store.window(now, Duration::hours(3))[0].timestamp, now);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let now = Utc::now();
        let mut store = EventStore::with_capacity(3);
        for i in 0..5 {
            store.append(event_at(now + Duration::seconds(i)));
        }
        assert_eq!(store.len(), 3);
        let stats = store.stats();
        assert_eq!(stats.evicted, 2);
        assert_eq!(stats.oldest, Some(now + Duration::seconds(2)));
        assert_eq!(stats.newest, Some(now + Duration::seconds(4)));
    }

    #[test]
    fn test_empty_window() {
        let store = EventStore::default();
        assert!(store.window(Utc::now(), Duration::hours(24)).is_empty());
    }
}
