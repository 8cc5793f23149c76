//! The classifier engine — normalize, extract, classify, correlate, store.
//!
//! One instance per process; all state (correlation window, event store,
//! dex, counters) is owned here so call sites share a single handle and
//! tests get isolated instances.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use pxstats_aggregate::{aggregate, Summary, SummaryView};
use pxstats_correlate::{BattleKind, CorrelationWindow};
use pxstats_core::{Event, EventType, Notice, PxStatsConfig};
use pxstats_ingest::{classify, extract_iv, extract_name, extract_shiny, normalize_notice};
use pxstats_resolve::Dex;
use pxstats_store::EventStore;

use crate::types::{IngestCounters, IngestOutcome, SuppressReason};

pub struct ClassifierEngine {
    window: CorrelationWindow,
    store: EventStore,
    dex: Dex,
    counters: IngestCounters,
}

impl ClassifierEngine {
    pub fn new(store: EventStore, dex: Dex, config: &PxStatsConfig) -> Self {
        Self {
            window: CorrelationWindow::new(config.correlation_capacity, config.pair_window_secs),
            store,
            dex,
            counters: IngestCounters::default(),
        }
    }

    /// Engine with default-sized store and window and an empty dex.
    pub fn with_defaults() -> Self {
        Self {
            window: CorrelationWindow::default(),
            store: EventStore::default(),
            dex: Dex::default(),
            counters: IngestCounters::default(),
        }
    }

    /// Process one notice to completion. Extraction failures default
    /// rather than reject: the event type is more reliable than its
    /// details, so a `"?"` name or absent IV still records.
    pub fn ingest(&mut self, notice: &Notice, ts: DateTime<Utc>) -> IngestOutcome {
        self.counters.processed += 1;

        let text = normalize_notice(notice);
        let Some(classification) = classify(&text.norm) else {
            self.counters.discarded += 1;
            debug!("Unclassifiable notice discarded: {:?}", notice.title);
            return IngestOutcome::Discarded;
        };

        let name = self.dex.resolve_extracted(&extract_name(&text.raw));
        let mut event = Event::new(classification.kind, name, ts);
        event.source = classification.source;
        event.iv = extract_iv(&text.raw);
        event.shiny = extract_shiny(&text.raw, &text.norm);

        match classification.kind {
            EventType::Raid | EventType::MaxBattle => {
                let kind = match classification.kind {
                    EventType::Raid => BattleKind::Raid,
                    _ => BattleKind::MaxBattle,
                };
                if !self.window.record_battle(&event.name, kind, ts) {
                    self.counters.duplicate_battles += 1;
                    return IngestOutcome::Suppressed(SuppressReason::DuplicateBattle);
                }
            }
            EventType::Encounter => {
                // The battle event already stands in for this encounter
                if let Some(kind) = self.window.recently_paired(&event.name, ts) {
                    self.counters.paired_encounters += 1;
                    debug!("Encounter for {} paired with recent {:?}", event.name, kind);
                    return IngestOutcome::Suppressed(SuppressReason::PairedBattle(kind));
                }
            }
            // Quest and Rocket record independently; Catch, Fled, and
            // Hatch never correlate.
            _ => {}
        }

        let kind = event.kind;
        self.store.append(event);
        self.counters.recorded += 1;
        IngestOutcome::Recorded(kind)
    }

    /// Ingest a multi-notice message in arrival order.
    pub fn ingest_batch(&mut self, notices: &[Notice], ts: DateTime<Utc>) -> Vec<IngestOutcome> {
        notices.iter().map(|n| self.ingest(n, ts)).collect()
    }

    /// Windowed summary; read-only over a snapshot of the store.
    pub fn summarize(&self, now: DateTime<Utc>, window: Duration, view: SummaryView) -> Summary {
        let events = self.store.window(now, window);
        aggregate(&events, now, window, view)
    }

    /// The `n` most recent shiny catches across the whole store (not
    /// windowed — the consumer wants the last ones seen, however old).
    pub fn recent_shinies(&self, n: usize) -> Vec<Event> {
        let events: Vec<Event> = self.store.iter().cloned().collect();
        pxstats_aggregate::most_recent(&events, n, |e| e.is_shiny_catch())
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn counters(&self) -> IngestCounters {
        self.counters
    }

    pub fn dex(&self) -> &Dex {
        &self.dex
    }
}
