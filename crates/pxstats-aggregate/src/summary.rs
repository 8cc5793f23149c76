//! Summary computation over a windowed event slice.

use chrono::{DateTime, Duration, Utc};
use pxstats_core::{EncounterSource, Event, EventType};

use crate::types::{Breakdown, Summary, SummaryView};

/// How many entries the recency lists carry.
const RECENCY_LEN: usize = 5;

/// Event types that represent "something was available to respond to".
/// Hatch and Fled are deliberately excluded from the denominator.
fn counts_as_encounter(kind: EventType) -> bool {
    matches!(
        kind,
        EventType::Encounter
            | EventType::Quest
            | EventType::Raid
            | EventType::Rocket
            | EventType::MaxBattle
    )
}

/// Compute the summary for one windowed slice. Never fails; an all-zero
/// window is a valid (just unproductive) window.
pub fn aggregate(events: &[Event], now: DateTime<Utc>, window: Duration, view: SummaryView) -> Summary {
    let mut breakdown = Breakdown::default();
    let mut encounters = 0u64;
    let mut catches = 0u64;
    let mut shinies = 0u64;
    let mut perfect = 0u64;
    let mut fled = 0u64;

    for event in events {
        if counts_as_encounter(event.kind) {
            encounters += 1;
        }

        match event.kind {
            EventType::Encounter => match event.source.unwrap_or(EncounterSource::Wild) {
                EncounterSource::Wild => breakdown.wild += 1,
                EncounterSource::Incense => breakdown.incense += 1,
                EncounterSource::Lure => breakdown.lure += 1,
                // Backfill-only sources fold into the activity buckets
                EncounterSource::Quest => breakdown.quest += 1,
                EncounterSource::Raid => breakdown.raid += 1,
                EncounterSource::Rocket => breakdown.rocket += 1,
                EncounterSource::Max => breakdown.max += 1,
            },
            EventType::Quest => breakdown.quest += 1,
            EventType::Raid => breakdown.raid += 1,
            EventType::Rocket => breakdown.rocket += 1,
            EventType::MaxBattle => breakdown.max += 1,
            EventType::Fled => {
                breakdown.runaways += 1;
                fled += 1;
            }
            EventType::Catch => {
                catches += 1;
                if event.shiny {
                    shinies += 1;
                }
                if event.iv.is_some_and(|iv| iv.is_perfect()) {
                    perfect += 1;
                }
            }
            EventType::Hatch => {}
        }
    }

    // Clamped denominators instead of branches: an empty window degrades
    // to 0.0 without special-casing.
    let catch_rate = catches as f64 / encounters.max(1) as f64 * 100.0;
    let shiny_rate = shinies as f64 / catches.max(1) as f64 * 100.0;

    Summary {
        view,
        window_hours: window.num_hours(),
        generated_at: now,
        encounters,
        catches,
        shinies,
        perfect,
        fled,
        runaways_estimate: encounters.saturating_sub(catches),
        catch_rate,
        shiny_rate,
        breakdown,
        latest_catches: most_recent(events, RECENCY_LEN, |e| e.is_catch()),
        latest_shinies: most_recent(events, RECENCY_LEN, |e| e.is_shiny_catch()),
    }
}

/// The `n` most recent matching events, descending by timestamp, ties
/// broken by store-insertion order (later insert first).
pub fn most_recent(events: &[Event], n: usize, pred: impl Fn(&Event) -> bool) -> Vec<Event> {
    let mut matching: Vec<(usize, &Event)> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| pred(e))
        .collect();
    matching.sort_by(|(ia, a), (ib, b)| (b.timestamp, ib).cmp(&(a.timestamp, ia)));
    matching.into_iter().take(n).map(|(_, e)| e.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pxstats_core::IvTriple;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn event(kind: EventType, name: &str, secs: i64) -> Event {
        Event::new(kind, name, t(secs))
    }

    fn run(events: &[Event]) -> Summary {
        aggregate(events, t(3600), Duration::hours(24), SummaryView::CatchRate)
    }

    #[test]
    fn test_empty_window_degrades_to_zero() {
        let summary = run(&[]);
        assert_eq!(summary.encounters, 0);
        assert_eq!(summary.catch_rate, 0.0);
        assert_eq!(summary.shiny_rate, 0.0);
        assert_eq!(summary.runaways_estimate, 0);
        assert!(summary.latest_catches.is_empty());
    }

    #[test]
    fn test_encounter_denominator_policy() {
        // Hatch and Fled do not count toward encounters
        let events = vec![
            event(EventType::Encounter, "a", 0),
            event(EventType::Quest, "b", 1),
            event(EventType::Raid, "c", 2),
            event(EventType::Rocket, "d", 3),
            event(EventType::MaxBattle, "e", 4),
            event(EventType::Hatch, "f", 5),
            event(EventType::Fled, "g", 6),
            event(EventType::Catch, "h", 7),
        ];
        let summary = run(&events);
        assert_eq!(summary.encounters, 5);
        assert_eq!(summary.fled, 1);
        assert_eq!(summary.runaways_estimate, 4);
        assert_eq!(summary.catch_rate, 20.0);
    }

    #[test]
    fn test_runaways_estimate_clamped() {
        // More catches than encounters (e.g. hatch-heavy window)
        let events = vec![
            event(EventType::Catch, "a", 0),
            event(EventType::Catch, "b", 1),
            event(EventType::Encounter, "c", 2),
        ];
        let summary = run(&events);
        assert_eq!(summary.runaways_estimate, 0);
    }

    #[test]
    fn test_shiny_and_perfect_counting() {
        let mut shiny = event(EventType::Catch, "Larvitar", 0);
        shiny.shiny = true;
        shiny.iv = Some(IvTriple(15, 15, 14));

        let mut hundo = event(EventType::Catch, "Gible", 1);
        hundo.iv = Some(IvTriple(15, 15, 15));

        // A shiny encounter is not a shiny catch
        let mut shiny_enc = event(EventType::Encounter, "Pidgey", 2);
        shiny_enc.shiny = true;
        shiny_enc.source = Some(EncounterSource::Wild);

        let summary = run(&[shiny, hundo, shiny_enc]);
        assert_eq!(summary.catches, 2);
        assert_eq!(summary.shinies, 1);
        assert_eq!(summary.perfect, 1);
    }

    #[test]
    fn test_breakdown_buckets() {
        let mut incense = event(EventType::Encounter, "a", 0);
        incense.source = Some(EncounterSource::Incense);
        // Backfilled encounter with an activity source
        let mut backfilled = event(EventType::Encounter, "b", 1);
        backfilled.source = Some(EncounterSource::Raid);

        let events = vec![
            incense,
            backfilled,
            event(EventType::Raid, "c", 2),
            event(EventType::Rocket, "d", 3),
            event(EventType::Fled, "e", 4),
        ];
        let summary = run(&events);
        assert_eq!(summary.breakdown.incense, 1);
        assert_eq!(summary.breakdown.raid, 2);
        assert_eq!(summary.breakdown.rocket, 1);
        assert_eq!(summary.breakdown.runaways, 1);
        assert_eq!(summary.breakdown.wild, 0);
    }

    #[test]
    fn test_latest_catches_order_and_ties() {
        let events = vec![
            event(EventType::Catch, "first", 0),
            event(EventType::Catch, "tie-early", 10),
            event(EventType::Catch, "tie-late", 10),
            event(EventType::Catch, "newest", 20),
            event(EventType::Catch, "old-2", 1),
            event(EventType::Catch, "old-3", 2),
        ];
        let summary = run(&events);
        let names: Vec<_> = summary.latest_catches.iter().map(|e| e.name.as_str()).collect();
        // Descending timestamp; equal timestamps break toward the later insert
        assert_eq!(names, ["newest", "tie-late", "tie-early", "old-3", "old-2"]);
    }

    #[test]
    fn test_latest_shinies_only_shiny_catches() {
        let mut shiny = event(EventType::Catch, "shiny", 0);
        shiny.shiny = true;
        let plain = event(EventType::Catch, "plain", 1);

        let summary = run(&[shiny, plain]);
        assert_eq!(summary.latest_shinies.len(), 1);
        assert_eq!(summary.latest_shinies[0].name, "shiny");
        assert_eq!(summary.latest_catches.len(), 2);
    }
}
