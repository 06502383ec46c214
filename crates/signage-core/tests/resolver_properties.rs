//! Property tests for the resolution engine.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use proptest::prelude::*;

use signage_core::{resolve, select_event, select_item, Content, Event, Item, ScheduleConfig, TimeOfDay};

fn item(tag: usize, secs: u32) -> Item {
    Item {
        content: Content::Url(format!("item-{tag}.jpg")),
        duration_secs: secs,
        transition: None,
    }
}

fn default_event(durations: &[u32]) -> Event {
    Event {
        name: "default".into(),
        start: None,
        end: None,
        items: durations
            .iter()
            .enumerate()
            .map(|(tag, &secs)| item(tag, secs))
            .collect(),
    }
}

fn day() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 11)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// (start minute, end minute) pairs with start < end, within one day.
fn window_strategy() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1439).prop_flat_map(|start| (Just(start), (start + 1)..1440))
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(window_strategy(), 0..8).prop_map(|windows| {
        windows
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| Event {
                name: format!("event-{index}"),
                start: Some(TimeOfDay::new(start / 60, start % 60)),
                end: Some(TimeOfDay::new(end / 60, end % 60)),
                items: vec![item(index, 60)],
            })
            .collect()
    })
}

proptest! {
    /// The selected event is the default exactly when no window contains
    /// the instant; otherwise it contains the instant and carries the
    /// latest start among all containing windows, first of equal starts.
    #[test]
    fn selection_matches_the_overlap_rule(
        events in events_strategy(),
        minute in 0u32..1440,
    ) {
        let config = ScheduleConfig {
            default: default_event(&[60]),
            events,
        };
        let at = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let selected = select_event(&config, at);

        let containing: Vec<&Event> =
            config.events.iter().filter(|e| e.contains(minute)).collect();

        if containing.is_empty() {
            prop_assert_eq!(&selected.name, "default");
        } else {
            let best_start = containing
                .iter()
                .map(|e| e.start.unwrap().minute_of_day())
                .max()
                .unwrap();
            let expected = containing
                .iter()
                .find(|e| e.start.unwrap().minute_of_day() == best_start)
                .unwrap();
            prop_assert_eq!(&selected.name, &expected.name);
        }
    }

    /// Resolution is a pure function of (config, instant).
    #[test]
    fn resolution_is_deterministic(
        events in events_strategy(),
        minute in 0u32..1440,
        second in 0u32..60,
    ) {
        let config = ScheduleConfig {
            default: default_event(&[10, 20, 50]),
            events,
        };
        let at = day() + Duration::seconds(i64::from(minute * 60 + second));
        let first = resolve(&config, at).unwrap();
        let second_pass = resolve(&config, at).unwrap();
        prop_assert_eq!(first.event.name.clone(), second_pass.event.name.clone());
        prop_assert_eq!(first.item.clone(), second_pass.item.clone());
    }

    /// Over one full cycle anchored at midnight, each item owns exactly the
    /// span its duration says: one millisecond past its boundary it is on
    /// screen, and it still claims the instant its span closes.
    #[test]
    fn each_item_owns_its_span_of_the_cycle(
        durations in prop::collection::vec(1u32..300, 1..6),
    ) {
        let config = ScheduleConfig {
            default: default_event(&durations),
            events: vec![],
        };
        let event = &config.default;

        let mut boundary_ms: u64 = 0;
        for (index, &secs) in durations.iter().enumerate() {
            let opening = day() + Duration::milliseconds(boundary_ms as i64 + 1);
            let shown = select_item(&config, event, opening).unwrap();
            prop_assert_eq!(shown.clone(), event.items[index].clone());

            boundary_ms += u64::from(secs) * 1000;
            // The very last boundary is the start of the next cycle, which
            // the first item claims again.
            if index + 1 < durations.len() {
                let closing = day() + Duration::milliseconds(boundary_ms as i64);
                let shown = select_item(&config, event, closing).unwrap();
                prop_assert_eq!(shown.clone(), event.items[index].clone());
            }
        }
    }

    /// Folding arbitrary elapsed time modulo the cycle never changes the
    /// answer: now and now + one full cycle show the same item. Both
    /// instants stay on one calendar day, since the rotation re-anchors at
    /// each midnight.
    #[test]
    fn rotation_repeats_with_cycle_period(
        durations in prop::collection::vec(1u32..300, 1..6),
        offset_secs in 0u32..80_000,
    ) {
        let config = ScheduleConfig {
            default: default_event(&durations),
            events: vec![],
        };
        let event = &config.default;
        let cycle_secs: i64 = durations.iter().map(|&d| i64::from(d)).sum();

        let now = day() + Duration::seconds(i64::from(offset_secs));
        let later = now + Duration::seconds(cycle_secs);
        let here = select_item(&config, event, now).unwrap();
        let there = select_item(&config, event, later).unwrap();
        prop_assert_eq!(here.clone(), there.clone());
    }
}

#[test]
fn selected_window_contains_the_instant() {
    // Deterministic sweep of a whole day: whatever comes back either has no
    // window (the default) or a window containing the queried minute.
    let config = ScheduleConfig {
        default: default_event(&[30]),
        events: vec![Event {
            name: "morning".into(),
            start: Some(TimeOfDay::new(9, 0)),
            end: Some(TimeOfDay::new(10, 0)),
            items: vec![item(0, 30)],
        }],
    };
    for minute in 0..1440 {
        let at = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let event = select_event(&config, at);
        match (&event.start, &event.end) {
            (None, None) => {}
            _ => assert!(event.contains(at.hour() * 60 + at.minute())),
        }
    }
}
