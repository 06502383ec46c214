//! Schedule data model.
//!
//! A schedule is a default event plus any number of timed events. Each event
//! holds an ordered rotation of display items with per-item durations. The
//! model here is the *normalized* form: time shorthands have already been
//! expanded into [`TimeOfDay`] pairs by [`normalize`](crate::schedule::normalize).
//!
//! A `ScheduleConfig` is built once from external input, then treated as
//! immutable; a fresh poll of the source produces a wholly new value rather
//! than mutating the old one.

mod normalize;

pub use normalize::{normalize, RawEvent, RawItem, RawScheduleConfig, RawTime};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A wall-clock time of day in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// 0-23
    pub hours: u32,
    /// 0-59
    pub minutes: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Minutes since midnight. Window comparisons happen in this unit.
    pub fn minute_of_day(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// The same instant as a chrono time, seconds = 0.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// What an item puts on screen. The payload is opaque to the resolver; the
/// display driver decides how to render each variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Url(String),
    Markdown(String),
    Html(String),
}

/// One displayable unit within an event's rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub content: Content,
    /// How long the item stays on screen, in seconds.
    pub duration_secs: u32,
    /// Cosmetic transition tag (e.g. "fade"). Not part of resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl Item {
    /// Display duration in milliseconds.
    ///
    /// Uses saturating arithmetic so absurd durations cannot overflow.
    pub fn duration_ms(&self) -> u64 {
        u64::from(self.duration_secs).saturating_mul(1000)
    }
}

/// A named slot in the schedule.
///
/// Only the default event may omit `start`/`end`; normalization guarantees
/// every other event carries both, with `start < end` on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeOfDay>,
    pub items: Vec<Item>,
}

impl Event {
    /// Whether this event's window contains the given minute of the day.
    /// Start is inclusive, end is exclusive, so the display changes exactly
    /// at boundary minutes and the outgoing event does not also claim them.
    pub fn contains(&self, minute_of_day: u32) -> bool {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => {
                minute_of_day >= start.minute_of_day() && minute_of_day < end.minute_of_day()
            }
            _ => false,
        }
    }

    /// Total length of one pass through the rotation, in milliseconds.
    /// Zero means the rotation is degenerate and cannot be resolved.
    pub fn cycle_length_ms(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.duration_ms()))
    }
}

/// A normalized schedule: one default event plus the timed events.
///
/// Immutable after construction. Resolution functions borrow it and retain
/// no state between calls, so one value may serve any number of concurrent
/// readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub default: Event,
    pub events: Vec<Event>,
}

impl ScheduleConfig {
    /// The configured event whose window ends last, if any events exist.
    /// Ties go to the earlier entry in configuration order.
    pub fn latest_ending_event(&self) -> Option<&Event> {
        let end_minute =
            |event: &Event| event.end.map(|end| end.minute_of_day()).unwrap_or(0);
        self.events.iter().fold(None, |best: Option<&Event>, event| {
            match best {
                Some(current) if end_minute(event) <= end_minute(current) => Some(current),
                _ => Some(event),
            }
        })
    }
}
