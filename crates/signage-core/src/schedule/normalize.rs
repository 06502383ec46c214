//! One-time preprocessing of a raw schedule document.
//!
//! Schedule sources hand over a [`RawScheduleConfig`], which accepts the
//! compact authoring notations: times as `"13.30"` shorthand strings, bare
//! numbers, or structured `{hours, minutes}` pairs; item content as exactly
//! one of the `url`/`markdown`/`html` keys. [`normalize`] expands everything
//! into the strict [`ScheduleConfig`] model and validates required fields.
//!
//! Normalization consumes the raw document and builds a fresh structure; it
//! never edits shared data in place, so a caller may keep the raw form
//! around for inspection while resolvers run against the normalized one.

use serde::Deserialize;

use super::{Content, Event, Item, ScheduleConfig, TimeOfDay};
use crate::error::ConfigError;

/// A start/end time as it appears in an unprocessed schedule document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    /// Shorthand string, e.g. `"11.30"` or `"13"`.
    Shorthand(String),
    /// Bare number, e.g. `11.30` in a JSON document. Lossy: JSON cannot
    /// tell `11.30` from `11.3`, so quoted strings are the recommended form.
    Decimal(f64),
    /// Already-structured pair.
    Parts { hours: u32, minutes: u32 },
}

/// An item as authored: exactly one content key plus an optional duration
/// and transition tag.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    /// Display duration in seconds. Sources fill in their own default
    /// before normalization (the filesystem loader uses 60).
    pub seconds: u32,
    #[serde(default)]
    pub transition: Option<String>,
}

/// An event as authored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub name: String,
    #[serde(default)]
    pub start: Option<RawTime>,
    #[serde(default)]
    pub end: Option<RawTime>,
    #[serde(default)]
    pub items: Vec<RawItem>,
}

/// A whole schedule document as authored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleConfig {
    pub default: Option<RawEvent>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// Expand shorthand notations and validate the document.
///
/// Fails with a [`ConfigError`] naming the offending event when a timed
/// event lacks a start or end, a time cannot be parsed, or a window is not
/// `start < end`. Empty item lists are allowed here; they surface at
/// resolution time as degenerate cycles scoped to the one event.
pub fn normalize(raw: RawScheduleConfig) -> Result<ScheduleConfig, ConfigError> {
    let default_raw = raw.default.ok_or(ConfigError::MissingDefault)?;
    let default = Event {
        name: default_raw.name.clone(),
        start: None,
        end: None,
        items: normalize_items(&default_raw.name, default_raw.items)?,
    };

    let mut events = Vec::with_capacity(raw.events.len());
    for raw_event in raw.events {
        let name = raw_event.name.clone();
        let start = match raw_event.start {
            Some(time) => normalize_time(&name, &time)?,
            None => return Err(ConfigError::MissingStart { event: name }),
        };
        let end = match raw_event.end {
            Some(time) => normalize_time(&name, &time)?,
            None => return Err(ConfigError::MissingEnd { event: name }),
        };
        if start.minute_of_day() >= end.minute_of_day() {
            return Err(ConfigError::InvalidWindow {
                event: name,
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        events.push(Event {
            items: normalize_items(&name, raw_event.items)?,
            name,
            start: Some(start),
            end: Some(end),
        });
    }

    Ok(ScheduleConfig { default, events })
}

fn normalize_items(event: &str, raw_items: Vec<RawItem>) -> Result<Vec<Item>, ConfigError> {
    raw_items
        .into_iter()
        .map(|raw| {
            let content = match (raw.url, raw.markdown, raw.html) {
                (Some(url), None, None) => Content::Url(url),
                (None, Some(markdown), None) => Content::Markdown(markdown),
                (None, None, Some(html)) => Content::Html(html),
                (None, None, None) => {
                    return Err(ConfigError::InvalidItem {
                        event: event.to_string(),
                        message: "item has no url, markdown or html content".into(),
                    })
                }
                _ => {
                    return Err(ConfigError::InvalidItem {
                        event: event.to_string(),
                        message: "item has more than one content key".into(),
                    })
                }
            };
            Ok(Item {
                content,
                duration_secs: raw.seconds,
                transition: raw.transition,
            })
        })
        .collect()
}

fn normalize_time(event: &str, raw: &RawTime) -> Result<TimeOfDay, ConfigError> {
    match raw {
        RawTime::Shorthand(text) => parse_shorthand(event, text),
        // Shortest decimal representation, then the same literal-minutes
        // parse the string form gets ("13.5" means 13:05).
        RawTime::Decimal(value) => parse_shorthand(event, &format!("{value}")),
        RawTime::Parts { hours, minutes } => {
            check_range(event, &format!("{hours}.{minutes}"), *hours, *minutes)
        }
    }
}

/// Parse the `"H.MM"` shorthand. The fractional digits are literal minutes,
/// not a fraction of an hour: `"13.5"` is 13:05 and `"13.30"` is 13:30. No
/// fractional part means minutes = 0.
fn parse_shorthand(event: &str, text: &str) -> Result<TimeOfDay, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidTime {
        event: event.to_string(),
        value: text.to_string(),
        message: message.to_string(),
    };

    let mut parts = text.trim().splitn(2, '.');
    let hours_text = parts.next().unwrap_or_default();
    let hours: u32 = hours_text
        .parse()
        .map_err(|_| invalid("hours are not a number"))?;
    let minutes: u32 = match parts.next() {
        None | Some("") => 0,
        Some(minutes_text) => minutes_text
            .parse()
            .map_err(|_| invalid("minutes are not a number"))?,
    };
    check_range(event, text, hours, minutes)
}

fn check_range(
    event: &str,
    value: &str,
    hours: u32,
    minutes: u32,
) -> Result<TimeOfDay, ConfigError> {
    if hours > 23 || minutes > 59 {
        return Err(ConfigError::InvalidTime {
            event: event.to_string(),
            value: value.to_string(),
            message: format!("{hours}:{minutes} is not a time of day"),
        });
    }
    Ok(TimeOfDay::new(hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item(url: &str) -> RawItem {
        RawItem {
            url: Some(url.into()),
            markdown: None,
            html: None,
            seconds: 60,
            transition: None,
        }
    }

    fn raw_default() -> RawEvent {
        RawEvent {
            name: "default".into(),
            start: None,
            end: None,
            items: vec![raw_item("welcome.jpg")],
        }
    }

    #[test]
    fn shorthand_fraction_is_literal_minutes() {
        assert_eq!(
            parse_shorthand("e", "13.5").unwrap(),
            TimeOfDay::new(13, 5)
        );
        assert_eq!(
            parse_shorthand("e", "13.30").unwrap(),
            TimeOfDay::new(13, 30)
        );
        assert_eq!(parse_shorthand("e", "13").unwrap(), TimeOfDay::new(13, 0));
        assert_eq!(parse_shorthand("e", "0.0").unwrap(), TimeOfDay::new(0, 0));
    }

    #[test]
    fn shorthand_rejects_garbage() {
        assert!(parse_shorthand("e", "noon").is_err());
        assert!(parse_shorthand("e", "25").is_err());
        assert!(parse_shorthand("e", "12.61").is_err());
        assert!(parse_shorthand("e", "").is_err());
        assert!(parse_shorthand("e", "-3").is_err());
    }

    #[test]
    fn decimal_form_parses_like_the_string_form() {
        let time = normalize_time("e", &RawTime::Decimal(13.5)).unwrap();
        assert_eq!(time, TimeOfDay::new(13, 5));
        let time = normalize_time("e", &RawTime::Decimal(11.0)).unwrap();
        assert_eq!(time, TimeOfDay::new(11, 0));
    }

    #[test]
    fn missing_end_fails_normalization() {
        let raw = RawScheduleConfig {
            default: Some(raw_default()),
            events: vec![RawEvent {
                name: "lunch".into(),
                start: Some(RawTime::Shorthand("11.30".into())),
                end: None,
                items: vec![raw_item("menu.jpg")],
            }],
        };
        match normalize(raw) {
            Err(ConfigError::MissingEnd { event }) => assert_eq!(event, "lunch"),
            other => panic!("expected MissingEnd, got {other:?}"),
        }
    }

    #[test]
    fn missing_start_fails_normalization() {
        let raw = RawScheduleConfig {
            default: Some(raw_default()),
            events: vec![RawEvent {
                name: "lunch".into(),
                start: None,
                end: Some(RawTime::Shorthand("12.30".into())),
                items: vec![],
            }],
        };
        assert!(matches!(
            normalize(raw),
            Err(ConfigError::MissingStart { .. })
        ));
    }

    #[test]
    fn inverted_window_fails_normalization() {
        let raw = RawScheduleConfig {
            default: Some(raw_default()),
            events: vec![RawEvent {
                name: "overnight".into(),
                start: Some(RawTime::Shorthand("22".into())),
                end: Some(RawTime::Shorthand("2".into())),
                items: vec![raw_item("stars.jpg")],
            }],
        };
        assert!(matches!(
            normalize(raw),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn missing_default_fails_normalization() {
        let raw = RawScheduleConfig {
            default: None,
            events: vec![],
        };
        assert!(matches!(normalize(raw), Err(ConfigError::MissingDefault)));
    }

    #[test]
    fn item_needs_exactly_one_content_key() {
        let mut both = raw_item("a.jpg");
        both.markdown = Some("# hi".into());
        let raw = RawScheduleConfig {
            default: Some(RawEvent {
                name: "default".into(),
                start: None,
                end: None,
                items: vec![both],
            }),
            events: vec![],
        };
        assert!(matches!(normalize(raw), Err(ConfigError::InvalidItem { .. })));

        let neither = RawItem {
            url: None,
            markdown: None,
            html: None,
            seconds: 10,
            transition: None,
        };
        let raw = RawScheduleConfig {
            default: Some(RawEvent {
                name: "default".into(),
                start: None,
                end: None,
                items: vec![neither],
            }),
            events: vec![],
        };
        assert!(matches!(normalize(raw), Err(ConfigError::InvalidItem { .. })));
    }

    #[test]
    fn normalizes_a_full_document_from_json() {
        let json = r##"{
            "default": {
                "name": "default",
                "items": [
                    { "url": "welcome.jpg", "seconds": 30 },
                    { "markdown": "# lunch soon", "seconds": 60, "transition": "fade" }
                ]
            },
            "events": [
                {
                    "name": "lunch announcements",
                    "start": "11.30",
                    "end": "12.30",
                    "items": [ { "html": "<b>soup</b>", "seconds": 10 } ]
                }
            ]
        }"##;
        let raw: RawScheduleConfig = serde_json::from_str(json).unwrap();
        let config = normalize(raw).unwrap();
        assert_eq!(config.default.items.len(), 2);
        assert_eq!(config.events.len(), 1);
        let lunch = &config.events[0];
        assert_eq!(lunch.start, Some(TimeOfDay::new(11, 30)));
        assert_eq!(lunch.end, Some(TimeOfDay::new(12, 30)));
        assert_eq!(
            lunch.items[0].content,
            Content::Html("<b>soup</b>".into())
        );
    }
}
