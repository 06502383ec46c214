//! The resolution engine.
//!
//! Two questions get answered here, both as pure functions of
//! `(config, instant)`:
//!
//! - [`select_event`]: which event governs the display at an instant, given
//!   possibly-overlapping windows.
//! - [`select_item`]: which item of that event's rotation is on screen,
//!   computed by fast-forwarding from the rotation's start rather than by
//!   keeping a "current index".
//!
//! No state is retained between calls and nothing is cached. Every display
//! client that reads the same wall clock and the same schedule computes the
//! same answer, which keeps independently-polling screens in sync with no
//! coordinator and lets any of them restart without resync logic.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::error::ScheduleError;
use crate::schedule::{Event, Item, ScheduleConfig};

/// The outcome of a full resolution pass: the governing event and the item
/// of its rotation that should be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub event: &'a Event,
    pub item: &'a Item,
}

/// Pick the event governing the display at the given time of day.
///
/// An event matches when `start <= t < end`. Zero matches returns the
/// default event. Windows may overlap by design (a short announcement nested
/// inside a longer block); among multiple matches the one with the latest
/// start wins, the narrowest most-recently-begun window being the most
/// specific. Events sharing an identical start tie-break by configuration
/// order, first one wins.
pub fn select_event<'a>(config: &'a ScheduleConfig, at: NaiveTime) -> &'a Event {
    let minute = at.hour() * 60 + at.minute();
    let mut current: Option<&Event> = None;

    for event in &config.events {
        if !event.contains(minute) {
            continue;
        }
        let start = event.start.map(|s| s.minute_of_day()).unwrap_or(0);
        match current {
            Some(best) if start <= best.start.map(|s| s.minute_of_day()).unwrap_or(0) => {}
            _ => current = Some(event),
        }
    }

    current.unwrap_or(&config.default)
}

/// Pick the item of `event`'s rotation that is on screen at `at`.
///
/// The rotation is treated as if it had been looping uninterrupted since its
/// start: the elapsed time is folded modulo one full cycle and walked
/// through the item list. For the default event, which has no configured
/// start, the rotation is anchored at the end of the configured event whose
/// window ends last (where the default resumes control), or midnight when
/// there are no events or that anchor still lies in the future today.
pub fn select_item<'a>(
    config: &ScheduleConfig,
    event: &'a Event,
    at: NaiveDateTime,
) -> Result<&'a Item, ScheduleError> {
    let cycle_ms = event.cycle_length_ms();
    if cycle_ms == 0 {
        return Err(ScheduleError::DegenerateCycle {
            event: event.name.clone(),
        });
    }

    let start = effective_start(config, event, at);
    let elapsed_ms = (at - start).num_milliseconds() as u64 % cycle_ms;

    // The modulo above guarantees elapsed < cycle, so the walk always lands
    // inside the list.
    let mut remaining = elapsed_ms as i64;
    for item in &event.items {
        remaining -= item.duration_ms() as i64;
        if remaining <= 0 {
            return Ok(item);
        }
    }
    unreachable!("elapsed time was folded into one cycle");
}

/// Resolve the instant all the way to a displayable item.
///
/// A timed event whose rotation turns out to be degenerate is skipped in
/// favor of the default event's rotation; a degenerate default is reported
/// to the caller, who should display nothing rather than crash the loop.
pub fn resolve<'a>(
    config: &'a ScheduleConfig,
    at: NaiveDateTime,
) -> Result<Resolution<'a>, ScheduleError> {
    let event = select_event(config, at.time());
    match select_item(config, event, at) {
        Ok(item) => Ok(Resolution { event, item }),
        Err(ScheduleError::DegenerateCycle { .. }) if !std::ptr::eq(event, &config.default) => {
            let item = select_item(config, &config.default, at)?;
            Ok(Resolution {
                event: &config.default,
                item,
            })
        }
        Err(err) => Err(err),
    }
}

/// The instant (on `at`'s calendar day, seconds = 0) the rotation is
/// considered to have begun. Never in the future relative to `at`.
fn effective_start(config: &ScheduleConfig, event: &Event, at: NaiveDateTime) -> NaiveDateTime {
    let anchor = match event.start {
        Some(start) => start.to_naive_time(),
        None => config
            .latest_ending_event()
            .and_then(|latest| latest.end)
            .map(|end| end.to_naive_time())
            .unwrap_or(NaiveTime::MIN),
    };

    let start = at.date().and_time(anchor);
    if start > at {
        // The anchor is later today than the queried instant; fall back to
        // midnight so the rotation always has a valid non-future start.
        at.date().and_time(NaiveTime::MIN)
    } else {
        start
    }
}
