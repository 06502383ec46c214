//! Schedule sources.
//!
//! The resolution engine only needs something that can produce a normalized
//! [`ScheduleConfig`]; the two bundled sources read a JSON document or scan
//! a folder-per-event content store. The [`ScheduleFeed`](crate::feed) polls
//! a source on an interval and republishes snapshots.

mod fs;
mod json;

pub use fs::FsScheduleSource;
pub use json::JsonScheduleSource;

use crate::error::Result;
use crate::schedule::ScheduleConfig;

/// Anything that can load a complete, normalized schedule.
///
/// A load is all-or-nothing: any configuration problem fails the whole load
/// so that callers can keep serving the prior valid schedule.
pub trait ScheduleSource: Send + Sync {
    fn load(&self) -> Result<ScheduleConfig>;
}
