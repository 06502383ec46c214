//! # Signage Core Library
//!
//! Core logic for driving unattended display screens: given a schedule of
//! named, possibly-overlapping events and the current wall-clock time,
//! decide which piece of content should be on screen right now.
//!
//! ## Architecture
//!
//! - **Schedule model**: an immutable, normalized `ScheduleConfig` -- a
//!   default event plus timed events, each holding a rotation of items with
//!   per-item durations
//! - **Resolver**: pure `(config, instant) -> item` functions; the rotation
//!   has no persisted "current index", the right item is always recomputed
//!   from elapsed wall-clock time so independent display nodes stay in sync
//! - **Loaders**: JSON document and folder-per-event filesystem sources
//! - **Feed**: interval refresh publishing immutable snapshots over a watch
//!   channel
//!
//! ## Key Components
//!
//! - [`ScheduleConfig`]: the normalized schedule
//! - [`resolve`]: instant -> event + item
//! - [`ScheduleFeed`]: periodically refreshed schedule snapshots
//! - [`Settings`]: display-node TOML settings

pub mod clock;
pub mod error;
pub mod feed;
pub mod loader;
pub mod resolver;
pub mod schedule;
pub mod settings;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ScheduleError};
pub use feed::ScheduleFeed;
pub use loader::{FsScheduleSource, JsonScheduleSource, ScheduleSource};
pub use resolver::{resolve, select_event, select_item, Resolution};
pub use schedule::{
    normalize, Content, Event, Item, RawScheduleConfig, ScheduleConfig, TimeOfDay,
};
pub use settings::{DisplaySettings, Settings, SourceKind, SourceSettings};
