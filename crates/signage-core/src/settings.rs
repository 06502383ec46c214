//! TOML display-node settings.
//!
//! Settings describe where a display node reads its schedule from and how
//! often it polls, not the schedule itself:
//!
//! ```toml
//! [source]
//! kind = "filesystem"
//! root = "/srv/signage/offices"
//! office = "Sydney"
//!
//! [display]
//! refresh_secs = 1
//! tick_secs = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::loader::{FsScheduleSource, JsonScheduleSource, ScheduleSource};

/// Which kind of schedule source a node reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Filesystem,
    Json,
}

/// Schedule source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(default)]
    pub kind: SourceKind,
    /// Content-store root (filesystem kind) or document path (json kind).
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub office: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            root: default_root(),
            office: String::new(),
        }
    }
}

/// Polling cadence for the two independent loops: refreshing the schedule
/// from its source and re-resolving "now" against the current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_interval_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_interval_secs")]
    pub tick_secs: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            refresh_secs: default_interval_secs(),
            tick_secs: default_interval_secs(),
        }
    }
}

/// Display-node settings, serialized to/from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        toml::from_str(&text).map_err(|err| ConfigError::ParseFailed(err.to_string()))
    }

    /// Build the schedule source these settings describe.
    pub fn source(&self) -> Box<dyn ScheduleSource> {
        match self.source.kind {
            SourceKind::Filesystem => Box::new(FsScheduleSource::new(
                self.source.root.clone(),
                self.source.office.clone(),
            )),
            SourceKind::Json => Box::new(JsonScheduleSource::new(self.source.root.clone())),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("content/offices")
}

fn default_interval_secs() -> u64 {
    1
}
