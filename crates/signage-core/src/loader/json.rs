//! JSON document schedule source.

use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::schedule::{normalize, RawScheduleConfig, ScheduleConfig};

use super::ScheduleSource;

/// Loads a schedule from a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonScheduleSource {
    path: PathBuf,
}

impl JsonScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for JsonScheduleSource {
    fn load(&self) -> Result<ScheduleConfig> {
        let text = std::fs::read_to_string(&self.path).map_err(|err| ConfigError::LoadFailed {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        let raw: RawScheduleConfig = serde_json::from_str(&text)?;
        Ok(normalize(raw)?)
    }
}
