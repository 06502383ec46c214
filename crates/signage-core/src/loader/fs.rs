//! Filesystem content-store schedule source.
//!
//! Layout: the store root holds one folder per office; an office folder
//! holds one folder per event, named `start-end-name` (e.g.
//! `11.30-12.30-lunch`), with `default` for the default event. Every file
//! inside an event folder becomes one rotation item, in ascending filename
//! order, so authors control ordering with prefixes (`a_foo-20`,
//! `b_bar-60`). A `-N` suffix on the filename is the display duration in
//! seconds; unspecified means 60.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::schedule::{normalize, RawEvent, RawItem, RawScheduleConfig, RawTime, ScheduleConfig};

use super::ScheduleSource;

const DEFAULT_ITEM_SECONDS: u32 = 60;

/// Loads a schedule by scanning one office's folder in the content store.
#[derive(Debug, Clone)]
pub struct FsScheduleSource {
    root: PathBuf,
    office: String,
}

impl FsScheduleSource {
    pub fn new(root: impl Into<PathBuf>, office: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            office: office.into(),
        }
    }
}

impl ScheduleSource for FsScheduleSource {
    fn load(&self) -> Result<ScheduleConfig> {
        // List the store and match the office against the entries, so user
        // input is never joined into a path directly.
        let office_dir = self
            .find_entry(&self.root, &self.office)?
            .ok_or_else(|| ConfigError::UnknownOffice {
                office: self.office.clone(),
            })?;

        let mut raw = RawScheduleConfig {
            default: None,
            events: Vec::new(),
        };

        for folder in sorted_entries(&office_dir)? {
            let path = office_dir.join(&folder);
            if !path.is_dir() {
                continue;
            }
            let items = read_items(&path)?;
            if folder == "default" {
                raw.default = Some(RawEvent {
                    name: folder,
                    start: None,
                    end: None,
                    items,
                });
            } else {
                let mut event = parse_event_folder(&folder)?;
                event.items = items;
                raw.events.push(event);
            }
        }

        Ok(normalize(raw)?)
    }
}

impl FsScheduleSource {
    fn find_entry(&self, dir: &Path, name: &str) -> Result<Option<PathBuf>> {
        for entry in sorted_entries(dir)? {
            if entry == name {
                return Ok(Some(dir.join(entry)));
            }
        }
        Ok(None)
    }
}

/// Directory entry names in ascending filename order.
fn sorted_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Parse a `start-end-name` folder name into an event shell. A missing name
/// component becomes "No Name".
fn parse_event_folder(folder: &str) -> Result<RawEvent> {
    let mut components = folder.splitn(3, '-');
    let start = components.next().map(str::trim).unwrap_or_default();
    let end = components.next().map(str::trim).unwrap_or_default();
    if start.is_empty() || end.is_empty() {
        return Err(ConfigError::InvalidFolderName {
            folder: folder.to_string(),
        }
        .into());
    }
    let name = components
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("No Name");

    Ok(RawEvent {
        name: name.to_string(),
        start: Some(RawTime::Shorthand(start.to_string())),
        end: Some(RawTime::Shorthand(end.to_string())),
        items: Vec::new(),
    })
}

fn read_items(event_dir: &Path) -> Result<Vec<RawItem>> {
    let mut items = Vec::new();
    for file in sorted_entries(event_dir)? {
        if !event_dir.join(&file).is_file() {
            continue;
        }
        items.push(RawItem {
            url: Some(file.clone()),
            markdown: None,
            html: None,
            seconds: parse_item_seconds(&file).unwrap_or(DEFAULT_ITEM_SECONDS),
            transition: None,
        });
    }
    Ok(items)
}

/// Pull the duration out of a `name-60.jpg` style filename: the component
/// after the first `-`, up to the extension dot.
fn parse_item_seconds(file: &str) -> Option<u32> {
    let suffix = file.splitn(2, '-').nth(1)?;
    let digits = suffix.split('.').next()?;
    digits.parse().ok().filter(|&secs| secs > 0)
}
