//! Core error types for signage-core.
//!
//! This module defines the error hierarchy using thiserror. Configuration
//! errors are fatal to loading a schedule; schedule errors are scoped to a
//! single event at resolution time.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for signage-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schedule resolution errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
///
/// Any of these makes the whole schedule document unusable. Callers that
/// refresh on an interval should keep serving the prior valid configuration
/// when a reload fails with one of these.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A timed event is missing its start time
    #[error("Event '{event}' contains no start time")]
    MissingStart { event: String },

    /// A timed event is missing its end time
    #[error("Event '{event}' contains no end time")]
    MissingEnd { event: String },

    /// A time shorthand could not be parsed
    #[error("Event '{event}' has an invalid time '{value}': {message}")]
    InvalidTime {
        event: String,
        value: String,
        message: String,
    },

    /// A timed event's window does not satisfy start < end
    #[error("Event '{event}' has an invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        event: String,
        start: String,
        end: String,
    },

    /// An item carries zero or more than one content key
    #[error("Event '{event}' has an invalid item: {message}")]
    InvalidItem { event: String, message: String },

    /// The schedule has no default event
    #[error("Schedule contains no default event")]
    MissingDefault,

    /// An event folder name does not follow the start-end-name convention
    #[error("Folder '{folder}' is not a valid event folder name. Use a start-end-name format such as '14.30-16.00-afternoon'.")]
    InvalidFolderName { folder: String },

    /// The requested office is not present in the content store
    #[error("Office '{office}' is not a folder in the content store")]
    UnknownOffice { office: String },

    /// Failed to load a schedule or settings file
    #[error("Failed to load {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse a settings file
    #[error("Failed to parse settings: {0}")]
    ParseFailed(String),
}

/// Resolution-time errors, scoped to a single event.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The event's rotation has no displayable time at all: either the item
    /// list is empty or every duration is zero.
    #[error("Event '{event}' has a zero-length item cycle")]
    DegenerateCycle { event: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
