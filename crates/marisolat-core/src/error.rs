//! Core error types for marisolat-core.
//!
//! Every error in this crate is recoverable locally. The building blocks
//! (parser, resolver, config) return these so callers can see *why*
//! something failed; the engine surface folds them into "unavailable"
//! display state instead of propagating them.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::schedule::{Day, PrayerLabel};

/// Core error type for marisolat-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Schedule parsing and resolution errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Qibla compass errors
    #[error("Qibla error: {0}")]
    Qibla(#[from] QiblaError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Schedule-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A time-of-day string did not split into an hour and a two-digit minute.
    #[error("Malformed time '{input}': expected H:MM AM|PM or HH:MM")]
    MalformedTime { input: String },

    /// A civil or lunar date string could not be read.
    #[error("Malformed date '{input}'")]
    MalformedDate { input: String },

    /// Fewer than three consecutive days are present.
    #[error("Incomplete schedule: missing {}", list_days(.missing))]
    IncompleteSchedule { missing: Vec<Day> },

    /// Timestamps within one day are not strictly increasing.
    #[error("Schedule for {date} is out of order at {label}")]
    UnorderedDay { date: NaiveDate, label: PrayerLabel },

    /// Consecutive days overlap (a day starts before the previous one ends).
    #[error("{later} schedule starts before {earlier} schedule ends")]
    OverlappingDays { earlier: Day, later: Day },
}

/// Qibla compass errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QiblaError {
    /// No heading sample has ever been received.
    #[error("Compass sensor unavailable")]
    SensorUnavailable,

    /// Observer coordinates outside the valid range.
    #[error("Invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

fn list_days(days: &[Day]) -> String {
    days.iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
