//! # MariSolat Core Library
//!
//! This library provides the temporal classification engine behind the
//! MariSolat prayer-time app. It takes pre-computed daily prayer times and a
//! wall clock and answers which prayer is current, which sub-period
//! (waktu) of it is active, how long until the next boundary, where the
//! last third of the night falls, and which way the qibla lies.
//!
//! ## Architecture
//!
//! - **Schedule**: Parsing of raw provider strings into a validated
//!   three-day window (yesterday, today, tomorrow)
//! - **Prayer Engine**: A pure state machine that requires the caller to
//!   periodically invoke `snapshot()` (or drive a [`Watcher`]) for updates
//! - **Qibla**: Great-circle bearing plus a heading tracker that latches
//!   alignment edges
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PrayerEngine`]: Cursor, waktu and night-third queries
//! - [`WaktuClassifier`]: Fiqh sub-period rules
//! - [`QiblaTracker`]: Compass alignment state
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod prayer;
pub mod qibla;
pub mod schedule;
pub mod storage;
pub mod time;

pub use error::{ConfigError, CoreError, QiblaError, Result, ScheduleError};
pub use events::Event;
pub use prayer::{
    locate, Classification, Cursor, NightThird, PrayerEngine, PrayerSnapshot, Ticker, Waktu,
    WaktuClassifier, WaktuDurations, Watcher,
};
pub use qibla::{qibla_bearing, Coordinates, HeadingSource, QiblaReading, QiblaTracker, RawHeading};
pub use schedule::{resolve, DailySchedule, Day, PrayerLabel, RawDay, RawScheduleSet, ScheduleSet};
pub use storage::Config;
pub use time::{format_countdown, parse_time_of_day, Countdown};
