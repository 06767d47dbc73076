use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::prayer::Waktu;
use crate::schedule::PrayerLabel;

/// Edge-triggered changes observed between ticks or heading samples.
/// Renderers poll snapshots; side effects (haptics, log lines) hang off these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ScheduleLoaded {
        today: NaiveDate,
    },
    ScheduleUnavailable {
        reason: String,
    },
    /// The cursor moved onto a new current prayer.
    PrayerEntered {
        label: PrayerLabel,
        next: PrayerLabel,
        at: NaiveDateTime,
    },
    /// The active prayer crossed into another sub-window.
    WaktuEntered {
        label: PrayerLabel,
        waktu: Waktu,
        at: NaiveDateTime,
    },
    /// Heading came within tolerance of the qibla bearing. Fires once per entry.
    QiblaAligned {
        heading: f64,
        error_deg: f64,
        pulse_ms: u64,
    },
    /// Heading left the tolerance band.
    QiblaLost {
        heading: f64,
        error_deg: f64,
    },
}
