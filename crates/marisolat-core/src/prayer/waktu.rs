//! Fiqh sub-periods of the active prayer interval.
//!
//! Given an interval `[start, end)` of length `T`, elapsed `E` and
//! remaining `R`, the rules below are applied in order and the last
//! matching rule wins (default `Jawaz`):
//!
//! ```text
//! 1. E <= T/2          -> Ikhtiar
//! 2. E <= fadhilat     -> Fadhilat
//! 3. R <= karahah      -> Karahah
//! 4. R <= tahrim       -> Tahrim
//! ```
//!
//! On intervals shorter than `fadhilat + karahah` the remaining-time rules
//! win over the elapsed-time rules because they come later.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use crate::schedule::{PrayerLabel, ScheduleSet};
use crate::time::{format_time_12h, Countdown};

/// The five canonical sub-windows, from most rewarded to forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waktu {
    Fadhilat,
    Ikhtiar,
    Jawaz,
    Karahah,
    Tahrim,
}

impl Waktu {
    pub const ALL: [Waktu; 5] = [
        Waktu::Fadhilat,
        Waktu::Ikhtiar,
        Waktu::Jawaz,
        Waktu::Karahah,
        Waktu::Tahrim,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Waktu::Fadhilat => "Fadhilat",
            Waktu::Ikhtiar => "Ikhtiar",
            Waktu::Jawaz => "Jawaz",
            Waktu::Karahah => "Karahah",
            Waktu::Tahrim => "Tahrim",
        }
    }
}

impl fmt::Display for Waktu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// Edge durations in minutes. Defaults: 15 / 15 / 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaktuDurations {
    #[serde(default = "default_fadhilat_min")]
    pub fadhilat_min: i64,
    #[serde(default = "default_karahah_min")]
    pub karahah_min: i64,
    #[serde(default = "default_tahrim_min")]
    pub tahrim_min: i64,
}

fn default_fadhilat_min() -> i64 {
    15
}
fn default_karahah_min() -> i64 {
    15
}
fn default_tahrim_min() -> i64 {
    5
}

impl Default for WaktuDurations {
    fn default() -> Self {
        Self {
            fadhilat_min: default_fadhilat_min(),
            karahah_min: default_karahah_min(),
            tahrim_min: default_tahrim_min(),
        }
    }
}

/// Longest accepted edge duration, in minutes.
pub const MAX_EDGE_MIN: i64 = 24 * 60;

fn edge(minutes: i64) -> Option<Duration> {
    if !(0..=MAX_EDGE_MIN).contains(&minutes) {
        return None;
    }
    Duration::try_minutes(minutes)
}

impl WaktuDurations {
    /// `None` when the configured minutes fall outside `0..=MAX_EDGE_MIN`.
    pub fn fadhilat(&self) -> Option<Duration> {
        edge(self.fadhilat_min)
    }

    pub fn karahah(&self) -> Option<Duration> {
        edge(self.karahah_min)
    }

    pub fn tahrim(&self) -> Option<Duration> {
        edge(self.tahrim_min)
    }

    /// Field names and values, in config order.
    pub fn fields(&self) -> [(&'static str, i64); 3] {
        [
            ("fadhilat_min", self.fadhilat_min),
            ("karahah_min", self.karahah_min),
            ("tahrim_min", self.tahrim_min),
        ]
    }

    /// The first field outside `0..=MAX_EDGE_MIN`, if any.
    pub fn out_of_range(&self) -> Option<(&'static str, i64)> {
        self.fields()
            .into_iter()
            .find(|(_, minutes)| edge(*minutes).is_none())
    }
}

/// The span a prayer's waktu is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerInterval {
    pub label: PrayerLabel,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PrayerInterval {
    /// Interval for the cursor's current prayer.
    ///
    /// Subuh ends at its own day's syuruk; syuruk has no waktu at all.
    pub fn from_cursor(cursor: &Cursor, schedule: &ScheduleSet) -> Option<Self> {
        let end = match cursor.current.label {
            PrayerLabel::Syuruk => return None,
            PrayerLabel::Subuh => schedule.day(cursor.current.day).time(PrayerLabel::Syuruk),
            _ => cursor.next.at,
        };
        Some(Self {
            label: cursor.current.label,
            start: cursor.current.at,
            end,
        })
    }

    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}

/// Absolute clock range of one sub-window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaktuRange {
    pub waktu: Waktu,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WaktuRange {
    /// `H:MM AM|PM – H:MM AM|PM`
    pub fn display(&self) -> String {
        format!(
            "{} – {}",
            format_time_12h(self.start.time()),
            format_time_12h(self.end.time())
        )
    }
}

/// Result of classifying one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub interval: PrayerInterval,
    pub active: Waktu,
    pub ranges: [WaktuRange; 5],
    /// Time left until the edge of the active window.
    pub countdown: Countdown,
}

impl Classification {
    pub fn active_range(&self) -> &WaktuRange {
        &self.ranges[self.active.index()]
    }

    pub fn range(&self, waktu: Waktu) -> &WaktuRange {
        &self.ranges[waktu.index()]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WaktuClassifier {
    durations: WaktuDurations,
}

impl WaktuClassifier {
    pub fn new(durations: WaktuDurations) -> Self {
        Self { durations }
    }

    pub fn durations(&self) -> WaktuDurations {
        self.durations
    }

    /// All five windows for `[start, end)`. `None` when the durations are
    /// out of range.
    pub fn ranges(&self, start: NaiveDateTime, end: NaiveDateTime) -> Option<[WaktuRange; 5]> {
        let half = start + (end - start) / 2;
        let fadhilat_end = start.checked_add_signed(self.durations.fadhilat()?)?;
        let karahah_start = end.checked_sub_signed(self.durations.karahah()?)?;
        let tahrim_start = end.checked_sub_signed(self.durations.tahrim()?)?;
        let range = |waktu, start, end| WaktuRange { waktu, start, end };
        Some([
            range(Waktu::Fadhilat, start, fadhilat_end),
            range(Waktu::Ikhtiar, fadhilat_end, half),
            range(Waktu::Jawaz, half, karahah_start),
            range(Waktu::Karahah, karahah_start, tahrim_start),
            range(Waktu::Tahrim, tahrim_start, end),
        ])
    }

    /// The active sub-window for an instant inside `[start, end]`.
    pub fn active_waktu(&self, interval: &PrayerInterval, now: NaiveDateTime) -> Option<Waktu> {
        let elapsed = now - interval.start;
        let remaining = interval.end - now;
        let rules = [
            (elapsed <= interval.length() / 2, Waktu::Ikhtiar),
            (elapsed <= self.durations.fadhilat()?, Waktu::Fadhilat),
            (remaining <= self.durations.karahah()?, Waktu::Karahah),
            (remaining <= self.durations.tahrim()?, Waktu::Tahrim),
        ];
        let active = rules
            .into_iter()
            .filter_map(|(matched, waktu)| matched.then_some(waktu))
            .last()
            .unwrap_or(Waktu::Jawaz);
        Some(active)
    }

    /// Classify `now`. `None` outside the interval, for an empty interval or
    /// with out-of-range durations.
    pub fn classify(&self, interval: &PrayerInterval, now: NaiveDateTime) -> Option<Classification> {
        if interval.end <= interval.start || now < interval.start || now > interval.end {
            return None;
        }
        let active = self.active_waktu(interval, now)?;
        let ranges = self.ranges(interval.start, interval.end)?;
        let countdown = Countdown::until(now, ranges[active.index()].end);
        Some(Classification {
            interval: *interval,
            active,
            ranges,
            countdown,
        })
    }
}
