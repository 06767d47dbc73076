//! Prayer engine: holds the latest schedule window and answers queries.
//!
//! The engine keeps only the raw records, their resolution and the waktu
//! durations. Every query recomputes from those inputs; nothing derived
//! (cursor, classification, night window) is stored.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PrayerEngine::new(WaktuDurations::default());
//! engine.set_schedule(raw, today);
//! // Once per second:
//! let snapshot = engine.snapshot(now, Day::Today);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, warn};

use super::cursor::{locate, Cursor, Moment};
use super::night::NightThird;
use super::waktu::{Classification, PrayerInterval, Waktu, WaktuClassifier, WaktuDurations};
use crate::error::ScheduleError;
use crate::events::Event;
use crate::schedule::{resolve, Day, PrayerLabel, RawScheduleSet, ScheduleSet};
use crate::time::Countdown;

/// Whether derived values can be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SnapshotStatus {
    Ready,
    Unavailable { reason: String },
}

/// One row of the prayer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerRow {
    pub label: PrayerLabel,
    /// `H:MM AM|PM`, or `-` when unavailable.
    pub time: String,
    pub is_current: bool,
    pub is_next: bool,
    /// Countdown to this row's time, only on the `next` row.
    pub countdown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaktuRangeView {
    pub waktu: Waktu,
    pub range: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaktuView {
    pub label: PrayerLabel,
    pub active: Waktu,
    pub countdown: String,
    pub ranges: Vec<WaktuRangeView>,
}

impl From<&Classification> for WaktuView {
    fn from(c: &Classification) -> Self {
        Self {
            label: c.interval.label,
            active: c.active,
            countdown: c.countdown.to_string(),
            ranges: c
                .ranges
                .iter()
                .map(|r| WaktuRangeView {
                    waktu: r.waktu,
                    range: r.display(),
                    active: r.waktu == c.active,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightThirdView {
    pub window: String,
    pub night_minutes: i64,
    pub duration_minutes: i64,
    pub active: bool,
}

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerSnapshot {
    pub view: Day,
    pub at: NaiveDateTime,
    pub status: SnapshotStatus,
    pub dates: String,
    pub rows: Vec<PrayerRow>,
    pub current: Option<PrayerLabel>,
    pub next: Option<PrayerLabel>,
    pub next_countdown: Option<String>,
    pub waktu: Option<WaktuView>,
    pub night_third: Option<NightThirdView>,
}

impl PrayerSnapshot {
    pub fn is_ready(&self) -> bool {
        self.status == SnapshotStatus::Ready
    }
}

#[derive(Debug, Clone)]
pub struct PrayerEngine {
    raw: RawScheduleSet,
    resolved: Result<ScheduleSet, ScheduleError>,
    classifier: WaktuClassifier,
}

impl Default for PrayerEngine {
    fn default() -> Self {
        Self::new(WaktuDurations::default())
    }
}

impl PrayerEngine {
    /// Starts with no schedule; every query reports "unavailable".
    pub fn new(durations: WaktuDurations) -> Self {
        Self {
            raw: RawScheduleSet::default(),
            resolved: Err(ScheduleError::IncompleteSchedule {
                missing: Day::ALL.to_vec(),
            }),
            classifier: WaktuClassifier::new(durations),
        }
    }

    pub fn with_schedule(durations: WaktuDurations, raw: RawScheduleSet, today: NaiveDate) -> Self {
        let mut engine = Self::new(durations);
        engine.set_schedule(raw, today);
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn schedule(&self) -> Option<&ScheduleSet> {
        self.resolved.as_ref().ok()
    }

    pub fn raw(&self) -> &RawScheduleSet {
        &self.raw
    }

    pub fn durations(&self) -> WaktuDurations {
        self.classifier.durations()
    }

    pub fn status(&self) -> SnapshotStatus {
        match &self.resolved {
            Ok(_) => SnapshotStatus::Ready,
            Err(err) => SnapshotStatus::Unavailable {
                reason: err.to_string(),
            },
        }
    }

    pub fn cursor(&self, now: NaiveDateTime, view: Day) -> Option<Cursor> {
        locate(self.schedule()?, now, view)
    }

    /// Classify `now` within the current prayer. The cursor is located first.
    pub fn waktu(&self, now: NaiveDateTime, view: Day) -> Option<Classification> {
        let schedule = self.schedule()?;
        let cursor = locate(schedule, now, view)?;
        let interval = PrayerInterval::from_cursor(&cursor, schedule)?;
        self.classifier.classify(&interval, now)
    }

    pub fn night_third(&self, view: Day) -> Option<NightThird> {
        NightThird::for_view(self.schedule()?, view)
    }

    pub fn snapshot(&self, now: NaiveDateTime, view: Day) -> PrayerSnapshot {
        let raw_day = self.raw.get(view);
        let cursor = self.cursor(now, view);
        let waktu = self.waktu(now, view);
        let night = self.night_third(view);

        let on_view = |moment: Option<Moment>, label: PrayerLabel| {
            moment.is_some_and(|m| m.day == view && m.label == label)
        };
        let next_countdown = cursor.map(|c| Countdown::until(now, c.next.at).to_string());

        let rows = PrayerLabel::ALL
            .into_iter()
            .map(|label| {
                let is_next = on_view(cursor.map(|c| c.next), label);
                PrayerRow {
                    label,
                    time: raw_day
                        .map(|r| r.display_time(label))
                        .unwrap_or_else(|| "-".into()),
                    is_current: on_view(cursor.map(|c| c.current), label),
                    is_next,
                    countdown: if is_next { next_countdown.clone() } else { None },
                }
            })
            .collect();

        PrayerSnapshot {
            view,
            at: now,
            status: self.status(),
            dates: raw_day.map(|r| r.date_banner()).unwrap_or_else(|| "-".into()),
            rows,
            current: cursor.map(|c| c.current.label),
            next: cursor.map(|c| c.next.label),
            next_countdown,
            waktu: waktu.as_ref().map(WaktuView::from),
            night_third: night.map(|n| NightThirdView {
                window: n.display(),
                night_minutes: n.night_minutes,
                duration_minutes: n.duration_minutes,
                active: n.contains(now),
            }),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the raw window and resolve it against `today`.
    pub fn set_schedule(&mut self, raw: RawScheduleSet, today: NaiveDate) -> Event {
        self.resolved = resolve(&raw, today);
        self.raw = raw;
        match &self.resolved {
            Ok(set) => {
                debug!(today = %set.today(), "schedule loaded");
                Event::ScheduleLoaded { today: set.today() }
            }
            Err(err) => {
                warn!(error = %err, "schedule unavailable");
                Event::ScheduleUnavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.classifier.durations());
    }
}
