//! Current/next prayer across day rollovers.
//!
//! The cursor always reads the live clock. A day view only reports a
//! cursor while the present instant belongs to that day's stretch of the
//! timeline:
//!
//! ```text
//!   prev.isyak ──> day.subuh ... day.isyak ──> next.subuh
//!   |<------------- reported for `day` ------------->|
//! ```
//!
//! Yesterday has no previous day inside the window, so it never reports.
//! Tomorrow has no following day, so it stops reporting after its isyak.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::schedule::{Day, PrayerLabel, ScheduleSet};

/// A labelled instant on the three-day timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    pub label: PrayerLabel,
    pub day: Day,
    pub at: NaiveDateTime,
}

/// Current and next prayer. Recomputed every tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub current: Moment,
    pub next: Moment,
}

impl Cursor {
    pub fn current_label(&self) -> PrayerLabel {
        self.current.label
    }

    pub fn interval_start(&self) -> NaiveDateTime {
        self.current.at
    }

    pub fn interval_end(&self) -> NaiveDateTime {
        self.next.at
    }

    pub fn next_label(&self) -> PrayerLabel {
        self.next.label
    }

    pub fn next_time(&self) -> NaiveDateTime {
        self.next.at
    }

    /// `current.at <= now < next.at`
    pub fn brackets(&self, now: NaiveDateTime) -> bool {
        self.current.at <= now && now < self.next.at
    }
}

/// Locate `now` on the timeline as seen from `view`.
pub fn locate(schedule: &ScheduleSet, now: NaiveDateTime, view: Day) -> Option<Cursor> {
    let previous = view.previous()?;
    let mut current = Moment {
        label: PrayerLabel::Isyak,
        day: previous,
        at: schedule.day(previous).time(PrayerLabel::Isyak),
    };
    if now < current.at {
        return None;
    }

    for (label, at) in schedule.day(view).entries() {
        let moment = Moment {
            label,
            day: view,
            at,
        };
        if at > now {
            return Some(Cursor {
                current,
                next: moment,
            });
        }
        current = moment;
    }

    // Past the viewed day's isyak: roll over into the following subuh,
    // which only exists when the following day is inside the window and
    // has not started yet.
    let following = view.next()?;
    let subuh = schedule.day(following).time(PrayerLabel::Subuh);
    if now >= subuh {
        return None;
    }
    Some(Cursor {
        current,
        next: Moment {
            label: PrayerLabel::Subuh,
            day: following,
            at: subuh,
        },
    })
}
