//! Assembles three raw day records into a day-anchored `ScheduleSet`.
//!
//! Resolution is a pure function of the raw records and the reference
//! "today"; it is rerun whenever new raw data arrives.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::daily::{DailySchedule, RawDay};
use super::label::{Day, PrayerLabel};
use crate::error::ScheduleError;

/// Raw records for the three-day window. Any slot may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheduleSet {
    #[serde(default)]
    pub yesterday: Option<RawDay>,
    #[serde(default)]
    pub today: Option<RawDay>,
    #[serde(default)]
    pub tomorrow: Option<RawDay>,
}

impl RawScheduleSet {
    pub fn get(&self, day: Day) -> Option<&RawDay> {
        match day {
            Day::Yesterday => self.yesterday.as_ref(),
            Day::Today => self.today.as_ref(),
            Day::Tomorrow => self.tomorrow.as_ref(),
        }
    }

    pub fn missing(&self) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|d| self.get(*d).is_none())
            .collect()
    }
}

/// Three consecutive, fully parsed days.
///
/// Invariant: `tomorrow.subuh > today.isyak > ... > yesterday.subuh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSet {
    yesterday: DailySchedule,
    today: DailySchedule,
    tomorrow: DailySchedule,
}

impl ScheduleSet {
    pub fn new(
        yesterday: DailySchedule,
        today: DailySchedule,
        tomorrow: DailySchedule,
    ) -> Result<Self, ScheduleError> {
        let set = Self {
            yesterday,
            today,
            tomorrow,
        };
        for (earlier, later) in [(Day::Yesterday, Day::Today), (Day::Today, Day::Tomorrow)] {
            if set.day(later).time(PrayerLabel::Subuh) <= set.day(earlier).time(PrayerLabel::Isyak)
            {
                return Err(ScheduleError::OverlappingDays { earlier, later });
            }
        }
        Ok(set)
    }

    pub fn day(&self, day: Day) -> &DailySchedule {
        match day {
            Day::Yesterday => &self.yesterday,
            Day::Today => &self.today,
            Day::Tomorrow => &self.tomorrow,
        }
    }

    /// The reference civil date.
    pub fn today(&self) -> NaiveDate {
        self.today.date()
    }
}

/// Parse and anchor each day: yesterday = `today - 1`, tomorrow = `today + 1`.
///
/// Missing days fail with `IncompleteSchedule` before any parsing happens.
pub fn resolve(raw: &RawScheduleSet, today: NaiveDate) -> Result<ScheduleSet, ScheduleError> {
    let missing = raw.missing();
    if !missing.is_empty() {
        warn!(?missing, "schedule window incomplete");
        return Err(ScheduleError::IncompleteSchedule { missing });
    }

    let resolve_day = |day: Day| -> Result<DailySchedule, ScheduleError> {
        let date = today + Duration::days(day.offset_days());
        let record = raw
            .get(day)
            .ok_or_else(|| ScheduleError::IncompleteSchedule { missing: vec![day] })?;
        DailySchedule::from_raw(record, date).inspect_err(|err| {
            warn!(%day, %date, error = %err, "failed to resolve day");
        })
    };

    let set = ScheduleSet::new(
        resolve_day(Day::Yesterday)?,
        resolve_day(Day::Today)?,
        resolve_day(Day::Tomorrow)?,
    )?;
    debug!(today = %set.today(), "schedule resolved");
    Ok(set)
}
