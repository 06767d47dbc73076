use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::label::PrayerLabel;
use crate::error::ScheduleError;
use crate::time::{format_prayer_dates, format_raw_time, parse_time_on};

/// One day's prayer times as supplied by the upstream provider.
///
/// Accepts both the display keys (`subuh`, `zohor`, ...) and the upstream
/// API keys (`fajr`, `dhuhr`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDay {
    #[serde(default, alias = "fajr")]
    pub subuh: String,
    #[serde(default)]
    pub syuruk: String,
    #[serde(default, alias = "dhuhr")]
    pub zohor: String,
    #[serde(default, alias = "asr")]
    pub asar: String,
    #[serde(default)]
    pub maghrib: String,
    #[serde(default, alias = "isha")]
    pub isyak: String,
    #[serde(default, rename = "gregorianDate", alias = "date")]
    pub gregorian_date: String,
    #[serde(default, rename = "hijriDate", alias = "hijri")]
    pub hijri_date: String,
}

impl RawDay {
    pub fn time(&self, label: PrayerLabel) -> &str {
        match label {
            PrayerLabel::Subuh => &self.subuh,
            PrayerLabel::Syuruk => &self.syuruk,
            PrayerLabel::Zohor => &self.zohor,
            PrayerLabel::Asar => &self.asar,
            PrayerLabel::Maghrib => &self.maghrib,
            PrayerLabel::Isyak => &self.isyak,
        }
    }

    /// `H:MM AM|PM` for display, or `-` when the field is unusable.
    pub fn display_time(&self, label: PrayerLabel) -> String {
        format_raw_time(self.time(label))
    }

    /// Malay date banner, falling back to the opaque upstream strings.
    pub fn date_banner(&self) -> String {
        format_prayer_dates(&self.gregorian_date, &self.hijri_date).unwrap_or_else(|_| {
            match (self.gregorian_date.is_empty(), self.hijri_date.is_empty()) {
                (true, true) => "-".into(),
                (false, true) => self.gregorian_date.clone(),
                (true, false) => self.hijri_date.clone(),
                (false, false) => format!("{} | {}", self.gregorian_date, self.hijri_date),
            }
        })
    }
}

/// Six timestamps anchored to one civil day, strictly increasing in label order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    date: NaiveDate,
    times: [NaiveDateTime; 6],
    gregorian_date: String,
    hijri_date: String,
}

impl DailySchedule {
    pub fn new(
        date: NaiveDate,
        times: [NaiveDateTime; 6],
        gregorian_date: impl Into<String>,
        hijri_date: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        for pair in PrayerLabel::ALL.windows(2) {
            if times[pair[1].index()] <= times[pair[0].index()] {
                return Err(ScheduleError::UnorderedDay {
                    date,
                    label: pair[1],
                });
            }
        }
        Ok(Self {
            date,
            times,
            gregorian_date: gregorian_date.into(),
            hijri_date: hijri_date.into(),
        })
    }

    /// Parse every field of `raw` and anchor it to `date`.
    pub fn from_raw(raw: &RawDay, date: NaiveDate) -> Result<Self, ScheduleError> {
        let mut times = [NaiveDateTime::default(); 6];
        for label in PrayerLabel::ALL {
            times[label.index()] = parse_time_on(raw.time(label), date)?;
        }
        Self::new(date, times, raw.gregorian_date.clone(), raw.hijri_date.clone())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self, label: PrayerLabel) -> NaiveDateTime {
        self.times[label.index()]
    }

    /// `(label, time)` pairs in fixed label order.
    pub fn entries(&self) -> impl Iterator<Item = (PrayerLabel, NaiveDateTime)> + '_ {
        PrayerLabel::ALL.into_iter().map(|l| (l, self.time(l)))
    }

    pub fn gregorian_date(&self) -> &str {
        &self.gregorian_date
    }

    pub fn hijri_date(&self) -> &str {
        &self.hijri_date
    }
}
