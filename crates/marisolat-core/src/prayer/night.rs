use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::{Day, PrayerLabel, ScheduleSet};
use crate::time::format_time_24h;

/// The last third of the night between one maghrib and the following subuh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightThird {
    pub maghrib: NaiveDateTime,
    pub subuh: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub night_minutes: i64,
    pub duration_minutes: i64,
}

impl NightThird {
    /// `None` when subuh does not come after maghrib.
    pub fn between(maghrib: NaiveDateTime, subuh: NaiveDateTime) -> Option<Self> {
        if subuh <= maghrib {
            return None;
        }
        let night = subuh - maghrib;
        let third = night / 3;
        Some(Self {
            maghrib,
            subuh,
            start: subuh - third,
            end: subuh,
            night_minutes: night.num_minutes(),
            duration_minutes: third.num_minutes(),
        })
    }

    /// Today uses yesterday's maghrib, tomorrow uses today's.
    /// Not computed for yesterday.
    pub fn for_view(schedule: &ScheduleSet, view: Day) -> Option<Self> {
        let previous = match view {
            Day::Yesterday => return None,
            other => other.previous()?,
        };
        Self::between(
            schedule.day(previous).time(PrayerLabel::Maghrib),
            schedule.day(view).time(PrayerLabel::Subuh),
        )
    }

    pub fn third(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now < self.end
    }

    /// `H:MM – H:MM` on a 24-hour clock.
    pub fn display(&self) -> String {
        format!(
            "{} – {}",
            format_time_24h(self.start.time()),
            format_time_24h(self.end.time())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn spans_the_date_boundary() {
        let n = NightThird::between(at(15, 19, 20), at(16, 5, 50)).unwrap();
        assert_eq!(n.night_minutes, 630);
        assert_eq!(n.duration_minutes, 210);
        assert_eq!(n.start, at(16, 2, 20));
        assert_eq!(n.end, at(16, 5, 50));
        assert_eq!(n.display(), "2:20 – 5:50");
    }

    #[test]
    fn window_contains_only_the_last_third() {
        let n = NightThird::between(at(15, 19, 20), at(16, 5, 50)).unwrap();
        assert!(!n.contains(at(16, 2, 19)));
        assert!(n.contains(at(16, 2, 20)));
        assert!(!n.contains(at(16, 5, 50)));
    }

    #[test]
    fn inverted_inputs_yield_nothing() {
        assert!(NightThird::between(at(16, 5, 50), at(15, 19, 20)).is_none());
    }

    #[test]
    fn third_is_the_window_length() {
        let maghrib = NaiveDate::from_ymd_opt(2025, 12, 15)
            .unwrap()
            .and_hms_opt(19, 20, 0)
            .unwrap();
        let subuh = maghrib + Duration::minutes(630);
        let night = NightThird::between(maghrib, subuh).unwrap();
        assert_eq!(night.third(), Duration::minutes(210));
        assert!(night.contains(subuh - Duration::minutes(1)));
        assert!(!night.contains(subuh));
    }
}
