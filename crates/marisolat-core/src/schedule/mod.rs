//! Prayer labels, per-day schedules and the three-day window.

mod daily;
mod label;
mod resolver;

pub use daily::{DailySchedule, RawDay};
pub use label::{Day, PrayerLabel};
pub use resolver::{resolve, RawScheduleSet, ScheduleSet};
