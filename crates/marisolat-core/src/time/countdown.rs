use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A non-negative duration split into hours, minutes and whole seconds.
///
/// Renders as `"{h} jam {m} minit {s} saat"`, dropping the hour segment
/// when zero and the minute segment when zero. Seconds are always shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Negative durations clamp to zero; sub-second remainders are floored.
    pub fn from_duration(duration: Duration) -> Self {
        let total = duration.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Time left from `now` until `target`.
    pub fn until(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self::from_duration(target - now)
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{} jam ", self.hours)?;
        }
        if self.minutes > 0 {
            write!(f, "{} minit ", self.minutes)?;
        }
        write!(f, "{} saat", self.seconds)
    }
}

/// Shorthand for `Countdown::until(now, target).to_string()`.
pub fn format_countdown(now: NaiveDateTime, target: NaiveDateTime) -> String {
    Countdown::until(now, target).to_string()
}
