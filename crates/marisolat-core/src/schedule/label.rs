use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six daily reference times, in their fixed order.
///
/// `Syuruk` (sunrise) is a boundary marker, not a prayer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerLabel {
    Subuh,
    Syuruk,
    Zohor,
    Asar,
    Maghrib,
    Isyak,
}

impl PrayerLabel {
    pub const ALL: [PrayerLabel; 6] = [
        PrayerLabel::Subuh,
        PrayerLabel::Syuruk,
        PrayerLabel::Zohor,
        PrayerLabel::Asar,
        PrayerLabel::Maghrib,
        PrayerLabel::Isyak,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrayerLabel::Subuh => "subuh",
            PrayerLabel::Syuruk => "syuruk",
            PrayerLabel::Zohor => "zohor",
            PrayerLabel::Asar => "asar",
            PrayerLabel::Maghrib => "maghrib",
            PrayerLabel::Isyak => "isyak",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PrayerLabel::Subuh => "Subuh",
            PrayerLabel::Syuruk => "Syuruk",
            PrayerLabel::Zohor => "Zohor",
            PrayerLabel::Asar => "Asar",
            PrayerLabel::Maghrib => "Maghrib",
            PrayerLabel::Isyak => "Isyak",
        }
    }

    /// Whether this label opens a classifiable prayer window.
    pub fn is_prayer(self) -> bool {
        self != PrayerLabel::Syuruk
    }
}

impl fmt::Display for PrayerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// A day slot in the three-day schedule window, relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Yesterday,
    Today,
    Tomorrow,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::Yesterday, Day::Today, Day::Tomorrow];

    /// Civil-date offset from today.
    pub fn offset_days(self) -> i64 {
        match self {
            Day::Yesterday => -1,
            Day::Today => 0,
            Day::Tomorrow => 1,
        }
    }

    /// The day before this one, if it is inside the window.
    pub fn previous(self) -> Option<Day> {
        match self {
            Day::Yesterday => None,
            Day::Today => Some(Day::Yesterday),
            Day::Tomorrow => Some(Day::Today),
        }
    }

    /// The day after this one, if it is inside the window.
    pub fn next(self) -> Option<Day> {
        match self {
            Day::Yesterday => Some(Day::Today),
            Day::Today => Some(Day::Tomorrow),
            Day::Tomorrow => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Yesterday => "yesterday",
            Day::Today => "today",
            Day::Tomorrow => "tomorrow",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yesterday" | "semalam" => Ok(Day::Yesterday),
            "today" | "hari-ini" => Ok(Day::Today),
            "tomorrow" | "esok" => Ok(Day::Tomorrow),
            other => Err(format!(
                "unknown day '{other}' (expected yesterday, today or tomorrow)"
            )),
        }
    }
}
