//! Time-of-day parsing and 12-hour display formatting.
//!
//! Accepted inputs:
//!
//! ```text
//! 5:50 AM     12-hour with meridiem (case-insensitive, space optional)
//! 13:05       24-hour
//! 13:05:00    24-hour with seconds, seconds are dropped
//! ```
//!
//! The minute token must be exactly two digits. Anything else is
//! `ScheduleError::MalformedTime`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn to_24h(self, hour: u32) -> u32 {
        match (self, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }
}

/// Parse a time-of-day string. Seconds and sub-seconds are zeroed.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, ScheduleError> {
    let malformed = || ScheduleError::MalformedTime {
        input: input.to_string(),
    };

    let upper = input.trim().to_ascii_uppercase();
    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(Meridiem::Am))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(Meridiem::Pm))
    } else {
        (upper.as_str(), None)
    };

    let mut tokens = clock.split(':');
    let hour_token = tokens.next().ok_or_else(malformed)?;
    let minute_token = tokens.next().ok_or_else(malformed)?;
    if let Some(seconds) = tokens.next() {
        if meridiem.is_some() || !is_two_digits(seconds) {
            return Err(malformed());
        }
    }
    if tokens.next().is_some() {
        return Err(malformed());
    }

    if hour_token.is_empty()
        || hour_token.len() > 2
        || !hour_token.bytes().all(|b| b.is_ascii_digit())
        || !is_two_digits(minute_token)
    {
        return Err(malformed());
    }

    let hour: u32 = hour_token.parse().map_err(|_| malformed())?;
    let minute: u32 = minute_token.parse().map_err(|_| malformed())?;

    let hour = match meridiem {
        Some(m) if (1..=12).contains(&hour) => m.to_24h(hour),
        Some(_) => return Err(malformed()),
        None => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Parse a time-of-day string and anchor it to `date`.
pub fn parse_time_on(input: &str, date: NaiveDate) -> Result<NaiveDateTime, ScheduleError> {
    Ok(date.and_time(parse_time_of_day(input)?))
}

/// Render as `H:MM AM|PM`, e.g. `1:05 PM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        time.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Render as `H:MM` on a 24-hour clock, e.g. `2:20`.
pub fn format_time_24h(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Display form of a raw upstream time string; `-` when empty or unreadable.
pub fn format_raw_time(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".into();
    }
    parse_time_of_day(raw)
        .map(format_time_12h)
        .unwrap_or_else(|_| "-".into())
}

fn is_two_digits(token: &str) -> bool {
    token.len() == 2 && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_twelve_hour_times() {
        assert_eq!(parse_time_of_day("5:50 AM").unwrap(), hm(5, 50));
        assert_eq!(parse_time_of_day("7:20 PM").unwrap(), hm(19, 20));
        assert_eq!(parse_time_of_day("1:05 pm").unwrap(), hm(13, 5));
        assert_eq!(parse_time_of_day("8:30PM").unwrap(), hm(20, 30));
    }

    #[test]
    fn twelve_am_is_midnight_and_twelve_pm_is_noon() {
        assert_eq!(parse_time_of_day("12:00 AM").unwrap(), hm(0, 0));
        assert_eq!(parse_time_of_day("12:15 PM").unwrap(), hm(12, 15));
    }

    #[test]
    fn parses_twenty_four_hour_times() {
        assert_eq!(parse_time_of_day("13:00").unwrap(), hm(13, 0));
        assert_eq!(parse_time_of_day("05:50:00").unwrap(), hm(5, 50));
        assert_eq!(parse_time_of_day(" 0:07 ").unwrap(), hm(0, 7));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "", "5", "5:5 AM", "5:500", "a:30", "13:00 PM", "0:30 AM", "24:00", "7:60",
            "1:2:3:4", "5:50:00 AM", "::",
        ] {
            let err = parse_time_of_day(bad).unwrap_err();
            assert_eq!(
                err,
                ScheduleError::MalformedTime { input: bad.into() },
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn anchors_to_given_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 16).unwrap();
        let at = parse_time_on("7:10 AM", date).unwrap();
        assert_eq!(at, date.and_hms_opt(7, 10, 0).unwrap());
    }

    #[test]
    fn formats_twelve_hour() {
        assert_eq!(format_time_12h(hm(0, 5)), "12:05 AM");
        assert_eq!(format_time_12h(hm(12, 0)), "12:00 PM");
        assert_eq!(format_time_12h(hm(19, 20)), "7:20 PM");
    }

    #[test]
    fn formats_raw_upstream_strings() {
        assert_eq!(format_raw_time("13:05:00"), "1:05 PM");
        assert_eq!(format_raw_time(""), "-");
        assert_eq!(format_raw_time("soon"), "-");
    }

    #[test]
    fn formats_twenty_four_hour_without_padding() {
        assert_eq!(format_time_24h(hm(2, 20)), "2:20");
        assert_eq!(format_time_24h(hm(19, 5)), "19:05");
    }
}
