//! Malay civil/lunar date banner.

use chrono::{Datelike, NaiveDate};

use crate::error::ScheduleError;

const GREGORIAN_MONTHS: [&str; 12] = [
    "Januari", "Februari", "Mac", "April", "Mei", "Jun", "Julai", "Ogos", "September", "Oktober",
    "November", "Disember",
];

const HIJRI_MONTHS: [&str; 12] = [
    "Muharram", "Safar", "Rabiulawal", "Rabiulakhir", "Jamadilawal", "Jamadilakhir", "Rejab",
    "Syaaban", "Ramadan", "Syawal", "Zulkaedah", "Zulhijjah",
];

/// Civil date in upstream form (`16-Dec-2025`) or ISO form (`2025-12-16`).
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, ScheduleError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%d-%b-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| ScheduleError::MalformedDate {
            input: input.to_string(),
        })
}

/// `16-Dec-2025` → `16 Disember 2025 Miladi`
pub fn format_gregorian(input: &str) -> Result<String, ScheduleError> {
    let date = parse_gregorian(input)?;
    Ok(format!(
        "{} {} {} Miladi",
        date.day(),
        GREGORIAN_MONTHS[date.month0() as usize],
        date.year()
    ))
}

/// `1447-06-25` → `25 Jamadilakhir 1447 Hijri`
pub fn format_hijri(input: &str) -> Result<String, ScheduleError> {
    let malformed = || ScheduleError::MalformedDate {
        input: input.to_string(),
    };
    let mut parts = input.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let year: u32 = year.parse().map_err(|_| malformed())?;
    let month: usize = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
        return Err(malformed());
    }
    Ok(format!("{} {} {} Hijri", day, HIJRI_MONTHS[month - 1], year))
}

/// The banner shown above the prayer rows.
pub fn format_prayer_dates(gregorian: &str, hijri: &str) -> Result<String, ScheduleError> {
    Ok(format!(
        "{} | {}",
        format_gregorian(gregorian)?,
        format_hijri(hijri)?
    ))
}
