//! Arguments and loading shared by the schedule-driven commands.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use marisolat_core::{Config, Day, PrayerEngine, RawScheduleSet};

#[derive(Args, Debug, Clone)]
pub struct ScheduleArgs {
    /// JSON file with `yesterday`, `today` and `tomorrow` records
    #[arg(long, short)]
    pub schedule: PathBuf,
    /// Day to display (yesterday, today, tomorrow)
    #[arg(long, default_value = "today")]
    pub view: Day,
    /// Civil date of the `today` record (defaults to the local date)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn load_raw(path: &Path) -> Result<RawScheduleSet, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let raw = serde_json::from_str(&content)
        .map_err(|e| format!("invalid schedule {}: {e}", path.display()))?;
    Ok(raw)
}

/// `YYYY-MM-DDTHH:MM[:SS]`, with a space accepted in place of `T`.
pub fn parse_instant(input: &str) -> Result<NaiveDateTime, String> {
    let input = input.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| format!("invalid instant '{input}' (expected YYYY-MM-DDTHH:MM[:SS])"))
}

impl ScheduleArgs {
    /// The reference "today" for `now`.
    pub fn today(&self, now: NaiveDateTime) -> NaiveDate {
        self.date.unwrap_or_else(|| now.date())
    }

    /// Load the schedule file into a fresh engine.
    pub fn engine(
        &self,
        config: &Config,
        now: NaiveDateTime,
    ) -> Result<PrayerEngine, Box<dyn std::error::Error>> {
        let raw = load_raw(&self.schedule)?;
        Ok(PrayerEngine::with_schedule(config.waktu, raw, self.today(now)))
    }
}
