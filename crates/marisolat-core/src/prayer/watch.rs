//! The 1 Hz recomputation loop.
//!
//! `Ticker` is the only polling source: a tokio interval that is dropped
//! when the consuming view goes away and restarted whenever the schedule
//! changes. `Watcher` turns successive snapshots into edge events.
//!
//! ```ignore
//! let mut ticker = Ticker::new(Duration::from_millis(1000));
//! let mut watcher = Watcher::new(Day::Today);
//! loop {
//!     ticker.tick().await;
//!     let (snapshot, events) = watcher.tick(&engine, now());
//! }
//! ```

use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info};

use super::engine::{PrayerEngine, PrayerSnapshot};
use super::waktu::Waktu;
use crate::events::Event;
use crate::schedule::{Day, PrayerLabel};

pub struct Ticker {
    interval: Interval,
}

impl Ticker {
    /// First tick completes immediately. Missed ticks are skipped, not replayed.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    /// Restart the cadence so the next tick fires immediately.
    pub fn restart(&mut self) {
        self.interval.reset_immediately();
    }
}

/// Remembers the last observed labels so only changes produce events.
#[derive(Debug, Clone)]
pub struct Watcher {
    view: Day,
    last_prayer: Option<PrayerLabel>,
    last_waktu: Option<(PrayerLabel, Waktu)>,
}

impl Watcher {
    pub fn new(view: Day) -> Self {
        Self {
            view,
            last_prayer: None,
            last_waktu: None,
        }
    }

    pub fn view(&self) -> Day {
        self.view
    }

    pub fn set_view(&mut self, view: Day) {
        self.view = view;
        self.reset();
    }

    /// Forget the previous labels, e.g. after a schedule reload.
    pub fn reset(&mut self) {
        self.last_prayer = None;
        self.last_waktu = None;
    }

    /// Recompute for `now`. Cursor before waktu, as the engine guarantees.
    pub fn tick(&mut self, engine: &PrayerEngine, now: NaiveDateTime) -> (PrayerSnapshot, Vec<Event>) {
        let snapshot = engine.snapshot(now, self.view);
        let mut events = Vec::new();

        let prayer = snapshot.current;
        if prayer != self.last_prayer {
            if let (Some(label), Some(next)) = (snapshot.current, snapshot.next) {
                info!(%label, %next, "prayer entered");
                events.push(Event::PrayerEntered {
                    label,
                    next,
                    at: now,
                });
            }
            self.last_prayer = prayer;
        }

        let waktu = snapshot.waktu.as_ref().map(|w| (w.label, w.active));
        if waktu != self.last_waktu {
            if let Some((label, waktu)) = waktu {
                debug!(%label, %waktu, "waktu entered");
                events.push(Event::WaktuEntered {
                    label,
                    waktu,
                    at: now,
                });
            }
            self.last_waktu = waktu;
        }

        (snapshot, events)
    }
}
