//! Live qibla compass: static bearing, corrected heading, alignment latch.
//!
//! The tracker owns the only mutable heading state in the crate. Each
//! sample is processed synchronously:
//!
//! ```text
//! raw sample -> normalise -> unwrap against last -> error vs bearing -> latch
//! ```
//!
//! The latch fires `Event::QiblaAligned` only on the not-aligned → aligned
//! transition and stays quiet until the heading leaves the tolerance band.

use serde::Serialize;
use tracing::{debug, info};

use super::bearing::{angular_error, normalize_degrees, qibla_bearing, Coordinates};
use super::heading::{HeadingCorrector, HeadingSample, HeadingSource, RawHeading};
use crate::error::QiblaError;
use crate::events::Event;

/// Default alignment tolerance in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 5.0;

/// Haptic pulse length emitted on alignment.
pub const PULSE_MS: u64 = 40;

/// What the compass view renders after each sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QiblaReading {
    pub bearing: f64,
    /// Corrected heading; `None` until the sensor emits.
    pub heading: Option<f64>,
    /// `(bearing - heading) mod 360`, the needle angle relative to the device.
    pub needle_rotation: Option<f64>,
    pub error_deg: Option<f64>,
    pub aligned: Option<bool>,
}

impl QiblaReading {
    /// The corrected heading, or `SensorUnavailable`.
    pub fn sensor_heading(&self) -> Result<f64, QiblaError> {
        self.heading.ok_or(QiblaError::SensorUnavailable)
    }
}

#[derive(Debug, Clone)]
pub struct QiblaTracker {
    observer: Coordinates,
    bearing: f64,
    tolerance_deg: f64,
    corrector: HeadingCorrector,
    last: Option<HeadingSample>,
    aligned: bool,
}

impl QiblaTracker {
    pub fn new(observer: Coordinates, tolerance_deg: f64) -> Self {
        Self {
            observer,
            bearing: qibla_bearing(observer),
            tolerance_deg,
            corrector: HeadingCorrector::new(),
            last: None,
            aligned: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn observer(&self) -> Coordinates {
        self.observer
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn tolerance_deg(&self) -> f64 {
        self.tolerance_deg
    }

    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    pub fn reading(&self) -> QiblaReading {
        match self.last {
            None => QiblaReading {
                bearing: self.bearing,
                heading: None,
                needle_rotation: None,
                error_deg: None,
                aligned: None,
            },
            Some(sample) => {
                let error = angular_error(self.bearing, sample.corrected);
                QiblaReading {
                    bearing: self.bearing,
                    heading: Some(sample.corrected),
                    needle_rotation: Some(normalize_degrees(self.bearing - sample.corrected)),
                    error_deg: Some(error),
                    aligned: Some(error <= self.tolerance_deg),
                }
            }
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Move the observer. The bearing is recomputed; heading state is kept.
    pub fn set_observer(&mut self, observer: Coordinates) {
        self.observer = observer;
        self.bearing = qibla_bearing(observer);
    }

    /// Process one sample. Returns an event on an alignment edge.
    pub fn push(&mut self, raw: RawHeading) -> Option<Event> {
        self.accept(raw).and_then(|(_, event)| event)
    }

    fn accept(&mut self, raw: RawHeading) -> Option<(HeadingSample, Option<Event>)> {
        let sample = self.corrector.correct(raw)?;
        self.last = Some(sample);

        let error = angular_error(self.bearing, sample.corrected);
        let aligned = error <= self.tolerance_deg;
        let event = match (self.aligned, aligned) {
            (false, true) => {
                info!(heading = sample.corrected, error, "facing qibla");
                Some(Event::QiblaAligned {
                    heading: sample.corrected,
                    error_deg: error,
                    pulse_ms: PULSE_MS,
                })
            }
            (true, false) => {
                debug!(heading = sample.corrected, error, "left qibla tolerance");
                Some(Event::QiblaLost {
                    heading: sample.corrected,
                    error_deg: error,
                })
            }
            _ => None,
        };
        self.aligned = aligned;
        Some((sample, event))
    }

    /// Drain `source`, calling `on_sample` after every accepted sample.
    ///
    /// Returns the number of samples pulled from the source.
    pub fn follow<S, F>(&mut self, source: &mut S, mut on_sample: F) -> usize
    where
        S: HeadingSource + ?Sized,
        F: FnMut(&QiblaReading, Option<&Event>),
    {
        let mut pulled = 0;
        while let Some(raw) = source.next_sample() {
            pulled += 1;
            if let Some((_, event)) = self.accept(raw) {
                on_sample(&self.reading(), event.as_ref());
            }
        }
        pulled
    }
}
