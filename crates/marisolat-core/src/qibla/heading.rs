//! Compass heading samples and seam continuity.
//!
//! The correction keeps successive headings continuous across the 0/360
//! seam so a rendered needle never spins the long way round:
//!
//! ```text
//! raw:        350  355    2    8
//! corrected:  350  355  362  368
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::bearing::normalize_degrees;

/// One reading as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "degrees", rename_all = "snake_case")]
pub enum RawHeading {
    /// Degrees clockwise from north.
    Compass(f64),
    /// Device orientation `alpha`, counter-clockwise; heading is `360 - alpha`.
    Alpha(f64),
}

impl RawHeading {
    /// Heading in `[0, 360)`, or `None` for non-finite readings.
    pub fn degrees_from_north(self) -> Option<f64> {
        let degrees = match self {
            RawHeading::Compass(d) => d,
            RawHeading::Alpha(a) => 360.0 - a,
        };
        degrees.is_finite().then(|| normalize_degrees(degrees))
    }
}

/// A lazy, unbounded sequence of heading samples.
///
/// `None` means the source has nothing more to give (sensor closed or
/// never present).
pub trait HeadingSource {
    fn next_sample(&mut self) -> Option<RawHeading>;
}

/// Plays back a fixed list of samples. Used in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHeadingSource {
    samples: VecDeque<RawHeading>,
}

impl ScriptedHeadingSource {
    pub fn new(samples: impl IntoIterator<Item = RawHeading>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Compass headings in degrees.
    pub fn compass(degrees: impl IntoIterator<Item = f64>) -> Self {
        Self::new(degrees.into_iter().map(RawHeading::Compass))
    }

    pub fn push(&mut self, sample: RawHeading) {
        self.samples.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl HeadingSource for ScriptedHeadingSource {
    fn next_sample(&mut self) -> Option<RawHeading> {
        self.samples.pop_front()
    }
}

/// A normalised reading and its continuity-corrected counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingSample {
    /// Heading in `[0, 360)`.
    pub heading: f64,
    /// Unwrapped heading; may leave `[0, 360)`.
    pub corrected: f64,
}

/// Unwraps headings against the previous corrected value.
#[derive(Debug, Clone, Default)]
pub struct HeadingCorrector {
    last: Option<f64>,
}

impl HeadingCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last corrected heading, if any sample has been accepted.
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Accept a sample. Non-finite readings are dropped.
    ///
    /// The step from the previous corrected heading is folded into
    /// `(-180, 180]`, i.e. shifted by a multiple of 360 whenever it exceeds
    /// half a turn.
    pub fn correct(&mut self, raw: RawHeading) -> Option<HeadingSample> {
        let heading = raw.degrees_from_north()?;
        let corrected = match self.last {
            None => heading,
            Some(last) => {
                let mut step = (heading - last).rem_euclid(360.0);
                if step > 180.0 {
                    step -= 360.0;
                }
                last + step
            }
        };
        self.last = Some(corrected);
        Some(HeadingSample { heading, corrected })
    }
}
