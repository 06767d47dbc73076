//! Qibla direction and live compass alignment.
//!
//! Decoupled from the prayer schedule: consumes only observer coordinates
//! and a heading stream.

mod bearing;
mod heading;
mod tracker;

pub use bearing::{
    angular_error, initial_bearing, normalize_degrees, qibla_bearing, Coordinates, KAABA,
};
pub use heading::{
    HeadingCorrector, HeadingSample, HeadingSource, RawHeading, ScriptedHeadingSource,
};
pub use tracker::{QiblaReading, QiblaTracker, DEFAULT_TOLERANCE_DEG, PULSE_MS};
