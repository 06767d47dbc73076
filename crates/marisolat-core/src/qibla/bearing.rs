//! Great-circle bearing toward the Kaaba.

use serde::{Deserialize, Serialize};

use crate::error::QiblaError;

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, range [-180, 180].
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, QiblaError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(QiblaError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The Kaaba, Makkah.
pub const KAABA: Coordinates = Coordinates {
    latitude: 21.422487,
    longitude: 39.826206,
};

/// Wrap into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Initial forward azimuth from `from` to `to`, degrees clockwise from true north.
pub fn initial_bearing(from: Coordinates, to: Coordinates) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Qibla bearing for an observer.
pub fn qibla_bearing(observer: Coordinates) -> f64 {
    initial_bearing(observer, KAABA)
}

/// Circular distance between a bearing and a heading, in `[0, 180]`.
pub fn angular_error(bearing: f64, heading: f64) -> f64 {
    let delta = normalize_degrees(bearing - heading);
    delta.min(360.0 - delta)
}
