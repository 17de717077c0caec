//! Port for wind observations. Nothing in the geometry or flow code calls it; an application that
//! needs live wind data supplies its own `WindSource`, and tests use `FixedWind`.

use crate::errors::{AirfoilError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Coordinates")]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<Coordinates> for GeoLocation {
    type Error = AirfoilError;

    fn try_from(c: Coordinates) -> Result<Self> {
        GeoLocation::new(c.latitude, c.longitude)
    }
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<GeoLocation> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AirfoilError::invalid(
                "latitude",
                format!("{} is outside [-90, 90]", latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AirfoilError::invalid(
                "longitude",
                format!("{} is outside [-180, 180]", longitude),
            ));
        }
        Ok(GeoLocation {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub speed: f64,
    /// Meteorological direction the wind blows from, degrees clockwise from north
    pub direction_degrees: f64,
}

#[derive(Debug, Error)]
pub enum WindError {
    #[error("no wind data within {0:?}")]
    Timeout(Duration),

    #[error("wind data unavailable: {0}")]
    Unavailable(String),
}

pub trait WindSource {
    /// Returns the current wind at a location, giving up after `timeout`. Implementations make a
    /// single attempt and do not retry.
    fn wind_at(
        &self,
        location: GeoLocation,
        timeout: Duration,
    ) -> std::result::Result<WindSample, WindError>;
}

/// A source that reports the same sample everywhere
#[derive(Debug, Clone, Copy)]
pub struct FixedWind(pub WindSample);

impl WindSource for FixedWind {
    fn wind_at(
        &self,
        _location: GeoLocation,
        _timeout: Duration,
    ) -> std::result::Result<WindSample, WindError> {
        Ok(self.0)
    }
}
