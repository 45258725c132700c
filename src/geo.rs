//! Spherical geometry on a mean-radius Earth.
//!
//! Distances use the atan2 form of the great-circle formula. It stays well
//! conditioned for both very small and near-antipodal separations.

use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

const DEG: f64 = PI / 180.0;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.2;

/// A point on the sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location needs exactly 2 components (lat, lon), got {found}")]
    Arity { found: usize },

    #[error("Coordinates out of range: lat {lat} (-90..90), lon {lon} (-180..180)")]
    OutOfRange { lat: f64, lon: f64 },
}

impl Location {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that both components are finite and inside the geographic range.
    pub fn validate(&self) -> Result<(), LocationError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(LocationError::OutOfRange { lat: self.lat, lon: self.lon })
        }
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Location {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl TryFrom<&[f64]> for Location {
    type Error = LocationError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [lat, lon] => Ok(Self { lat, lon }),
            _ => Err(LocationError::Arity { found: values.len() }),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_coords(self.lat, self.lon))
    }
}

/// Great-circle distance between two points, in kilometres.
pub fn great_circle_distance(first: impl Into<Location>, second: impl Into<Location>) -> f64 {
    let (first, second) = (first.into(), second.into());

    let lat1 = first.lat * DEG;
    let lat2 = second.lat * DEG;
    let delta = (second.lon - first.lon) * DEG;

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let y = ((cos_lat2 * sin_delta).powi(2)
        + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta).powi(2))
    .sqrt();
    let x = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta;

    EARTH_RADIUS_KM * y.atan2(x)
}

/// Format coordinates as `53.3382°N, 6.2593°W`.
pub fn format_coords(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}\u{00B0}{}, {:.4}\u{00B0}{}", lat.abs(), ns, lon.abs(), ew)
}
