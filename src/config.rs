//! Search configuration: the center point and radius for one run.

use crate::geo::Location;

/// Default search radius in kilometres.
pub const DEFAULT_DISTANCE_KM: f64 = 100.0;

/// Default center (Dublin office).
pub const DEFAULT_CENTER: Location = Location::new(53.3381985, -6.2592576);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub distance_km: f64,
    pub center: Location,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { distance_km: DEFAULT_DISTANCE_KM, center: DEFAULT_CENTER }
    }
}

impl SearchConfig {
    pub fn new(distance_km: f64, center: impl Into<Location>) -> Self {
        Self { distance_km, center: center.into() }
    }
}
