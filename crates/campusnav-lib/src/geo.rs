//! Great-circle distance on a spherical Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A (longitude, latitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to another coordinate in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_distance(*self, *other)
    }

    /// Per-axis proximity test used for snapping vertices onto buildings.
    pub fn within(&self, other: &Self, tolerance: f64) -> bool {
        (self.lon - other.lon).abs() <= tolerance && (self.lat - other.lat).abs() <= tolerance
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Haversine distance between two coordinates in meters.
///
/// Symmetric and non-negative for finite input.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());
    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_latitude_is_about_111km() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_identity() {
        let a = Coordinate::new(125.4846, 7.0859);
        let b = Coordinate::new(125.4871, 7.0833);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
        assert!(a.distance_to(&b) > 0.0);
    }

    #[test]
    fn antipodal_points_span_half_the_circumference() {
        let d = haversine_distance(Coordinate::new(0.0, 0.0), Coordinate::new(180.0, 0.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - expected).abs() < 1e-6 * expected);
    }

    #[test]
    fn within_checks_each_axis() {
        let a = Coordinate::new(1.0, 1.0);
        assert!(a.within(&Coordinate::new(1.0 + 5e-8, 1.0 - 5e-8), 1e-7));
        assert!(!a.within(&Coordinate::new(1.0 + 5e-7, 1.0), 1e-7));
        assert!(!a.within(&Coordinate::new(1.0, 1.0 + 5e-7), 1e-7));
    }
}
