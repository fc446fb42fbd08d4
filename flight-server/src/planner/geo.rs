//! Great-circle travel-time heuristic.
//!
//! The earliest-arrival search needs a lower bound on the time still to fly.
//! No aircraft covers the great-circle distance faster than its cruise
//! speed, so distance over an assumed maximum speed never overestimates.

use std::collections::HashMap;

use crate::airports::GeoPoint;
use crate::domain::AirportCode;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default assumed maximum cruise speed (km/h).
pub const DEFAULT_CRUISE_SPEED_KMH: f64 = 900.0;

/// Great-circle distance between two points (km), by the haversine formula.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Airport coordinates plus the minimum-flight-time estimate built on them.
///
/// Airports without coordinates are placed at (0, 0). The estimate for them
/// is then meaningless, but it stays finite and non-negative, so the search
/// is still correct, just less well guided.
#[derive(Debug, Clone)]
pub struct GeoHeuristic {
    coords: HashMap<AirportCode, GeoPoint>,
    cruise_speed_kmh: f64,
}

impl GeoHeuristic {
    /// Create a heuristic over the given coordinates at the default speed.
    pub fn new(coords: HashMap<AirportCode, GeoPoint>) -> Self {
        Self {
            coords,
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
        }
    }

    /// A heuristic with no coordinates: every estimate is zero.
    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    /// Override the assumed cruise speed. Non-positive speeds are ignored.
    pub fn with_cruise_speed(mut self, kmh: f64) -> Self {
        if kmh.is_finite() && kmh > 0.0 {
            self.cruise_speed_kmh = kmh;
        }
        self
    }

    /// Known coordinates of an airport.
    pub fn coordinates(&self, airport: &AirportCode) -> Option<GeoPoint> {
        self.coords.get(airport).copied()
    }

    /// Position of an airport, or (0, 0) if unknown.
    pub fn position(&self, airport: &AirportCode) -> GeoPoint {
        self.coordinates(airport).unwrap_or(GeoPoint::ORIGIN)
    }

    /// Lower bound on flying time between two airports (minutes).
    pub fn estimate_minutes(&self, from: &AirportCode, to: &AirportCode) -> f64 {
        let distance_km = haversine_km(self.position(from), self.position(to));
        distance_km / self.cruise_speed_kmh * 60.0
    }

    /// Number of airports with known coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl Default for GeoHeuristic {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn india() -> GeoHeuristic {
        let mut coords = HashMap::new();
        coords.insert(code("DEL"), point(28.5665, 77.1031));
        coords.insert(code("BOM"), point(19.0896, 72.8656));
        GeoHeuristic::new(coords)
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = point(28.5, 77.1);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn haversine_quarter_meridian() {
        // Equator to pole is a quarter of the circumference
        let d = haversine_km(point(0.0, 0.0), point(90.0, 0.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM / 2.0;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn haversine_delhi_mumbai() {
        let d = haversine_km(point(28.5665, 77.1031), point(19.0896, 72.8656));
        assert!((d - 1138.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn estimate_is_distance_over_speed() {
        let geo = india();
        let minutes = geo.estimate_minutes(&code("DEL"), &code("BOM"));
        let km = haversine_km(geo.position(&code("DEL")), geo.position(&code("BOM")));
        assert!((minutes - km / 900.0 * 60.0).abs() < 1e-9);
        // Roughly 76 minutes at 900 km/h
        assert!(minutes > 70.0 && minutes < 80.0, "got {minutes}");
    }

    #[test]
    fn estimate_is_symmetric() {
        let geo = india();
        let there = geo.estimate_minutes(&code("DEL"), &code("BOM"));
        let back = geo.estimate_minutes(&code("BOM"), &code("DEL"));
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn missing_coordinates_use_origin() {
        let geo = india();
        assert_eq!(geo.position(&code("XYZ")), GeoPoint::ORIGIN);
        let estimate = geo.estimate_minutes(&code("XYZ"), &code("DEL"));
        assert!(estimate.is_finite());
        assert!(estimate >= 0.0);
    }

    #[test]
    fn coordinates_only_for_known_airports() {
        let geo = india();
        assert_eq!(
            geo.coordinates(&code("DEL")),
            Some(point(28.5665, 77.1031))
        );
        assert_eq!(geo.coordinates(&code("XYZ")), None);
    }

    #[test]
    fn empty_heuristic_is_zero() {
        let geo = GeoHeuristic::empty();
        assert!(geo.is_empty());
        assert_eq!(geo.estimate_minutes(&code("DEL"), &code("BOM")), 0.0);
    }

    #[test]
    fn faster_cruise_lowers_estimate() {
        let slow = india();
        let fast = india().with_cruise_speed(1800.0);
        let a = slow.estimate_minutes(&code("DEL"), &code("BOM"));
        let b = fast.estimate_minutes(&code("DEL"), &code("BOM"));
        assert!((a - 2.0 * b).abs() < 1e-9);
    }

    #[test]
    fn invalid_cruise_speed_ignored() {
        let geo = india().with_cruise_speed(0.0).with_cruise_speed(-5.0);
        let default = india();
        assert_eq!(
            geo.estimate_minutes(&code("DEL"), &code("BOM")),
            default.estimate_minutes(&code("DEL"), &code("BOM"))
        );
    }
}
