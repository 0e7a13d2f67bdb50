//! Great-circle distance between geodetic points.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other`, in metres.
    pub fn distance(&self, other: &Self) -> f64 {
        if self.latitude == other.latitude && self.longitude == other.longitude {
            return 0.0;
        }
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_METERS * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        let a = Coordinate::new(55.611_087, 37.20829);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn known_distance_is_approximately_correct() {
        // Moscow (Red Square) to Saint Petersburg (Palace Square), ~634 km great-circle.
        let moscow = Coordinate::new(55.753_930, 37.620_795);
        let spb = Coordinate::new(59.939_039, 30.315_785);
        let dist = moscow.distance(&spb) / 1000.0;
        assert!((dist - 634.0).abs() < 10.0, "got {dist} km");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(55.0, 37.0);
        let b = Coordinate::new(55.0, 37.1);
        assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-9);
    }
}
