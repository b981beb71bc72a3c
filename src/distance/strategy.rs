//! Distance calculation strategies.

use crate::coordinate::Coordinate;

/// Earth radius used by the spherical model, in meters.
pub const EARTH_RADIUS_M: f64 = 6_366_707.0195;

/// Component difference, in degrees, below which two points count as
/// nearby (roughly 100 m).
pub const PROXIMITY_THRESHOLD_DEG: f64 = 1e-3;

/// How the distance between two coordinates is computed.
///
/// Both strategies currently evaluate the haversine formula. `Precise`
/// is the slot for a long-range model (e.g. an ellipsoidal solver) and is
/// selected for every pair that is not nearby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceStrategy {
    /// Spherical great-circle distance.
    Haversine,
    /// Long-range model. Same numbers as `Haversine` for now.
    Precise,
}

impl DistanceStrategy {
    /// Picks the strategy for a source/target pair.
    pub fn select(source: Coordinate, target: Coordinate) -> Self {
        let nearby = (source.latitude() - target.latitude()).abs() < PROXIMITY_THRESHOLD_DEG
            && (source.longitude() - target.longitude()).abs() < PROXIMITY_THRESHOLD_DEG;
        if nearby {
            DistanceStrategy::Haversine
        } else {
            DistanceStrategy::Precise
        }
    }

    /// Distance in meters under this strategy.
    pub fn compute(self, source: Coordinate, target: Coordinate) -> f64 {
        match self {
            DistanceStrategy::Haversine | DistanceStrategy::Precise => haversine(source, target),
        }
    }
}

/// `d = 2R · asin(sqrt(sin²(Δlat/2) + sin²(Δlon/2) · cos(lat₁) · cos(lat₂)))`
fn haversine(source: Coordinate, target: Coordinate) -> f64 {
    let d_lat = (target.latitude() - source.latitude()).to_radians();
    let d_lon = (target.longitude() - source.longitude()).to_radians();

    let lat1 = source.latitude().to_radians();
    let lat2 = target.latitude().to_radians();

    // Grouping the cosines keeps the result bit-identical when source and
    // target are swapped.
    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * (lat1.cos() * lat2.cos());

    // Rounding can push `a` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}
