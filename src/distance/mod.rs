//! Great-circle distance between coordinates.
//!
//! [`DistanceEngine::distance`] dispatches to a [`DistanceStrategy`] chosen
//! by a proximity predicate: nearby pairs use the haversine formula, all
//! others go through the `Precise` slot. Callers never pick a strategy
//! themselves, so a more accurate long-range model can be dropped in
//! without touching them.

mod strategy;

pub use strategy::{DistanceStrategy, EARTH_RADIUS_M, PROXIMITY_THRESHOLD_DEG};

use crate::coordinate::Coordinate;

/// Computes distances between coordinates.
pub struct DistanceEngine;

impl DistanceEngine {
    /// Distance from `source` to `target`, in meters.
    ///
    /// Always finite and non-negative; zero iff the points are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_geocoord::{Coordinate, DistanceEngine};
    ///
    /// let a = Coordinate::make(45.0, 45.0).unwrap();
    /// let b = Coordinate::make(25.0, 25.0).unwrap();
    /// let d = DistanceEngine::distance(a, b);
    /// assert!((d - 2_856_265.0616).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn distance(source: Coordinate, target: Coordinate) -> f64 {
        DistanceStrategy::select(source, target).compute(source, target)
    }
}
