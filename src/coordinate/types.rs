//! The geographic point value type.

use std::fmt;

use crate::distance::DistanceEngine;
use crate::error::{EmptyCandidateSet, InsufficientCandidates, InvalidCoordinate};
use crate::route::{Route, RouteOptimizer};
use crate::select::Selector;

/// Largest absolute latitude, in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest absolute longitude, in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// An immutable, always-valid geographic point in decimal degrees.
///
/// Construction goes through [`Coordinate::make`], which rejects values
/// outside `[-90, 90]` x `[-180, 180]` as well as NaN and infinities.
/// Equality and ordering compare latitude first, then longitude.
///
/// # Examples
///
/// ```
/// use u_geocoord::Coordinate;
///
/// let paris = Coordinate::make(48.85341, 2.3488).unwrap();
/// assert_eq!(paris.latitude(), 48.85341);
/// assert!(Coordinate::make(90.5, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// The point at latitude 0, longitude 0.
    pub const ORIGIN: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Creates a coordinate, validating both components.
    pub fn make(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && latitude.abs() <= MAX_LATITUDE
            && longitude.abs() <= MAX_LONGITUDE;
        if !valid {
            return Err(InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Arithmetic mean of latitudes and of longitudes, `None` when empty.
    ///
    /// This is the planar centroid of the degree values, not a spherical
    /// midpoint.
    pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (lat_sum, lon_sum) = points.iter().fold((0.0, 0.0), |(lat, lon), p| {
            (lat + p.latitude, lon + p.longitude)
        });
        // A mean of in-range values stays in range; the clamp only absorbs
        // rounding.
        Some(Coordinate {
            latitude: (lat_sum / n).clamp(-MAX_LATITUDE, MAX_LATITUDE),
            longitude: (lon_sum / n).clamp(-MAX_LONGITUDE, MAX_LONGITUDE),
        })
    }

    /// Great-circle distance to `other`, in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        DistanceEngine::distance(*self, *other)
    }

    /// The candidate nearest to this point.
    pub fn closest(&self, others: &[Coordinate]) -> Result<Coordinate, EmptyCandidateSet> {
        Selector::closest(*self, others)
    }

    /// The candidate farthest from this point.
    pub fn farthest(&self, others: &[Coordinate]) -> Result<Coordinate, EmptyCandidateSet> {
        Selector::farthest(*self, others)
    }

    /// Orders `others` with the default [`RouteOptimizer`].
    ///
    /// This point is not part of the resulting route; use
    /// [`TourLength::starting_at`](crate::route::TourLength::starting_at)
    /// with a custom optimizer to anchor the tour here.
    pub fn route_to(&self, others: &[Coordinate]) -> Result<Route, InsufficientCandidates> {
        let optimizer: RouteOptimizer = RouteOptimizer::default();
        optimizer.optimize(others)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::make(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coordinate(latitude={:?}, longitude={:?})",
            self.latitude, self.longitude
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::make(raw.latitude, raw.longitude)
    }
}
