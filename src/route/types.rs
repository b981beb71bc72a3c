//! Routes and the fitness functions that score them.

use crate::coordinate::Coordinate;
use crate::distance::DistanceEngine;
use crate::error::EmptyCandidateSet;

/// A non-empty visiting order over coordinates.
///
/// Repeated coordinates are allowed. Routes are never edited in place;
/// [`with_swapped`](Route::with_swapped) produces a new route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")
)]
pub struct Route {
    coordinates: Vec<Coordinate>,
}

impl Route {
    /// Creates a route visiting `coordinates` in order.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, EmptyCandidateSet> {
        if coordinates.is_empty() {
            return Err(EmptyCandidateSet);
        }
        Ok(Self { coordinates })
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Centroid distance from [`Coordinate::ORIGIN`], in meters.
    ///
    /// This is always [`CentroidFitness`], whatever fitness the optimizer
    /// that produced the route was configured with.
    pub fn fitness(&self) -> f64 {
        CentroidFitness.evaluate(self)
    }

    /// A copy of this route with positions `i` and `j` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn with_swapped(&self, i: usize, j: usize) -> Route {
        let mut coordinates = self.coordinates.clone();
        coordinates.swap(i, j);
        Route { coordinates }
    }
}

impl TryFrom<Vec<Coordinate>> for Route {
    type Error = EmptyCandidateSet;

    fn try_from(coordinates: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Route::new(coordinates)
    }
}

impl From<Route> for Vec<Coordinate> {
    fn from(route: Route) -> Self {
        route.coordinates
    }
}

/// Scores a route. Lower is better.
///
/// Implementations must be pure: the same route always yields the same
/// value.
pub trait RouteFitness: Send + Sync {
    fn evaluate(&self, route: &Route) -> f64;
}

/// Distance from [`Coordinate::ORIGIN`] to the route's centroid.
///
/// Depends only on which points are visited, not on their order, so
/// every permutation of a set scores (nearly) the same. Use
/// [`TourLength`] to actually minimize travel.
#[derive(Debug, Clone, Copy, Default)]
pub struct CentroidFitness;

impl RouteFitness for CentroidFitness {
    fn evaluate(&self, route: &Route) -> f64 {
        match Coordinate::centroid(route.coordinates()) {
            Some(centroid) => DistanceEngine::distance(Coordinate::ORIGIN, centroid),
            None => 0.0,
        }
    }
}

/// Total distance travelled between consecutive points.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourLength {
    start: Option<Coordinate>,
}

impl TourLength {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also counts the leg from `start` to the route's first point.
    pub fn starting_at(start: Coordinate) -> Self {
        Self { start: Some(start) }
    }
}

impl RouteFitness for TourLength {
    fn evaluate(&self, route: &Route) -> f64 {
        let mut previous = self.start;
        let mut total = 0.0;
        for &next in route.coordinates() {
            if let Some(from) = previous {
                total += DistanceEngine::distance(from, next);
            }
            previous = Some(next);
        }
        total
    }
}
