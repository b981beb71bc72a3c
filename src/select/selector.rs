//! Divide-and-conquer reduction over candidate slices.

use crate::coordinate::Coordinate;
use crate::distance::DistanceEngine;
use crate::error::EmptyCandidateSet;

/// Ranges at or below this size are reduced on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 1024;

/// Which extreme of the distance ranking to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    Closest,
    Farthest,
}

impl Proximity {
    /// Keeps `left` unless `right` is strictly better.
    fn merge(self, left: Scored, right: Scored) -> Scored {
        let right_wins = match self {
            Proximity::Closest => right.distance < left.distance,
            Proximity::Farthest => right.distance > left.distance,
        };
        if right_wins {
            right
        } else {
            left
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    coordinate: Coordinate,
    distance: f64,
}

/// Selects the nearest or farthest candidate from a reference point.
///
/// # Examples
///
/// ```
/// use u_geocoord::{Coordinate, Selector};
///
/// let reference = Coordinate::make(-15.77972, -47.92972).unwrap();
/// let paris = Coordinate::make(48.85341, 2.3488).unwrap();
/// let ottawa = Coordinate::make(45.41117, -75.69812).unwrap();
///
/// assert_eq!(Selector::closest(reference, &[paris, ottawa]), Ok(ottawa));
/// assert_eq!(Selector::farthest(reference, &[paris, ottawa]), Ok(paris));
/// ```
pub struct Selector;

impl Selector {
    /// The candidate nearest to `reference`.
    pub fn closest(
        reference: Coordinate,
        candidates: &[Coordinate],
    ) -> Result<Coordinate, EmptyCandidateSet> {
        Self::select(reference, candidates, Proximity::Closest)
    }

    /// The candidate farthest from `reference`.
    pub fn farthest(
        reference: Coordinate,
        candidates: &[Coordinate],
    ) -> Result<Coordinate, EmptyCandidateSet> {
        Self::select(reference, candidates, Proximity::Farthest)
    }

    /// Reduces `candidates` to the single winner under `proximity`.
    ///
    /// Evaluates exactly one distance per candidate. Among equidistant
    /// winners the one listed first is returned.
    pub fn select(
        reference: Coordinate,
        candidates: &[Coordinate],
        proximity: Proximity,
    ) -> Result<Coordinate, EmptyCandidateSet> {
        if candidates.is_empty() {
            return Err(EmptyCandidateSet);
        }

        let winner = reduce(reference, candidates, proximity);
        tracing::trace!(
            ?proximity,
            candidates = candidates.len(),
            distance = winner.distance,
            "selected {}",
            winner.coordinate
        );
        Ok(winner.coordinate)
    }
}

/// `candidates` must be non-empty.
fn reduce(reference: Coordinate, candidates: &[Coordinate], proximity: Proximity) -> Scored {
    if let [only] = candidates {
        return Scored {
            coordinate: *only,
            distance: DistanceEngine::distance(reference, *only),
        };
    }

    // Left half takes the middle element: [0, mid] and [mid + 1, len).
    let (left, right) = candidates.split_at(candidates.len().div_ceil(2));
    let (left, right) = reduce_halves(reference, left, right, proximity);
    proximity.merge(left, right)
}

#[cfg(not(feature = "parallel"))]
fn reduce_halves(
    reference: Coordinate,
    left: &[Coordinate],
    right: &[Coordinate],
    proximity: Proximity,
) -> (Scored, Scored) {
    (
        reduce(reference, left, proximity),
        reduce(reference, right, proximity),
    )
}

#[cfg(feature = "parallel")]
fn reduce_halves(
    reference: Coordinate,
    left: &[Coordinate],
    right: &[Coordinate],
    proximity: Proximity,
) -> (Scored, Scored) {
    if left.len() + right.len() > PARALLEL_CUTOFF {
        rayon::join(
            || reduce(reference, left, proximity),
            || reduce(reference, right, proximity),
        )
    } else {
        (
            reduce(reference, left, proximity),
            reduce(reference, right, proximity),
        )
    }
}
