//! Geographic points and the operations built on them.
//!
//! - **Coordinates**: an immutable, range-checked latitude/longitude value
//!   type, constructible from numbers or degree-minute-second notation.
//! - **Distance**: spherical great-circle distance behind a strategy seam
//!   that leaves room for a more accurate long-range model.
//! - **Selection**: nearest / farthest candidate from a reference point by
//!   divide-and-conquer reduction, with a deterministic tie-break.
//! - **Routing**: simulated-annealing search for a low-cost visiting order,
//!   with pluggable route fitness.
//!
//! # Example
//!
//! ```
//! use u_geocoord::{Coordinate, DistanceEngine, Selector};
//!
//! let brasilia: Coordinate = r#"15°46'47"S 47°55'47"W"#.parse().unwrap();
//! let ottawa = Coordinate::make(45.41117, -75.69812).unwrap();
//! let beijing = Coordinate::make(39.9075, 116.39723).unwrap();
//!
//! assert_eq!(Selector::closest(brasilia, &[beijing, ottawa]), Ok(ottawa));
//! assert!(DistanceEngine::distance(brasilia, ottawa) > 7_000_000.0);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Coordinate`] and
//!   [`Route`](route::Route); deserialization re-validates.
//! - `parallel`: selection reduces large candidate sets on the rayon pool.

pub mod coordinate;
pub mod distance;
pub mod error;
pub mod route;
pub mod select;

pub use coordinate::{parse_notation, Coordinate};
pub use distance::DistanceEngine;
pub use error::{ConfigError, EmptyCandidateSet, InsufficientCandidates, InvalidCoordinate, ParseError};
pub use route::{Route, RouteOptimizer};
pub use select::Selector;
