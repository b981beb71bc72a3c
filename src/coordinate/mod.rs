//! Geographic points.
//!
//! [`Coordinate`] is the shared value type: two finite `f64` components in
//! decimal degrees, range-checked once at construction and immutable
//! afterwards. Points can also be read from degree-minute-second notation
//! via [`parse_notation`] or [`str::parse`].

mod notation;
mod types;

pub use notation::parse_notation;
pub use types::{Coordinate, MAX_LATITUDE, MAX_LONGITUDE};
