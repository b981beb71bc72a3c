//! Nearest / farthest selection.
//!
//! [`Selector`] reduces a candidate slice to a single winner by balanced
//! divide-and-conquer: each half is reduced independently, then the two
//! half-winners are merged by comparing their distances to the reference
//! point. On an exact tie the left-hand winner is kept, so the first
//! listed of several equidistant candidates always wins.
//!
//! With the `parallel` feature, large ranges reduce their halves on the
//! rayon pool. The result is identical to the sequential path.

mod selector;

pub use selector::{Proximity, Selector};
