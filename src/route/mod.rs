//! Route ordering by simulated annealing.
//!
//! [`RouteOptimizer`] searches permutations of a candidate set for a
//! low-fitness visiting order. Fitness is pluggable through
//! [`RouteFitness`]:
//!
//! - [`CentroidFitness`] (default): distance from the origin to the
//!   route's centroid. Order-independent, so the search mostly explores
//!   rounding noise; kept for compatibility.
//! - [`TourLength`]: sum of consecutive-point distances, optionally from a
//!   fixed start. This is the metric to use for real routing.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod optimizer;
mod types;

pub use config::RouteConfig;
pub use optimizer::{acceptance_probability, RouteOptimizer, RouteResult};
pub use types::{CentroidFitness, Route, RouteFitness, TourLength};
