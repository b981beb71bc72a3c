//! Error types.
//!
//! Each operation reports the one failure family it can produce, so the
//! signatures say exactly what can go wrong.

use thiserror::Error;

/// A latitude/longitude pair outside the valid range, or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid coordinate parameters: latitude {latitude}, longitude {longitude}")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A selection was requested over zero candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("candidate set is empty")]
pub struct EmptyCandidateSet;

/// Route optimization needs at least two candidates to swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("route optimization needs at least 2 candidates, got {found}")]
pub struct InsufficientCandidates {
    pub found: usize,
}

/// Failure to read a degree-minute-second notation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("malformed notation: {notation}")]
    Malformed { notation: String },

    #[error(transparent)]
    OutOfRange(#[from] InvalidCoordinate),
}

/// Invalid [`RouteConfig`](crate::route::RouteConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial_temperature must be positive and finite, got {0}")]
    InitialTemperature(f64),

    #[error("min_temperature must be positive and finite, got {0}")]
    MinTemperature(f64),

    #[error("min_temperature ({min}) must be less than initial_temperature ({initial})")]
    TemperatureOrder { initial: f64, min: f64 },

    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),

    #[error("cooling_rate {0} is too small to lower the temperature")]
    StalledCooling(f64),

    #[error("cooling schedule needs {iterations} iterations; set max_iterations to bound it")]
    UnboundedSchedule { iterations: f64 },
}
