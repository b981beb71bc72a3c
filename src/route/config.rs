//! Route optimizer configuration.

use crate::error::ConfigError;

/// Longest cooling schedule accepted without an explicit `max_iterations`.
pub const MAX_SCHEDULE_ITERATIONS: f64 = 100_000_000.0;

/// Configuration for [`RouteOptimizer`](super::RouteOptimizer).
///
/// The search starts at `initial_temperature`, multiplies it by
/// `1 - cooling_rate` after every iteration, and stops once it is no
/// longer above `min_temperature`, or after `max_iterations` iterations
/// when that is non-zero.
///
/// # Examples
///
/// ```
/// use u_geocoord::route::RouteConfig;
///
/// let config = RouteConfig::default()
///     .with_initial_temperature(10_000.0)
///     .with_cooling_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// The loop runs while the temperature is above this value.
    pub min_temperature: f64,

    /// Fraction of the temperature removed per iteration, in `(0, 1)`.
    pub cooling_rate: f64,

    /// Hard iteration budget. 0 = run the full cooling schedule.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100_000.0,
            min_temperature: 1.0,
            cooling_rate: 0.003,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl RouteConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(ConfigError::MinTemperature(self.min_temperature));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(ConfigError::TemperatureOrder {
                initial: self.initial_temperature,
                min: self.min_temperature,
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        // Rates below half an ulp of 1.0 leave the temperature unchanged.
        if 1.0 - self.cooling_rate >= 1.0 {
            return Err(ConfigError::StalledCooling(self.cooling_rate));
        }
        let iterations = self.schedule_length();
        if self.max_iterations == 0 && iterations > MAX_SCHEDULE_ITERATIONS {
            return Err(ConfigError::UnboundedSchedule { iterations });
        }
        Ok(())
    }

    /// Number of iterations the cooling schedule runs before the
    /// temperature reaches `min_temperature`, ignoring `max_iterations`.
    pub fn schedule_length(&self) -> f64 {
        let ratio = (self.min_temperature / self.initial_temperature).ln();
        (ratio / (-self.cooling_rate).ln_1p()).ceil()
    }
}
