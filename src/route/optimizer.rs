//! Simulated annealing over visiting orders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::RouteConfig;
use super::types::{CentroidFitness, Route, RouteFitness};
use crate::coordinate::Coordinate;
use crate::error::{ConfigError, InsufficientCandidates};

/// Best fitness is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a route optimization run.
#[derive(Debug, Clone)]
pub struct RouteResult {
    /// The best route found.
    pub best: Route,

    /// Fitness of the best route under the optimizer's [`RouteFitness`].
    ///
    /// Equals `best.fitness()` only for [`CentroidFitness`];
    /// [`Route::fitness`] always measures the centroid distance.
    pub best_fitness: f64,

    /// Fitness of the starting order (the candidates as given).
    pub initial_fitness: f64,

    /// Total number of iterations (neighbour evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best fitness sampled at regular intervals.
    pub fitness_history: Vec<f64>,
}

/// Metropolis acceptance value for a move from `current` to `neighbour`.
///
/// `1.0` for a strict improvement, `exp((current - neighbour) / T)`
/// otherwise.
pub fn acceptance_probability(current: f64, neighbour: f64, temperature: f64) -> f64 {
    if neighbour < current {
        1.0
    } else {
        ((current - neighbour) / temperature).exp()
    }
}

/// Searches for a low-cost visiting order by simulated annealing.
///
/// Each iteration swaps two distinct random positions of the current
/// route, accepts the result by the Metropolis criterion, keeps track of
/// the best route seen, then cools the temperature geometrically.
///
/// # Examples
///
/// ```
/// use u_geocoord::{Coordinate, RouteOptimizer};
/// use u_geocoord::route::{RouteConfig, TourLength};
///
/// let stops: Vec<Coordinate> = [(0.0, 3.0), (0.0, 1.0), (0.0, 2.0), (0.0, 0.0)]
///     .into_iter()
///     .map(|(lat, lon)| Coordinate::make(lat, lon).unwrap())
///     .collect();
///
/// let optimizer = RouteOptimizer::with_fitness(
///     RouteConfig::default().with_seed(42),
///     TourLength::new(),
/// )
/// .unwrap();
/// let route = optimizer.optimize(&stops).unwrap();
/// assert_eq!(route.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<F = CentroidFitness> {
    config: RouteConfig,
    fitness: F,
}

impl RouteOptimizer<CentroidFitness> {
    /// Creates an optimizer scoring routes by centroid distance.
    pub fn new(config: RouteConfig) -> Result<Self, ConfigError> {
        Self::with_fitness(config, CentroidFitness)
    }
}

impl Default for RouteOptimizer<CentroidFitness> {
    fn default() -> Self {
        Self {
            config: RouteConfig::default(),
            fitness: CentroidFitness,
        }
    }
}

impl<F: RouteFitness> RouteOptimizer<F> {
    /// Creates an optimizer with a custom fitness function.
    pub fn with_fitness(config: RouteConfig, fitness: F) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, fitness })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    /// Returns the best route found over `candidates`.
    pub fn optimize(&self, candidates: &[Coordinate]) -> Result<Route, InsufficientCandidates> {
        Ok(self.optimize_with_stats(candidates)?.best)
    }

    /// Like [`optimize`](Self::optimize), with run statistics.
    ///
    /// Seeds a fresh RNG from the configured seed, or from the thread RNG
    /// when none is set.
    pub fn optimize_with_stats(
        &self,
        candidates: &[Coordinate],
    ) -> Result<RouteResult, InsufficientCandidates> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.optimize_with_rng(candidates, &mut rng)
    }

    /// Runs the search drawing from a caller-owned RNG.
    #[tracing::instrument(level = "debug", skip_all, fields(candidates = candidates.len()))]
    pub fn optimize_with_rng<R: Rng>(
        &self,
        candidates: &[Coordinate],
        rng: &mut R,
    ) -> Result<RouteResult, InsufficientCandidates> {
        if candidates.len() < 2 {
            return Err(InsufficientCandidates {
                found: candidates.len(),
            });
        }

        let config = &self.config;
        let retention = 1.0 - config.cooling_rate;

        let mut current = Route::new(candidates.to_vec()).map_err(|_| InsufficientCandidates {
            found: candidates.len(),
        })?;
        let mut current_fitness = self.fitness.evaluate(&current);
        let initial_fitness = current_fitness;
        let mut best = current.clone();
        let mut best_fitness = current_fitness;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut fitness_history = vec![best_fitness];

        tracing::debug!(temperature, initial_fitness, "route optimization started");

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let neighbour = swap_neighbour(&current, rng);
            let neighbour_fitness = self.fitness.evaluate(&neighbour);

            let accept = if neighbour_fitness < current_fitness {
                improving_moves += 1;
                true
            } else {
                let probability =
                    acceptance_probability(current_fitness, neighbour_fitness, temperature);
                rng.random::<f64>() <= probability
            };

            if accept {
                current = neighbour;
                current_fitness = neighbour_fitness;
                accepted_moves += 1;
            }

            if current_fitness < best_fitness {
                best = current.clone();
                best_fitness = current_fitness;
            }

            iterations += 1;
            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                fitness_history.push(best_fitness);
            }

            temperature *= retention;
        }

        if !iterations.is_multiple_of(HISTORY_INTERVAL) {
            fitness_history.push(best_fitness);
        }

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            best_fitness,
            final_temperature = temperature,
            "route optimization finished"
        );

        Ok(RouteResult {
            best,
            best_fitness,
            initial_fitness,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            fitness_history,
        })
    }
}

/// Swaps two distinct, uniformly chosen positions. `route` needs at least
/// two elements.
fn swap_neighbour<R: Rng>(route: &Route, rng: &mut R) -> Route {
    let len = route.len();
    let first = rng.random_range(0..len);
    let mut second = rng.random_range(0..len - 1);
    if second >= first {
        second += 1;
    }
    route.with_swapped(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::TourLength;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::make(lat, lon).unwrap()
    }

    fn capitals() -> Vec<Coordinate> {
        vec![
            c(39.9075, 116.39723),
            c(48.85341, 2.3488),
            c(45.41117, -75.69812),
            c(-35.28346, 149.12807),
            c(-15.77972, -47.92972),
        ]
    }

    fn default_optimizer() -> RouteOptimizer {
        RouteOptimizer::default()
    }

    fn sorted(mut coords: Vec<Coordinate>) -> Vec<Coordinate> {
        coords.sort_by(|a, b| a.partial_cmp(b).unwrap());
        coords
    }

    #[test]
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(10.0, 5.0, 100.0), 1.0);
        assert_eq!(acceptance_probability(10.0, 10.0, 100.0), 1.0);
        let p = acceptance_probability(10.0, 20.0, 100.0);
        assert!((p - (-0.1f64).exp()).abs() < 1e-12);
        // Colder means less willing to accept the same worsening.
        assert!(acceptance_probability(10.0, 20.0, 1.0) < p);
    }

    #[test]
    fn test_insufficient_candidates() {
        let optimizer: RouteOptimizer = RouteOptimizer::default();
        assert_eq!(
            optimizer.optimize(&[]).unwrap_err(),
            InsufficientCandidates { found: 0 }
        );
        assert_eq!(
            optimizer.optimize(&[c(1.0, 1.0)]).unwrap_err(),
            InsufficientCandidates { found: 1 }
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = RouteConfig::default().with_cooling_rate(0.0);
        assert_eq!(
            RouteOptimizer::new(config).unwrap_err(),
            ConfigError::CoolingRate(0.0)
        );
    }

    #[test]
    fn test_default_schedule_terminates() {
        let optimizer = RouteOptimizer::new(RouteConfig::default().with_seed(42)).unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();

        // ln(1e5) / -ln(0.997) ~= 3832 iterations.
        assert!(
            (3800..3900).contains(&result.iterations),
            "got {} iterations",
            result.iterations
        );
        assert!(result.final_temperature <= 1.0);
        assert!(result.final_temperature > 0.997 - 1e-9);
    }

    #[test]
    fn test_new_rejects_stalled_cooling() {
        let config = RouteConfig::default().with_cooling_rate(1e-17).with_seed(1);
        assert_eq!(
            RouteOptimizer::new(config).unwrap_err(),
            ConfigError::StalledCooling(1e-17)
        );
    }

    #[test]
    fn test_iteration_budget_stops_slow_schedule() {
        let config = RouteConfig::default()
            .with_cooling_rate(f64::EPSILON / 2.0)
            .with_max_iterations(500)
            .with_seed(1);
        let optimizer = RouteOptimizer::new(config).unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert_eq!(result.iterations, 500);
        assert!(result.final_temperature < 100_000.0);
        assert!(result.final_temperature > 1.0);
    }

    #[test]
    fn test_iterations_match_schedule_length() {
        let config = RouteConfig::default().with_cooling_rate(0.05).with_seed(5);
        let expected = config.schedule_length() as usize;
        let optimizer = RouteOptimizer::new(config).unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert_eq!(result.iterations, expected);
    }

    #[test]
    fn test_best_not_worse_than_initial() {
        let candidates = capitals();
        let initial = Route::new(candidates.clone()).unwrap().fitness();
        for seed in 0..5 {
            let optimizer = RouteOptimizer::new(RouteConfig::default().with_seed(seed)).unwrap();
            let result = optimizer.optimize_with_stats(&candidates).unwrap();
            assert_eq!(result.initial_fitness, initial);
            assert!(result.best_fitness <= initial);
            assert_eq!(result.best.fitness(), result.best_fitness);
        }
    }

    #[test]
    fn test_result_is_permutation() {
        let candidates = capitals();
        let route = default_optimizer().optimize(&candidates).unwrap();
        assert_eq!(sorted(route.coordinates().to_vec()), sorted(candidates));
    }

    #[test]
    fn test_two_candidates() {
        let a = c(1.0, 1.0);
        let b = c(2.0, 2.0);
        let route = default_optimizer().optimize(&[a, b]).unwrap();
        assert_eq!(sorted(route.coordinates().to_vec()), vec![a, b]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let optimizer = RouteOptimizer::with_fitness(
            RouteConfig::default().with_seed(7),
            TourLength::new(),
        )
        .unwrap();
        let a = optimizer.optimize_with_stats(&capitals()).unwrap();
        let b = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_caller_owned_rng() {
        let optimizer: RouteOptimizer = RouteOptimizer::default();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = optimizer.optimize_with_rng(&capitals(), &mut rng_a).unwrap();
        let b = optimizer.optimize_with_rng(&capitals(), &mut rng_b).unwrap();
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_tour_length_untangles_line() {
        // Points along the equator, visited out of order.
        let order = [5, 0, 8, 3, 9, 1, 6, 2, 7, 4];
        let candidates: Vec<Coordinate> = order.iter().map(|&i| c(0.0, i as f64)).collect();

        let fitness = TourLength::new();
        let initial = fitness.evaluate(&Route::new(candidates.clone()).unwrap());
        let optimizer = RouteOptimizer::with_fitness(
            RouteConfig::default()
                .with_initial_temperature(1_000_000.0)
                .with_cooling_rate(0.0005)
                .with_seed(42),
            fitness,
        )
        .unwrap();
        let result = optimizer.optimize_with_stats(&candidates).unwrap();

        assert!(result.best_fitness <= initial);
        // The straight sweep is 9 degrees of arc; the start is ~40.
        let one_degree = crate::DistanceEngine::distance(c(0.0, 0.0), c(0.0, 1.0));
        assert!(
            result.best_fitness < 20.0 * one_degree,
            "expected a mostly untangled tour, got {}",
            result.best_fitness / one_degree
        );
        assert!(result.improving_moves > 0);
    }

    #[test]
    fn test_best_fitness_uses_configured_fitness() {
        let fitness = TourLength::new();
        let optimizer = RouteOptimizer::with_fitness(
            RouteConfig::default().with_seed(11),
            fitness,
        )
        .unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert_eq!(result.best_fitness, fitness.evaluate(&result.best));
        assert_ne!(result.best_fitness, result.best.fitness());
    }

    #[test]
    fn test_fitness_history_length() {
        let optimizer = RouteOptimizer::new(RouteConfig::default().with_seed(2)).unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        // Initial entry, one per full interval, and a final partial one.
        assert_eq!(result.iterations, 3832);
        assert_eq!(result.fitness_history.len(), 1 + 3832usize.div_ceil(HISTORY_INTERVAL));

        let optimizer = RouteOptimizer::new(
            RouteConfig::default()
                .with_max_iterations(500)
                .with_seed(2),
        )
        .unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert_eq!(result.fitness_history.len(), 1 + 500 / HISTORY_INTERVAL);
    }

    #[test]
    fn test_fitness_history_non_increasing() {
        let optimizer = RouteOptimizer::with_fitness(
            RouteConfig::default().with_seed(3),
            TourLength::new(),
        )
        .unwrap();
        let result = optimizer.optimize_with_stats(&capitals()).unwrap();
        assert!(result.fitness_history.len() > 1);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best fitness history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_swap_neighbour_picks_distinct_positions() {
        let route = Route::new(vec![c(1.0, 1.0), c(2.0, 2.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let neighbour = swap_neighbour(&route, &mut rng);
            assert_eq!(neighbour.coordinates(), &[c(2.0, 2.0), c(1.0, 1.0)]);
        }
    }
}
