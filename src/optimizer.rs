//! Orchestration façade wiring locations, distance table, and evaluator
//! into the two search procedures.

use crate::distance::{DistanceFormula, DistanceMatrix};
use crate::evaluation::ScheduleEvaluator;
use crate::ga::{GaConfig, GaRunner};
use crate::models::{Location, RouteSolution, TimeOfDay};
use crate::sa::{SaConfig, SaRunner};

/// Search procedure selection with its parameter record.
///
/// A tagged variant instead of an algorithm-name string: the set of
/// algorithms is checked at compile time and there is no unknown-algorithm
/// error path.
#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Population-based genetic search.
    Genetic(GaConfig),
    /// Single-trajectory annealing search.
    Annealing(SaConfig),
}

/// Route optimization context: owns the location list and the precomputed
/// all-pairs distance table, and dispatches to the search procedures.
///
/// # Examples
///
/// ```
/// use tourseq::distance::DistanceFormula;
/// use tourseq::ga::GaConfig;
/// use tourseq::models::{Location, TimeOfDay};
/// use tourseq::optimizer::{Algorithm, RouteOptimizer};
///
/// let locations = vec![
///     Location::new(0, "A", 31.2397, 121.4900),
///     Location::new(1, "B", 31.2272, 121.4921),
///     Location::new(2, "C", 31.2235, 121.4454),
/// ];
/// let start = TimeOfDay::new(9, 0).unwrap();
/// let optimizer = RouteOptimizer::new(locations, 30.0, start, DistanceFormula::GreatCircle);
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(20)
///     .with_elite_size(2)
///     .with_seed(42);
/// let best = optimizer.optimize(Algorithm::Genetic(config));
/// assert_eq!(best.route.len(), 3);
/// ```
pub struct RouteOptimizer {
    locations: Vec<Location>,
    matrix: DistanceMatrix,
    avg_speed_kmh: f64,
    start: TimeOfDay,
}

impl RouteOptimizer {
    /// Builds the optimization context, precomputing the distance table.
    pub fn new(
        locations: Vec<Location>,
        avg_speed_kmh: f64,
        start: TimeOfDay,
        formula: DistanceFormula,
    ) -> Self {
        let matrix = DistanceMatrix::from_locations(&locations, formula);
        Self {
            locations,
            matrix,
            avg_speed_kmh,
            start,
        }
    }

    /// Runs the selected search procedure and returns its best solution.
    pub fn optimize(&self, algorithm: Algorithm) -> RouteSolution {
        match algorithm {
            Algorithm::Genetic(config) => self.optimize_genetic(&config),
            Algorithm::Annealing(config) => self.optimize_annealing(&config),
        }
    }

    /// Runs the genetic search.
    pub fn optimize_genetic(&self, config: &GaConfig) -> RouteSolution {
        GaRunner::run(&self.evaluator(), config).best
    }

    /// Runs the annealing search.
    pub fn optimize_annealing(&self, config: &SaConfig) -> RouteSolution {
        SaRunner::run(&self.evaluator(), config).best
    }

    /// Scores an externally supplied visiting order.
    pub fn evaluate(&self, route: &[usize]) -> RouteSolution {
        self.evaluator().evaluate(route)
    }

    /// The locations this context was built from.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The precomputed all-pairs distance table.
    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    fn evaluator(&self) -> ScheduleEvaluator<'_> {
        ScheduleEvaluator::new(&self.locations, &self.matrix, self.avg_speed_kmh, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;

    fn t(h: u8, m: u8) -> TimeOfDay {
        TimeOfDay::new(h, m).expect("valid time")
    }

    fn city_walk() -> RouteOptimizer {
        let locations = vec![
            Location::new(0, "Bund", 31.2397, 121.4900).with_stay_duration(30),
            Location::new(1, "Yu Garden", 31.2272, 121.4921).with_stay_duration(45),
            Location::new(2, "Jing'an Temple", 31.2235, 121.4454).with_stay_duration(30),
            Location::new(3, "Lujiazui", 31.2397, 121.5000).with_stay_duration(60),
        ];
        RouteOptimizer::new(locations, 30.0, t(9, 0), DistanceFormula::GreatCircle)
    }

    #[test]
    fn test_genetic_end_to_end() {
        let optimizer = city_walk();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(20)
            .with_elite_size(2)
            .with_seed(42);

        let best = optimizer.optimize(Algorithm::Genetic(config));
        assert_eq!(best.violations, 0);
        // Zero violations force fitness == total_distance exactly.
        assert_eq!(best.fitness, best.total_distance);
        assert_eq!(best.arrival_times.len(), 4);
    }

    #[test]
    fn test_annealing_end_to_end() {
        let optimizer = city_walk();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_cooling_rate(0.9)
            .with_min_temperature(0.1)
            .with_iterations_per_temperature(50)
            .with_seed(42);

        let best = optimizer.optimize(Algorithm::Annealing(config));
        assert_eq!(best.violations, 0);
        assert_eq!(best.fitness, best.total_distance);
    }

    #[test]
    fn test_evaluate_external_route() {
        let optimizer = city_walk();
        let sol = optimizer.evaluate(&[3, 0, 1, 2]);
        assert_eq!(sol.route, vec![3, 0, 1, 2]);
        assert_eq!(sol.arrival_times.len(), 4);
        assert!(sol.total_distance > 0.0);
    }

    #[test]
    fn test_evaluate_empty_route() {
        let optimizer = city_walk();
        let sol = optimizer.evaluate(&[]);
        assert_eq!(sol.total_distance, 0.0);
        assert_eq!(sol.violations, 0);
        assert!(sol.fitness.is_infinite());
    }

    #[test]
    fn test_windowed_stop_changes_score() {
        // A stop that only opens in the afternoon forces either a wait with
        // a violation or a longer route; the optimizer still returns a full
        // permutation either way.
        let afternoon = TimeWindow::new(t(14, 0), t(18, 0)).expect("valid");
        let locations = vec![
            Location::new(0, "Morning stop", 31.24, 121.49),
            Location::new(1, "Afternoon-only", 31.22, 121.45).with_window(afternoon),
        ];
        let optimizer =
            RouteOptimizer::new(locations, 30.0, t(9, 0), DistanceFormula::GridApproximation);

        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(10)
            .with_elite_size(1)
            .with_seed(8);
        let best = optimizer.optimize(Algorithm::Genetic(config));
        let mut sorted = best.route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1]);
    }

    #[test]
    fn test_locations_and_matrix_accessors() {
        let optimizer = city_walk();
        assert_eq!(optimizer.locations().len(), 4);
        assert_eq!(optimizer.distance_matrix().size(), 4);
        assert!(optimizer.distance_matrix().is_symmetric(1e-9));
    }
}
