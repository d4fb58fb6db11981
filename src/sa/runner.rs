//! Annealing execution loop.

use super::config::SaConfig;
use crate::evaluation::ScheduleEvaluator;
use crate::ga::operators::{random_permutation, swap_mutation};
use crate::models::RouteSolution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Interval between progress events, in temperature steps.
const PROGRESS_INTERVAL: usize = 10;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best solution observed across the full temperature schedule.
    pub best: RouteSolution,

    /// Total neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted moves, improving ones included.
    pub accepted_moves: usize,

    /// Strictly improving accepted moves.
    pub improving_moves: usize,

    /// Incumbent fitness after initialization and after each temperature
    /// step. Non-increasing by construction.
    pub fitness_history: Vec<f64>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the annealing search.
pub struct SaRunner;

impl SaRunner {
    /// Runs the annealing search against the given evaluator.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(evaluator: &ScheduleEvaluator<'_>, config: &SaConfig) -> SaResult {
        Self::run_with_cancel(evaluator, config, None)
    }

    /// Runs the annealing search with an optional cancellation token.
    ///
    /// When the flag is set the loop stops at the next temperature step and
    /// returns the best solution found so far.
    pub fn run_with_cancel(
        evaluator: &ScheduleEvaluator<'_>,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = evaluator.num_locations();
        let mut current_route = random_permutation(n, &mut rng);
        let mut current = evaluator.evaluate(&current_route);
        let mut best = current.clone();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut steps = 0usize;
        let mut cancelled = false;
        let mut fitness_history = vec![best.fitness];

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..config.iterations_per_temperature {
                let mut neighbor_route = current_route.clone();
                swap_mutation(&mut neighbor_route, &mut rng);
                let neighbor = evaluator.evaluate(&neighbor_route);

                let improving = neighbor.fitness < current.fitness;
                let probability = if improving {
                    1.0
                } else {
                    (-(neighbor.fitness - current.fitness) / temperature).exp()
                };

                // One uniform draw per decision, improving moves included,
                // so a fixed seed replays the exact decision sequence.
                if probability > rng.random_range(0.0..1.0) {
                    if improving {
                        improving_moves += 1;
                    }
                    current_route = neighbor_route;
                    current = neighbor;
                    accepted_moves += 1;
                }

                if current.fitness < best.fitness {
                    best = current.clone();
                }

                iterations += 1;
            }

            temperature *= config.cooling_rate;
            steps += 1;
            fitness_history.push(best.fitness);

            if steps % PROGRESS_INTERVAL == 0 {
                debug!(
                    temperature,
                    best_fitness = best.fitness,
                    violations = best.violations,
                    "annealing progress"
                );
            }
        }

        SaResult {
            best,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            fitness_history,
            cancelled,
        }
    }
}
