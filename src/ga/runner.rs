//! Genetic search execution loop.
//!
//! initialization → ranking → elitism → selection → crossover → mutation,
//! repeated for a fixed generation budget while tracking the best solution
//! ever observed.

use super::config::GaConfig;
use super::operators::{order_crossover, random_permutation, roulette_select, swap_mutation};
use crate::evaluation::ScheduleEvaluator;
use crate::models::RouteSolution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Interval between progress events, in generations.
const PROGRESS_INTERVAL: usize = 10;

/// Result of a genetic search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best solution observed across all generations, including the
    /// initial population.
    pub best: RouteSolution,

    /// Number of generations executed.
    pub generations: usize,

    /// Incumbent fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the genetic search.
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic search against the given evaluator.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(evaluator: &ScheduleEvaluator<'_>, config: &GaConfig) -> GaResult {
        Self::run_with_cancel(evaluator, config, None)
    }

    /// Runs the genetic search with an optional cancellation token.
    ///
    /// When the flag is set the loop stops at the next generation boundary
    /// and returns the best solution found so far.
    pub fn run_with_cancel(
        evaluator: &ScheduleEvaluator<'_>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = evaluator.num_locations();
        let population: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_permutation(n, &mut rng))
            .collect();
        let mut ranked = rank(evaluator, population);

        let mut best = evaluator.evaluate(&ranked[0].1);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best.fitness);

        let mut cancelled = false;
        let mut executed = 0;

        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let next_gen = breed(&ranked, config, &mut rng);
            ranked = rank(evaluator, next_gen);
            executed = gen + 1;

            if ranked[0].0 < best.fitness {
                best = evaluator.evaluate(&ranked[0].1);
            }
            fitness_history.push(best.fitness);

            if executed % PROGRESS_INTERVAL == 0 {
                debug!(
                    generation = executed,
                    best_fitness = best.fitness,
                    violations = best.violations,
                    "genetic search progress"
                );
            }
        }

        GaResult {
            best,
            generations: executed,
            fitness_history,
            cancelled,
        }
    }
}

/// Evaluates a population and sorts it by ascending fitness.
fn rank(evaluator: &ScheduleEvaluator<'_>, population: Vec<Vec<usize>>) -> Vec<(f64, Vec<usize>)> {
    let mut ranked: Vec<(f64, Vec<usize>)> = population
        .into_iter()
        .map(|route| (evaluator.evaluate(&route).fitness, route))
        .collect();
    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Produces the next generation: elites copied unchanged, then offspring
/// from roulette selection, order crossover, and swap mutation until the
/// population is full. A trailing odd offspring is discarded.
fn breed<R: Rng>(ranked: &[(f64, Vec<usize>)], config: &GaConfig, rng: &mut R) -> Vec<Vec<usize>> {
    let fitnesses: Vec<f64> = ranked.iter().map(|(f, _)| *f).collect();

    let mut next_gen: Vec<Vec<usize>> = ranked[..config.elite_size]
        .iter()
        .map(|(_, route)| route.clone())
        .collect();

    while next_gen.len() < config.population_size {
        let p1 = &ranked[roulette_select(&fitnesses, rng)].1;
        let p2 = &ranked[roulette_select(&fitnesses, rng)].1;

        let (mut child1, mut child2) = if rng.random_range(0.0..1.0) < config.crossover_rate {
            order_crossover(p1, p2, rng)
        } else {
            (p1.clone(), p2.clone())
        };

        if rng.random_range(0.0..1.0) < config.mutation_rate {
            swap_mutation(&mut child1, rng);
        }
        next_gen.push(child1);

        if next_gen.len() < config.population_size {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(&mut child2, rng);
            }
            next_gen.push(child2);
        }
    }

    next_gen
}
