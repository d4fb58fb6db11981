//! Genetic search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the genetic search.
///
/// Defaults match the reference tuning: population 100, 200 generations,
/// mutation rate 0.1, crossover rate 0.8, 10 elites.
///
/// # Examples
///
/// ```
/// use tourseq::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of applying order crossover to a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, the children are parent copies.
    pub crossover_rate: f64,

    /// Number of best individuals copied unchanged into the next generation.
    pub elite_size: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elite_size: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if self.elite_size > self.population_size {
            return Err(format!(
                "elite_size {} exceeds population_size {}",
                self.elite_size, self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_mutation_rate(0.2)
            .with_crossover_rate(0.9)
            .with_elite_size(2)
            .with_seed(7);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 50);
        assert_eq!(config.mutation_rate, 0.2);
        assert_eq!(config.crossover_rate, 0.9);
        assert_eq!(config.elite_size, 2);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_elite() {
        let config = GaConfig::default().with_population_size(5).with_elite_size(6);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_crossover_rate(-0.1).validate().is_err());
    }
}
