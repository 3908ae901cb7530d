//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{GaError, Result};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, termination conditions,
/// and parallelism.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed for the whole run.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability that an individual is recombined with a mate (0.0–1.0).
    ///
    /// When crossover is not applied, the individual passes through to
    /// mutation unchanged.
    pub crossover_rate: f64,

    /// Per-locus mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations without a new best-ever fitness before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Whether to run per-individual work on rayon's pool.
    ///
    /// Only has an effect when the `parallel` feature is enabled. Results
    /// are identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at generation boundaries only, so the actual runtime may
    /// exceed this by one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            stagnation_limit: 0,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-locus mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel per-individual work.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset tuned for obstacle-avoiding path planning.
    ///
    /// - Population: 100, Generations: 100
    /// - Crossover: 0.8, Mutation: 0.0001 per locus
    pub fn path_planning() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.0001,
            ..Self::default()
        }
    }

    /// Preset tuned for the travelling-salesman problem.
    ///
    /// - Population: 500, Generations: 500
    /// - Crossover: 0.1, Mutation: 0.02 per locus
    pub fn tsp() -> Self {
        Self {
            population_size: 500,
            max_generations: 500,
            crossover_rate: 0.1,
            mutation_rate: 0.02,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::InvalidConfig(
                "crossover_rate must lie in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(
                "mutation_rate must lie in [0, 1]".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(GaError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
