//! GA generation step and evolutionary loop.
//!
//! [`evolve`] performs one generation: selection → crossover → mutation →
//! replacement. [`GaRunner`] drives it for a whole run:
//! initialization → decode → evaluate → evolve → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::population::Population;
use super::selection::roulette_select;
use super::types::{Encoding, GeneOf, Problem};
use crate::error::{GaError, Result};
use crate::random::{create_rng, substreams};

/// Produces the next generation from `population` and its `fitness`.
///
/// 1. Roulette-wheel resampling of the whole population.
/// 2. The resampled population is frozen as the mating pool.
/// 3. Every individual is crossed against the frozen pool and then
///    mutated, each with its own random sub-stream.
///
/// There is no elitism: the fittest individual may be lost. The call is a
/// pure function of its arguments and the state of `rng`.
///
/// # Errors
/// Propagates selection errors ([`GaError::AllZeroFitness`],
/// [`GaError::InvalidFitness`], fitness length mismatch) and rejects a
/// population whose chromosome length differs from the encoding's.
pub fn evolve<E: Encoding, R: Rng>(
    encoding: &E,
    population: &Population<E::Gene>,
    fitness: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Population<E::Gene>> {
    if population.dna_size() != encoding.dna_size() {
        return Err(GaError::dimension(
            "chromosome length",
            encoding.dna_size(),
            population.dna_size(),
        ));
    }

    let mut next = roulette_select(population, fitness, rng)?;
    let pool = next.clone();
    let streams = substreams(rng, next.len());

    breed(encoding, next.chromosomes_mut(), streams, &pool, config);
    Ok(next)
}

/// Crossover then mutation for every individual, reading mates from `pool`.
fn breed<E: Encoding>(
    encoding: &E,
    chromosomes: &mut [Vec<E::Gene>],
    streams: Vec<StdRng>,
    pool: &Population<E::Gene>,
    config: &GaConfig,
) {
    let offspring = |chromosome: &mut Vec<E::Gene>, mut stream: StdRng| {
        encoding.crossover(chromosome, pool, config.crossover_rate, &mut stream);
        encoding.mutate(chromosome, config.mutation_rate, &mut stream);
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        chromosomes
            .par_iter_mut()
            .zip(streams)
            .for_each(|(chromosome, stream)| offspring(chromosome, stream));
        return;
    }

    for (chromosome, stream) in chromosomes.iter_mut().zip(streams) {
        offspring(chromosome, stream);
    }
}

/// Fitness summary of one scored generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,

    /// Highest fitness in the generation.
    pub best: f64,

    /// Mean fitness.
    pub mean: f64,

    /// Lowest fitness in the generation.
    pub worst: f64,

    /// Index of the fittest individual.
    pub best_index: usize,
}

impl GenerationStats {
    /// Summarizes a non-empty fitness vector.
    pub fn from_fitness(generation: usize, fitness: &[f64]) -> Self {
        let (best_index, best) = fitness
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, f)| {
                if f > acc.1 {
                    (i, f)
                } else {
                    acc
                }
            });
        let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = if fitness.is_empty() {
            0.0
        } else {
            fitness.iter().sum::<f64>() / fitness.len() as f64
        };
        Self {
            generation,
            best,
            mean,
            worst,
            best_index,
        }
    }
}

/// Result of a GA optimization run.
///
/// Contains the best chromosome seen across all generations, along with
/// statistics about the evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<G> {
    /// The fittest chromosome seen during the run.
    pub best: Vec<G>,

    /// Fitness of `best` (higher is better).
    pub best_fitness: f64,

    /// Generation in which `best` was scored.
    pub best_generation: usize,

    /// Number of generations evolved.
    pub generations: usize,

    /// Whether the run stopped because the best fitness stagnated.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit its wall-clock limit.
    pub timed_out: bool,

    /// Per-generation statistics, starting with the initial population.
    pub history: Vec<GenerationStats>,

    /// The last scored population.
    pub population: Population<G>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{GaConfig, GaRunner};
/// use u_evolve::tsp::{CityTable, TspProblem};
/// use u_evolve::path::Point;
///
/// let cities = CityTable::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]).unwrap();
/// let problem = TspProblem::new(cities).unwrap();
/// let config = GaConfig::tsp()
///     .with_population_size(40)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 4);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<P: Problem>(problem: &P, config: &GaConfig) -> Result<GaResult<GeneOf<P>>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops at
    /// the next generation boundary and returns what it has so far.
    pub fn run_with_cancel<P: Problem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<GeneOf<P>>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        let encoding = problem.encoding();
        let started = Instant::now();

        info!(
            "GA run starting: population={}, dna_size={}, generations={}, seed={}",
            config.population_size,
            encoding.dna_size(),
            config.max_generations,
            seed
        );

        // 1. Initialize and score
        let mut population = Population::random(encoding, config.population_size, &mut rng)?;
        let mut fitness = score(problem, &population)?;

        let stats = GenerationStats::from_fitness(0, &fitness);
        problem.on_generation(&stats);
        let mut history = Vec::with_capacity(config.max_generations.min(4096) + 1);
        history.push(stats);

        let mut best = population[stats.best_index].to_vec();
        let mut best_fitness = stats.best;
        let mut best_generation = 0;

        let mut generations = 0;
        let mut stagnation_counter = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;
        let mut stagnated = false;

        // 2. Evolutionary loop
        for gen in 1..=config.max_generations {
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                warn!("GA run cancelled after {generations} generations");
                break;
            }
            if let Some(limit) = config.time_limit_ms {
                if started.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    warn!("GA run hit its {limit} ms time limit after {generations} generations");
                    break;
                }
            }

            population = evolve(encoding, &population, &fitness, config, &mut rng)?;
            fitness = score(problem, &population)?;
            generations = gen;

            let stats = GenerationStats::from_fitness(gen, &fitness);
            debug!(
                "generation {}: best={:.6}, mean={:.6}, worst={:.6}",
                gen, stats.best, stats.mean, stats.worst
            );

            if stats.best > best_fitness {
                best = population[stats.best_index].to_vec();
                best_fitness = stats.best;
                best_generation = gen;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            history.push(stats);
            problem.on_generation(&stats);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                warn!("GA run stagnated after {gen} generations");
                break;
            }
        }

        info!(
            "GA run finished: generations={}, best_fitness={:.6} (generation {}), elapsed={:?}",
            generations,
            best_fitness,
            best_generation,
            started.elapsed()
        );

        Ok(GaResult {
            best,
            best_fitness,
            best_generation,
            generations,
            stagnated,
            cancelled,
            timed_out,
            history,
            population,
        })
    }
}

/// Decodes and evaluates a population, checking the fitness length.
fn score<P: Problem>(problem: &P, population: &Population<GeneOf<P>>) -> Result<Vec<f64>> {
    let phenotype = problem.decode(population)?;
    let fitness = problem.evaluate(&phenotype)?;
    if fitness.len() != population.len() {
        return Err(GaError::dimension(
            "fitness vector",
            population.len(),
            fitness.len(),
        ));
    }
    Ok(fitness)
}

// ============================================================================
// Tests
// ============================================================================
