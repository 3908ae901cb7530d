//! Core trait definitions for the GA engine.
//!
//! [`Encoding`] captures everything that depends on the genotype kind
//! (initialization, recombination, mutation, legality). [`Problem`] adds
//! the phenotype side: decoding a whole population and scoring it. Both
//! are picked once, at construction time, by choosing concrete types.

use rand::Rng;

use super::operators::uniform_mask;
use super::population::Population;
use super::runner::GenerationStats;
use crate::error::Result;

/// A chromosome encoding: the shape and legality of an individual.
///
/// Implementations must keep every chromosome legal through
/// [`recombine`](Encoding::recombine) and [`mutate`](Encoding::mutate);
/// the evolution loop never repairs offspring after the fact.
pub trait Encoding: Send + Sync {
    /// Gene value type.
    type Gene: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static;

    /// Number of genes per chromosome.
    fn dna_size(&self) -> usize;

    /// Creates a uniformly random legal chromosome.
    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Vec<Self::Gene>;

    /// Recombines `parent` with `mate` in place, guided by a locus mask.
    ///
    /// The meaning of a `true` mask entry is encoding-specific.
    fn recombine(&self, parent: &mut [Self::Gene], mate: &[Self::Gene], mask: &[bool]);

    /// Applies per-locus mutation in place.
    fn mutate<R: Rng>(&self, chromosome: &mut [Self::Gene], mutation_rate: f64, rng: &mut R);

    /// Checks that `chromosome` (the `index`-th of its population) is legal.
    fn check(&self, index: usize, chromosome: &[Self::Gene]) -> Result<()>;

    /// Crossover against a frozen mating pool.
    ///
    /// With probability `crossover_rate` a mate is drawn uniformly from
    /// `pool` and [`recombine`](Encoding::recombine) is applied with a
    /// fresh uniform mask. Otherwise `parent` is left untouched.
    fn crossover<R: Rng>(
        &self,
        parent: &mut [Self::Gene],
        pool: &Population<Self::Gene>,
        crossover_rate: f64,
        rng: &mut R,
    ) {
        if pool.is_empty() || rng.random::<f64>() >= crossover_rate {
            return;
        }
        let mate = &pool[rng.random_range(0..pool.len())];
        let mask = uniform_mask(parent.len(), rng);
        self.recombine(parent, mate, &mask);
    }
}

/// Gene type of a problem's encoding.
pub type GeneOf<P> = <<P as Problem>::Encoding as Encoding>::Gene;

/// An optimization problem bound to one encoding.
///
/// Decoding and evaluation are batched over the whole population because
/// selection normalizes against the full fitness vector.
///
/// Fitness is **maximized** and must be non-negative.
pub trait Problem: Send + Sync {
    /// The chromosome encoding this problem uses.
    type Encoding: Encoding;

    /// Decoded form of a whole population.
    type Phenotype;

    /// Returns the encoding.
    fn encoding(&self) -> &Self::Encoding;

    /// Decodes every chromosome of `population`.
    fn decode(&self, population: &Population<GeneOf<Self>>) -> Result<Self::Phenotype>;

    /// Scores a decoded population, one value per individual.
    fn evaluate(&self, phenotype: &Self::Phenotype) -> Result<Vec<f64>>;

    /// Called after each generation has been scored.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
