//! Concrete chromosome encodings.
//!
//! - [`StepEncoding`]: integer genes in `[low, high)`, decoded as signed steps
//! - [`PermutationEncoding`]: each chromosome is a permutation of `0..n`

use rand::seq::SliceRandom;
use rand::Rng;

use super::operators::{
    is_valid_permutation, keep_and_fill_crossover, overwrite_crossover, point_mutation,
    swap_mutation,
};
use super::types::Encoding;
use crate::error::{GaError, Result};

/// Half-open integer gene range `[low, high)`.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GeneBounds;
///
/// let b = GeneBounds::new(0, 2).unwrap();
/// assert!(b.contains(1));
/// assert!(!b.contains(2));
/// assert!(GeneBounds::new(2, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawBounds")
)]
pub struct GeneBounds {
    low: i32,
    high: i32,
}

/// Unchecked wire form of [`GeneBounds`]; deserialization goes through
/// [`GeneBounds::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    low: i32,
    high: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for GeneBounds {
    type Error = GaError;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.low, raw.high)
    }
}

impl GeneBounds {
    /// Creates bounds; fails unless `low < high`.
    pub fn new(low: i32, high: i32) -> Result<Self> {
        if low >= high {
            return Err(GaError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// Creates bounds from an inclusive range `[low, high]`.
    pub fn inclusive(low: i32, high: i32) -> Result<Self> {
        let high = high
            .checked_add(1)
            .ok_or(GaError::InvalidBounds { low, high })?;
        Self::new(low, high)
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Exclusive upper bound.
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Returns `true` if `gene` lies in `[low, high)`.
    pub fn contains(&self, gene: i32) -> bool {
        gene >= self.low && gene < self.high
    }

    /// Draws a gene uniformly from `[low, high)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.low..self.high)
    }
}

/// Continuous-step genotype used for path planning.
///
/// Genes are independent integers in `[low, high)`. Crossover overwrites
/// masked loci with the mate's genes; mutation resamples single loci.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEncoding {
    dna_size: usize,
    bounds: GeneBounds,
}

impl StepEncoding {
    /// Creates a step encoding with `dna_size ≥ 1` genes.
    pub fn new(dna_size: usize, bounds: GeneBounds) -> Result<Self> {
        if dna_size == 0 {
            return Err(GaError::InvalidConfig("dna_size must be at least 1".into()));
        }
        Ok(Self { dna_size, bounds })
    }

    /// Gene bounds.
    pub fn bounds(&self) -> GeneBounds {
        self.bounds
    }
}

impl Encoding for StepEncoding {
    type Gene = i32;

    fn dna_size(&self) -> usize {
        self.dna_size
    }

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Vec<i32> {
        (0..self.dna_size).map(|_| self.bounds.sample(rng)).collect()
    }

    fn recombine(&self, parent: &mut [i32], mate: &[i32], mask: &[bool]) {
        overwrite_crossover(parent, mate, mask);
    }

    fn mutate<R: Rng>(&self, chromosome: &mut [i32], mutation_rate: f64, rng: &mut R) {
        point_mutation(chromosome, self.bounds, mutation_rate, rng);
    }

    fn check(&self, index: usize, chromosome: &[i32]) -> Result<()> {
        if chromosome.len() != self.dna_size {
            return Err(GaError::dimension(
                "chromosome length",
                self.dna_size,
                chromosome.len(),
            ));
        }
        match chromosome
            .iter()
            .position(|&g| !self.bounds.contains(g))
        {
            Some(locus) => Err(GaError::GeneOutOfBounds {
                index,
                locus,
                gene: chromosome[locus],
                low: self.bounds.low,
                high: self.bounds.high,
            }),
            None => Ok(()),
        }
    }
}

/// Permutation genotype used for the travelling-salesman problem.
///
/// Every chromosome is a permutation of `0..dna_size`, before and after
/// every operator. Crossover is the keep-and-fill repair crossover;
/// mutation is per-locus transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermutationEncoding {
    dna_size: usize,
}

impl PermutationEncoding {
    /// Creates a permutation encoding over `dna_size ≥ 1` elements.
    pub fn new(dna_size: usize) -> Result<Self> {
        if dna_size == 0 {
            return Err(GaError::InvalidConfig("dna_size must be at least 1".into()));
        }
        Ok(Self { dna_size })
    }
}

impl Encoding for PermutationEncoding {
    type Gene = usize;

    fn dna_size(&self) -> usize {
        self.dna_size
    }

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..self.dna_size).collect();
        perm.shuffle(rng);
        perm
    }

    fn recombine(&self, parent: &mut [usize], mate: &[usize], mask: &[bool]) {
        keep_and_fill_crossover(parent, mate, mask);
    }

    fn mutate<R: Rng>(&self, chromosome: &mut [usize], mutation_rate: f64, rng: &mut R) {
        swap_mutation(chromosome, mutation_rate, rng);
    }

    fn check(&self, index: usize, chromosome: &[usize]) -> Result<()> {
        if is_valid_permutation(chromosome, self.dna_size) {
            Ok(())
        } else {
            Err(GaError::InvalidPermutation { index })
        }
    }
}
