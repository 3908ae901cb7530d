//! Fixed-size population of chromosomes.

use std::ops::Index;

use rand::Rng;

use super::types::Encoding;
use crate::error::{GaError, Result};

/// An ordered collection of equal-length chromosomes.
///
/// Duplicates are allowed. The chromosome length is fixed at construction
/// and every constructor enforces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population<G> {
    chromosomes: Vec<Vec<G>>,
    dna_size: usize,
}

impl<G: Copy> Population<G> {
    /// Creates `size` uniformly random individuals of `encoding`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_evolve::ga::{Encoding, PermutationEncoding, Population};
    /// use u_evolve::random::create_rng;
    ///
    /// let encoding = PermutationEncoding::new(5).unwrap();
    /// let mut rng = create_rng(1);
    /// let pop = Population::random(&encoding, 10, &mut rng).unwrap();
    /// assert_eq!(pop.len(), 10);
    /// assert_eq!(pop.dna_size(), 5);
    /// ```
    pub fn random<E, R>(encoding: &E, size: usize, rng: &mut R) -> Result<Self>
    where
        E: Encoding<Gene = G>,
        R: Rng,
    {
        if size == 0 {
            return Err(GaError::InvalidConfig(
                "population size must be at least 1".into(),
            ));
        }
        let chromosomes = (0..size)
            .map(|_| encoding.random_chromosome(rng))
            .collect();
        Ok(Self {
            chromosomes,
            dna_size: encoding.dna_size(),
        })
    }

    /// Wraps existing chromosomes, checking that each has `dna_size` genes.
    pub fn from_chromosomes(chromosomes: Vec<Vec<G>>, dna_size: usize) -> Result<Self> {
        if chromosomes.is_empty() {
            return Err(GaError::InvalidConfig(
                "population size must be at least 1".into(),
            ));
        }
        if let Some(bad) = chromosomes.iter().find(|c| c.len() != dna_size) {
            return Err(GaError::dimension("chromosome length", dna_size, bad.len()));
        }
        Ok(Self {
            chromosomes,
            dna_size,
        })
    }

    /// Builds a new population by picking individuals at `indices`.
    ///
    /// # Panics
    /// Panics if any index is out of range.
    pub(crate) fn pick(&self, indices: &[usize]) -> Self {
        Self {
            chromosomes: indices.iter().map(|&i| self.chromosomes[i].clone()).collect(),
            dna_size: self.dna_size,
        }
    }

    /// Verifies every individual against `encoding`'s legality rules.
    pub fn check<E: Encoding<Gene = G>>(&self, encoding: &E) -> Result<()> {
        if self.dna_size != encoding.dna_size() {
            return Err(GaError::dimension(
                "chromosome length",
                encoding.dna_size(),
                self.dna_size,
            ));
        }
        self.chromosomes
            .iter()
            .enumerate()
            .try_for_each(|(i, c)| encoding.check(i, c))
    }
}

impl<G> Population<G> {
    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Always `false` for populations built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Genes per chromosome.
    pub fn dna_size(&self) -> usize {
        self.dna_size
    }

    /// Returns the `i`-th chromosome, if any.
    pub fn get(&self, i: usize) -> Option<&[G]> {
        self.chromosomes.get(i).map(Vec::as_slice)
    }

    /// Iterates over the chromosomes in order.
    pub fn iter(&self) -> impl Iterator<Item = &[G]> {
        self.chromosomes.iter().map(Vec::as_slice)
    }

    /// Borrows the chromosomes.
    pub fn chromosomes(&self) -> &[Vec<G>] {
        &self.chromosomes
    }

    /// Consumes the population, returning its chromosomes.
    pub fn into_chromosomes(self) -> Vec<Vec<G>> {
        self.chromosomes
    }

    /// Mutable access for in-place breeding. Lengths must not change.
    pub(crate) fn chromosomes_mut(&mut self) -> &mut [Vec<G>] {
        &mut self.chromosomes
    }
}

impl<G> Index<usize> for Population<G> {
    type Output = [G];

    fn index(&self, i: usize) -> &[G] {
        &self.chromosomes[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GeneBounds, PermutationEncoding, StepEncoding};
    use crate::random::create_rng;

    #[test]
    fn test_random_step_population_in_bounds() {
        let bounds = GeneBounds::new(-3, 4).unwrap();
        let encoding = StepEncoding::new(12, bounds).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::random(&encoding, 50, &mut rng).unwrap();

        assert_eq!(pop.len(), 50);
        assert_eq!(pop.dna_size(), 12);
        assert!(pop.check(&encoding).is_ok());
        assert!(pop.iter().flatten().all(|&g| (-3..4).contains(&g)));
    }

    #[test]
    fn test_random_permutation_population_valid() {
        let encoding = PermutationEncoding::new(9).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::random(&encoding, 30, &mut rng).unwrap();
        assert!(pop.check(&encoding).is_ok());
    }

    #[test]
    fn test_random_permutations_not_all_identical() {
        let encoding = PermutationEncoding::new(10).unwrap();
        let mut rng = create_rng(5);
        let pop = Population::random(&encoding, 20, &mut rng).unwrap();
        assert!(pop.iter().any(|c| c != &pop[0]));
    }

    #[test]
    fn test_zero_size_rejected() {
        let encoding = PermutationEncoding::new(4).unwrap();
        let mut rng = create_rng(1);
        assert!(Population::random(&encoding, 0, &mut rng).is_err());
    }

    #[test]
    fn test_from_chromosomes_length_mismatch() {
        let err = Population::from_chromosomes(vec![vec![0, 1, 2], vec![0, 1]], 3).unwrap_err();
        assert_eq!(err, GaError::dimension("chromosome length", 3, 2));
    }

    #[test]
    fn test_check_detects_bad_permutation() {
        let encoding = PermutationEncoding::new(3).unwrap();
        let pop = Population::from_chromosomes(vec![vec![0, 1, 2], vec![0, 0, 2]], 3).unwrap();
        assert_eq!(
            pop.check(&encoding),
            Err(GaError::InvalidPermutation { index: 1 })
        );
    }

    #[test]
    fn test_check_detects_dna_size_mismatch() {
        let encoding = PermutationEncoding::new(4).unwrap();
        let pop = Population::from_chromosomes(vec![vec![0, 1, 2]], 3).unwrap();
        assert!(matches!(
            pop.check(&encoding),
            Err(GaError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_pick_duplicates() {
        let pop = Population::from_chromosomes(vec![vec![1, 1], vec![2, 2]], 2).unwrap();
        let picked = pop.pick(&[1, 1, 0]);
        assert_eq!(picked.len(), 3);
        assert_eq!(&picked[0], &[2, 2]);
        assert_eq!(&picked[1], &[2, 2]);
        assert_eq!(&picked[2], &[1, 1]);
    }
}
