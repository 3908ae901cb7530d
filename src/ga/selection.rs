//! Fitness-proportionate (roulette-wheel) selection.
//!
//! The whole population is resampled at once, with replacement, with the
//! probability of index `i` equal to `fitness[i] / sum(fitness)`.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, §1.4
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::population::Population;
use crate::error::{GaError, Result};

/// Draws `count` indices in `0..fitness.len()` proportionally to fitness.
///
/// # Errors
/// - [`GaError::DimensionMismatch`] if `fitness` is empty
/// - [`GaError::InvalidFitness`] if any entry is negative or non-finite,
///   or the sum overflows
/// - [`GaError::AllZeroFitness`] if the entries sum to zero
///
/// # Complexity
/// O(n + count · log n)
pub fn roulette_indices<R: Rng>(fitness: &[f64], count: usize, rng: &mut R) -> Result<Vec<usize>> {
    let cumulative = cumulative_weights(fitness)?;
    let n = cumulative.len();
    let total = cumulative[n - 1];

    let indices = (0..count)
        .map(|_| {
            let threshold = rng.random::<f64>() * total;
            // first slot whose running total exceeds the threshold;
            // zero-weight slots never satisfy this
            cumulative.partition_point(|&c| c <= threshold).min(n - 1)
        })
        .collect();
    Ok(indices)
}

/// Resamples `population` by fitness share, preserving its size.
///
/// Individuals may be picked zero, one, or several times.
pub fn roulette_select<G: Copy, R: Rng>(
    population: &Population<G>,
    fitness: &[f64],
    rng: &mut R,
) -> Result<Population<G>> {
    if fitness.len() != population.len() {
        return Err(GaError::dimension(
            "fitness vector",
            population.len(),
            fitness.len(),
        ));
    }
    let indices = roulette_indices(fitness, population.len(), rng)?;
    Ok(population.pick(&indices))
}

/// Running totals of `fitness`, validated for proportional sampling.
fn cumulative_weights(fitness: &[f64]) -> Result<Vec<f64>> {
    if fitness.is_empty() {
        return Err(GaError::dimension("fitness vector", 1, 0));
    }

    let mut cumulative = Vec::with_capacity(fitness.len());
    let mut total = 0.0;
    for (index, &value) in fitness.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(GaError::InvalidFitness { index, value });
        }
        total += value;
        cumulative.push(total);
    }

    if !total.is_finite() {
        return Err(GaError::InvalidFitness {
            index: fitness.len() - 1,
            value: total,
        });
    }
    if total <= 0.0 {
        return Err(GaError::AllZeroFitness);
    }
    Ok(cumulative)
}
