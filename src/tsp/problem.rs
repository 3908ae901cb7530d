//! Tour decoding, tour fitness, and the TSP [`Problem`].

use super::cities::CityTable;
use crate::error::{GaError, Result};
use crate::ga::{PermutationEncoding, Population, Problem};
use crate::phenotype::Lines;

/// Decodes permutations into city coordinates in visiting order.
///
/// Each output row has one point per city; the start city is not repeated
/// at the end.
///
/// # Errors
/// - [`GaError::DimensionMismatch`] if the chromosome length differs from
///   the number of cities
/// - [`GaError::InvalidPermutation`] if a gene names a city that does not
///   exist
pub fn decode_tours(population: &Population<usize>, cities: &CityTable) -> Result<Lines> {
    if population.dna_size() != cities.len() {
        return Err(GaError::dimension(
            "chromosome length",
            cities.len(),
            population.dna_size(),
        ));
    }

    let mut xs = Vec::with_capacity(population.len());
    let mut ys = Vec::with_capacity(population.len());
    for (index, tour) in population.iter().enumerate() {
        let (x, y): (Vec<f64>, Vec<f64>) = tour
            .iter()
            .map(|&city| cities.get(city).map(|p| (p.x, p.y)))
            .collect::<Option<Vec<_>>>()
            .ok_or(GaError::InvalidPermutation { index })?
            .into_iter()
            .unzip();
        xs.push(x);
        ys.push(y);
    }
    Lines::new(xs, ys)
}

/// Open tour length of every row: the sum of distances between consecutive
/// points, without the closing edge back to the first city. A single-city
/// tour has length `0.0`.
pub fn tour_lengths(lines: &Lines) -> Vec<f64> {
    lines
        .iter()
        .map(|(xs, ys)| {
            xs.windows(2)
                .zip(ys.windows(2))
                .map(|(x, y)| (x[1] - x[0]).hypot(y[1] - y[0]))
                .fold(0.0, |acc, d| acc + d)
        })
        .collect()
}

/// Largest fitness exponent for a batch of `count` tours, chosen so the
/// batch total stays below `f64::MAX`.
fn exponent_cap(count: usize) -> f64 {
    f64::MAX.ln() - (count.max(1) as f64).ln() - 1.0
}

/// Scores decoded tours: fitness is `exp(scale / length)`.
///
/// Returns `(fitness, lengths)`. Fitness is finite, strictly positive and
/// non-increasing in tour length. The exponent is capped so the batch sum
/// stays finite; zero-length tours (one city, or all cities on one point)
/// and tours short enough to hit the cap all score `exp(cap)`.
pub fn tour_fitness(lines: &Lines, scale: f64) -> (Vec<f64>, Vec<f64>) {
    let lengths = tour_lengths(lines);
    let cap = exponent_cap(lengths.len());
    let fitness = lengths
        .iter()
        .map(|&len| {
            let exponent = if len > 0.0 {
                (scale / len).min(cap)
            } else {
                cap
            };
            exponent.exp()
        })
        .collect();
    (fitness, lengths)
}

/// Travelling-salesman problem over a fixed [`CityTable`].
///
/// The fitness exponent scale defaults to `2 * n_cities`. With closely
/// spaced cities `scale / length` grows large and fitness saturates at the
/// cap described on [`tour_fitness`], flattening selection pressure among
/// the shortest tours; rescale coordinates or use [`TspProblem::with_scale`]
/// for such instances.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Problem;
/// use u_evolve::tsp::{CityTable, TspProblem};
///
/// let cities = CityTable::from_rows(&[
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
///     vec![1.0, 0.0],
/// ]).unwrap();
/// let problem = TspProblem::new(cities).unwrap();
/// assert_eq!(problem.scale(), 8.0);
/// assert!((problem.tour_length(&[0, 1, 2, 3]).unwrap() - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspProblem {
    encoding: PermutationEncoding,
    cities: CityTable,
    scale: f64,
}

impl TspProblem {
    /// Creates a problem with the default fitness scale.
    pub fn new(cities: CityTable) -> Result<Self> {
        let n = cities.len();
        Ok(Self {
            encoding: PermutationEncoding::new(n)?,
            cities,
            scale: 2.0 * n as f64,
        })
    }

    /// Overrides the fitness exponent scale; it must be positive and finite.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(GaError::InvalidConfig(format!(
                "tour fitness scale must be positive and finite, got {scale}"
            )));
        }
        self.scale = scale;
        Ok(self)
    }

    /// The city table.
    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Fitness exponent scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Open length of a single tour.
    pub fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        let pop = Population::from_chromosomes(vec![tour.to_vec()], self.cities.len())?;
        let lines = decode_tours(&pop, &self.cities)?;
        Ok(tour_lengths(&lines)[0])
    }
}

impl Problem for TspProblem {
    type Encoding = PermutationEncoding;
    type Phenotype = Lines;

    fn encoding(&self) -> &PermutationEncoding {
        &self.encoding
    }

    fn decode(&self, population: &Population<usize>) -> Result<Lines> {
        decode_tours(population, &self.cities)
    }

    fn evaluate(&self, lines: &Lines) -> Result<Vec<f64>> {
        Ok(tour_fitness(lines, self.scale).0)
    }
}
