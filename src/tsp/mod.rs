//! Travelling-salesman problem over a permutation encoding.
//!
//! - [`CityTable`]: fixed city coordinates
//! - [`decode_tours`]: permutations → [`Lines`](crate::Lines) in visiting order
//! - [`tour_fitness`]: tours → `(fitness, length)` vectors
//! - [`TspProblem`]: all of the above, bound to a
//!   [`PermutationEncoding`](crate::ga::PermutationEncoding)

mod cities;
mod problem;

pub use cities::CityTable;
pub use problem::{decode_tours, tour_fitness, tour_lengths, TspProblem};
