//! Genetic-algorithm optimization engine with two problem encodings.
//!
//! - **GA engine** ([`ga`]): population, roulette-wheel selection,
//!   mask-driven crossover, per-locus mutation, and a generational loop
//!   with no elitism. Randomness flows through explicitly owned streams
//!   ([`random`]) so runs are reproducible under a fixed seed.
//! - **Path planning** ([`path`]): continuous-step genotype decoded into a
//!   2D path; fitness rewards ending near a goal and punishes obstacle
//!   collisions.
//! - **Travelling salesman** ([`tsp`]): permutation genotype decoded into a
//!   city tour; fitness grows as the open tour gets shorter.
//!
//! # Features
//!
//! - `parallel`: per-individual breeding on rayon's pool (same results as
//!   the serial path for a given seed)
//! - `serde`: `Serialize`/`Deserialize` for configuration and problem types
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{evolve, GaConfig, Population, Problem};
//! use u_evolve::random::create_rng;
//! use u_evolve::tsp::{CityTable, TspProblem};
//!
//! let mut rng = create_rng(7);
//! let cities = CityTable::random_unit_square(10, &mut rng).unwrap();
//! let problem = TspProblem::new(cities).unwrap();
//! let config = GaConfig::tsp().with_population_size(50);
//!
//! let mut population = Population::random(problem.encoding(), 50, &mut rng).unwrap();
//! for _ in 0..20 {
//!     let fitness = problem.evaluate(&problem.decode(&population).unwrap()).unwrap();
//!     population = evolve(problem.encoding(), &population, &fitness, &config, &mut rng).unwrap();
//! }
//! assert_eq!(population.len(), 50);
//! ```

pub mod error;
pub mod ga;
pub mod path;
mod phenotype;
pub mod random;
pub mod tsp;

pub use error::{GaError, Result};
pub use phenotype::Lines;
