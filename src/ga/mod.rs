//! Genetic Algorithm engine.
//!
//! A generation-at-a-time GA with fitness-proportionate selection, one
//! offspring per individual, and no elitism. The genotype side is pluggable
//! through [`Encoding`]; the phenotype side through [`Problem`].
//!
//! # Core Traits
//!
//! - [`Encoding`]: chromosome shape, initialization, crossover, mutation
//! - [`Problem`]: batched decoding and fitness evaluation
//!
//! # Key Types
//!
//! - [`Population`]: fixed-size collection of chromosomes
//! - [`StepEncoding`] / [`PermutationEncoding`]: the two built-in genotypes
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`evolve`]: one select → crossover → mutate → replace generation
//! - [`GaRunner`]: Executes the full evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: mask-driven crossover and per-locus mutation on gene slices
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod encoding;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use encoding::{GeneBounds, PermutationEncoding, StepEncoding};
pub use population::Population;
pub use runner::{evolve, GaResult, GaRunner, GenerationStats};
pub use selection::{roulette_indices, roulette_select};
pub use types::{Encoding, GeneOf, Problem};
