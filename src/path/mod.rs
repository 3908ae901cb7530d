//! Obstacle-avoiding path planning.
//!
//! A chromosome of `2 * n_moves` integer genes is decoded into a 2D path
//! from a fixed start point. Fitness rewards ending close to the goal and
//! collapses to a tiny floor for any path that enters an obstacle.
//!
//! - [`decode_paths`]: chromosomes → [`Lines`](crate::Lines)
//! - [`path_fitness`]: paths → fitness vector
//! - [`PathProblem`]: both, bound to a [`StepEncoding`](crate::ga::StepEncoding)

mod geometry;
mod problem;

pub use geometry::{Obstacle, Point};
pub use problem::{decode_paths, path_fitness, PathFitnessParams, PathProblem};
