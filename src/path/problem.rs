//! Path decoding, path fitness, and the path-planning [`Problem`].

use super::geometry::{Obstacle, Point};
use crate::error::{GaError, Result};
use crate::ga::{Encoding, GeneBounds, Population, Problem, StepEncoding};
use crate::phenotype::Lines;

/// Tuning constants of the path fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFitnessParams {
    /// Fitness assigned to any path that touches an obstacle.
    ///
    /// Must be positive and far below any reachable goal score.
    pub collision_fitness: f64,

    /// Widening applied to each obstacle's x-range during collision tests.
    pub x_margin: f64,
}

impl Default for PathFitnessParams {
    fn default() -> Self {
        Self {
            collision_fitness: 1e-6,
            x_margin: 0.5,
        }
    }
}

/// Signed step encoded by a gene.
#[inline]
fn step(gene: i32) -> f64 {
    (f64::from(gene) - 0.5) / 2.0
}

/// Running positions along one half of a chromosome.
///
/// The first gene is replaced by `origin`; the remaining genes become
/// step deltas.
fn walk(half: &[i32], origin: f64) -> Vec<f64> {
    let mut position = origin;
    let mut out = Vec::with_capacity(half.len());
    out.push(position);
    for &gene in &half[1..] {
        position += step(gene);
        out.push(position);
    }
    out
}

/// Decodes continuous-step chromosomes into 2D paths.
///
/// Each chromosome holds `2 * n_moves` genes: the x-move half followed by
/// the y-move half. Every gene becomes a delta `(gene - 0.5) / 2`, the first
/// entry of each half is forced to the start coordinate, and the running
/// sum gives the path. Each decoded path has `n_moves` points, the first
/// being `start`.
///
/// # Errors
/// [`GaError::DimensionMismatch`] if the chromosome length is not
/// `2 * n_moves`, or `n_moves` is zero.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Population;
/// use u_evolve::path::{decode_paths, Point};
///
/// // n_moves = 3: x genes [_, 1, 1], y genes [_, 0, 1]
/// let pop = Population::from_chromosomes(vec![vec![0, 1, 1, 0, 0, 1]], 6).unwrap();
/// let lines = decode_paths(&pop, 3, Point::new(0.0, 5.0)).unwrap();
/// let (xs, ys) = lines.line(0);
/// assert_eq!(xs, &[0.0, 0.25, 0.5]);
/// assert_eq!(ys, &[5.0, 4.75, 5.0]);
/// ```
pub fn decode_paths(population: &Population<i32>, n_moves: usize, start: Point) -> Result<Lines> {
    if n_moves == 0 {
        return Err(GaError::dimension("n_moves", 1, 0));
    }
    if population.dna_size() != 2 * n_moves {
        return Err(GaError::dimension(
            "chromosome length",
            2 * n_moves,
            population.dna_size(),
        ));
    }

    let (xs, ys) = population
        .iter()
        .map(|c| {
            let (x_half, y_half) = c.split_at(n_moves);
            (walk(x_half, start.x), walk(y_half, start.y))
        })
        .unzip();
    Lines::new(xs, ys)
}

/// Scores decoded paths by closeness of their end point to `goal`.
///
/// Fitness is `(1 / (d + 1))^2` where `d` is the Euclidean distance from
/// the last point to the goal, so it lies in `(0, 1]`. Any path with a
/// vertex inside any obstacle (see [`Obstacle::blocks`]) gets
/// `params.collision_fitness` instead, regardless of its distance.
///
/// # Errors
/// [`GaError::DimensionMismatch`] if a path has no points.
pub fn path_fitness(
    lines: &Lines,
    goal: Point,
    obstacles: &[Obstacle],
    params: &PathFitnessParams,
) -> Result<Vec<f64>> {
    lines
        .iter()
        .map(|(xs, ys)| {
            let (Some(&x), Some(&y)) = (xs.last(), ys.last()) else {
                return Err(GaError::dimension("path points", 1, 0));
            };
            let blocked = obstacles
                .iter()
                .any(|obs| obs.blocks(xs, ys, params.x_margin));
            if blocked {
                Ok(params.collision_fitness)
            } else {
                let d = Point::new(x, y).distance_to(&goal);
                Ok((1.0 / (d + 1.0)).powi(2))
            }
        })
        .collect()
}

/// Obstacle-avoiding path planning over a continuous-step encoding.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::{GaConfig, GaRunner, GeneBounds};
/// use u_evolve::path::{Obstacle, PathProblem, Point};
///
/// let problem = PathProblem::new(
///     15,
///     GeneBounds::inclusive(0, 1).unwrap(),
///     Point::new(0.0, 5.0),
///     Point::new(10.0, 5.0),
/// )
/// .unwrap()
/// .with_obstacle(Obstacle::from_corners(Point::new(5.0, 2.0), Point::new(5.0, 8.0)));
///
/// let config = GaConfig::path_planning().with_max_generations(10).with_seed(1);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathProblem {
    encoding: StepEncoding,
    n_moves: usize,
    start: Point,
    goal: Point,
    obstacles: Vec<Obstacle>,
    params: PathFitnessParams,
}

impl PathProblem {
    /// Creates a problem with `n_moves` steps per axis and no obstacles.
    pub fn new(n_moves: usize, bounds: GeneBounds, start: Point, goal: Point) -> Result<Self> {
        Ok(Self {
            encoding: StepEncoding::new(2 * n_moves, bounds)?,
            n_moves,
            start,
            goal,
            obstacles: Vec::new(),
            params: PathFitnessParams::default(),
        })
    }

    /// Adds an obstacle.
    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Replaces the fitness constants.
    pub fn with_params(mut self, params: PathFitnessParams) -> Self {
        self.params = params;
        self
    }

    /// Steps per axis.
    pub fn n_moves(&self) -> usize {
        self.n_moves
    }

    /// Fixed start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal point.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Registered obstacles.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Decodes a single chromosome into its path.
    pub fn path_of(&self, chromosome: &[i32]) -> Result<Lines> {
        let dna_size = self.encoding.dna_size();
        let pop = Population::from_chromosomes(vec![chromosome.to_vec()], dna_size)?;
        decode_paths(&pop, self.n_moves, self.start)
    }
}

impl Problem for PathProblem {
    type Encoding = StepEncoding;
    type Phenotype = Lines;

    fn encoding(&self) -> &StepEncoding {
        &self.encoding
    }

    fn decode(&self, population: &Population<i32>) -> Result<Lines> {
        decode_paths(population, self.n_moves, self.start)
    }

    fn evaluate(&self, lines: &Lines) -> Result<Vec<f64>> {
        path_fitness(lines, self.goal, &self.obstacles, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_lines(ends: &[(f64, f64)]) -> Lines {
        let xs = ends.iter().map(|&(x, _)| vec![0.0, x]).collect();
        let ys = ends.iter().map(|&(_, y)| vec![0.0, y]).collect();
        Lines::new(xs, ys).unwrap()
    }

    fn score(lines: &Lines, goal: Point, obstacles: &[Obstacle]) -> Vec<f64> {
        path_fitness(lines, goal, obstacles, &PathFitnessParams::default()).unwrap()
    }

    #[test]
    fn test_decode_forces_start_and_accumulates() {
        // n_moves = 4; first gene of each half is ignored
        let pop = Population::from_chromosomes(vec![vec![7, 1, 1, 0, 9, 0, 0, 1]], 8).unwrap();
        let lines = decode_paths(&pop, 4, Point::new(2.0, -1.0)).unwrap();
        let (xs, ys) = lines.line(0);
        assert_eq!(xs, &[2.0, 2.25, 2.5, 2.25]);
        assert_eq!(ys, &[-1.0, -1.25, -1.5, -1.25]);
    }

    #[test]
    fn test_decode_point_count() {
        let pop = Population::from_chromosomes(vec![vec![1; 30]; 5], 30).unwrap();
        let lines = decode_paths(&pop, 15, Point::default()).unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|(xs, ys)| xs.len() == 15 && ys.len() == 15));
    }

    #[test]
    fn test_decode_dimension_mismatch() {
        let pop = Population::from_chromosomes(vec![vec![1; 6]], 6).unwrap();
        assert_eq!(
            decode_paths(&pop, 4, Point::default()),
            Err(GaError::dimension("chromosome length", 8, 6))
        );
        assert!(decode_paths(&pop, 0, Point::default()).is_err());
    }

    #[test]
    fn test_fitness_on_goal_is_one() {
        let lines = straight_lines(&[(5.0, 5.0)]);
        let f = score(&lines, Point::new(5.0, 5.0), &[]);
        assert_eq!(f, vec![1.0]);
    }

    #[test]
    fn test_fitness_formula() {
        let lines = straight_lines(&[(3.0, 4.0)]);
        let f = score(&lines, Point::new(0.0, 0.0), &[]);
        // d = 5 → (1/6)^2
        assert!((f[0] - 1.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_strictly_decreasing_in_distance() {
        let lines = straight_lines(&[(4.0, 4.0), (3.0, 3.0), (1.0, 0.0)]);
        let f = score(&lines, Point::new(5.0, 5.0), &[]);
        assert!(f[0] > f[1] && f[1] > f[2], "fitness not ordered: {f:?}");
        assert!(f.iter().all(|&v| v > 0.0 && v <= 1.0));
    }

    #[test]
    fn test_collision_overrides_distance() {
        let obstacle = Obstacle::from_corners(Point::new(2.0, 2.0), Point::new(3.0, 3.0));
        let lines = Lines::new(vec![vec![0.0, 2.5, 5.0]], vec![vec![0.0, 2.5, 5.0]]).unwrap();
        let f = score(&lines, Point::new(5.0, 5.0), &[obstacle]);
        assert_eq!(f, vec![1e-6]);
    }

    #[test]
    fn test_any_obstacle_disqualifies() {
        let far = Obstacle::from_corners(Point::new(100.0, 100.0), Point::new(101.0, 101.0));
        let hit = Obstacle::from_corners(Point::new(0.5, -1.0), Point::new(1.5, 1.0));
        let lines = straight_lines(&[(1.0, 0.0), (-3.0, 0.0)]);
        let f = score(&lines, Point::new(1.0, 0.0), &[far, hit]);
        assert_eq!(f[0], 1e-6);
        assert!(f[1] > 1e-6);
    }

    #[test]
    fn test_custom_collision_fitness() {
        let obstacle = Obstacle::from_corners(Point::new(-1.0, -1.0), Point::new(1.0, 1.0));
        let lines = straight_lines(&[(5.0, 5.0)]);
        let params = PathFitnessParams {
            collision_fitness: 1e-9,
            x_margin: 0.0,
        };
        // the start point (0, 0) lies inside the obstacle
        let f = path_fitness(&lines, Point::new(5.0, 5.0), &[obstacle], &params).unwrap();
        assert_eq!(f, vec![1e-9]);
    }

    #[test]
    fn test_problem_decode_and_evaluate() {
        let problem = PathProblem::new(
            3,
            GeneBounds::new(0, 2).unwrap(),
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.5),
        )
        .unwrap();
        let chromosomes = vec![vec![0, 1, 1, 0, 1, 1], vec![0; 6]];
        let pop = Population::from_chromosomes(chromosomes, 6).unwrap();
        let lines = problem.decode(&pop).unwrap();
        let f = problem.evaluate(&lines).unwrap();
        assert_eq!(f[0], 1.0);
        assert!(f[1] < f[0]);
    }

    #[test]
    fn test_path_of_single_chromosome() {
        let bounds = GeneBounds::new(0, 2).unwrap();
        let problem = PathProblem::new(2, bounds, Point::new(1.0, 1.0), Point::default()).unwrap();
        let lines = problem.path_of(&[0, 1, 0, 0]).unwrap();
        assert_eq!(lines.line(0), (&[1.0, 1.25][..], &[1.0, 0.75][..]));
        assert!(problem.path_of(&[0, 1, 0]).is_err());
    }

    #[test]
    fn test_empty_path_is_a_shape_error() {
        let rows = vec![vec![0.0, 1.0], vec![]];
        let lines = Lines::new(rows.clone(), rows).unwrap();
        assert_eq!(
            path_fitness(&lines, Point::default(), &[], &PathFitnessParams::default()),
            Err(GaError::dimension("path points", 1, 0))
        );
    }
}
