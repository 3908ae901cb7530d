//! Points and axis-aligned obstacles.

use crate::error::{GaError, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Parses an `[x, y]` row.
    pub fn from_row(row: &[f64]) -> Result<Self> {
        match row {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GaError::dimension("point coordinates", 2, row.len())),
        }
    }
}

/// An axis-aligned rectangle the path must not cross.
///
/// # Examples
///
/// ```
/// use u_evolve::path::{Obstacle, Point};
///
/// // corners may be given in any order
/// let obs = Obstacle::from_corners(Point::new(3.0, 3.0), Point::new(2.0, 2.0));
/// assert_eq!(obs.min(), Point::new(2.0, 2.0));
/// assert_eq!(obs.max(), Point::new(3.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    min: Point,
    max: Point,
}

impl Obstacle {
    /// Builds an obstacle from any two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Builds an obstacle from `[[x0, y0], [x1, y1]]` rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        match rows {
            [a, b] => Ok(Self::from_corners(Point::from_row(a)?, Point::from_row(b)?)),
            _ => Err(GaError::dimension("obstacle corners", 2, rows.len())),
        }
    }

    /// Lower-left corner.
    pub fn min(&self) -> Point {
        self.min
    }

    /// Upper-right corner.
    pub fn max(&self) -> Point {
        self.max
    }

    /// Returns `true` if any vertex of the polyline falls inside the
    /// obstacle.
    ///
    /// The x-range is widened by `x_margin` on both sides; the y-range is
    /// not. Both comparisons are strict.
    pub fn blocks(&self, xs: &[f64], ys: &[f64], x_margin: f64) -> bool {
        let (x_lo, x_hi) = (self.min.x - x_margin, self.max.x + x_margin);
        xs.iter()
            .zip(ys)
            .any(|(&x, &y)| x > x_lo && x < x_hi && y > self.min.y && y < self.max.y)
    }
}
