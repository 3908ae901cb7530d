//! City coordinate table.

use rand::Rng;

use crate::error::{GaError, Result};
use crate::path::Point;

/// Immutable mapping from city index to coordinates.
///
/// # Examples
///
/// ```
/// use u_evolve::tsp::CityTable;
///
/// let table = CityTable::from_rows(&[vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(table.len(), 2);
/// assert!((table.distance(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityTable {
    positions: Vec<Point>,
}

impl CityTable {
    /// Creates a table; at least one city is required.
    pub fn new(positions: Vec<Point>) -> Result<Self> {
        if positions.is_empty() {
            return Err(GaError::dimension("city table", 1, 0));
        }
        Ok(Self { positions })
    }

    /// Parses `[x, y]` rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let positions = rows
            .iter()
            .map(|r| Point::from_row(r))
            .collect::<Result<Vec<_>>>()?;
        Self::new(positions)
    }

    /// Draws `n` cities uniformly in the unit square.
    pub fn random_unit_square<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        let positions = (0..n)
            .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
            .collect();
        Self::new(positions)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`: a table holds at least one city.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Coordinates of city `i`, if it exists.
    pub fn get(&self, i: usize) -> Option<Point> {
        self.positions.get(i).copied()
    }

    /// All coordinates in index order.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Euclidean distance between cities `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.positions[a].distance_to(&self.positions[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_empty_table_rejected() {
        assert!(CityTable::new(vec![]).is_err());
    }

    #[test]
    fn test_from_rows_shape_error() {
        assert_eq!(
            CityTable::from_rows(&[vec![0.0, 0.0], vec![1.0, 2.0, 3.0]]),
            Err(GaError::dimension("point coordinates", 2, 3))
        );
    }

    #[test]
    fn test_random_unit_square() {
        let mut rng = create_rng(42);
        let table = CityTable::random_unit_square(20, &mut rng).unwrap();
        assert_eq!(table.len(), 20);
        assert!(table
            .positions()
            .iter()
            .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));
    }

    #[test]
    fn test_get() {
        let table = CityTable::new(vec![Point::new(1.0, 2.0)]).unwrap();
        assert_eq!(table.get(0), Some(Point::new(1.0, 2.0)));
        assert_eq!(table.get(1), None);
    }
}
