//! Decoded polylines shared by the path and tour decoders.

use crate::error::{GaError, Result};

/// Per-individual x and y coordinate sequences.
///
/// Row `i` of [`xs`](Lines::xs) and [`ys`](Lines::ys) describe the same
/// polyline and always have equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lines {
    xs: Vec<Vec<f64>>,
    ys: Vec<Vec<f64>>,
}

impl Lines {
    /// Pairs x and y sequences, checking that their shapes agree.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_evolve::Lines;
    ///
    /// let lines = Lines::new(vec![vec![0.0, 1.0]], vec![vec![0.0, 2.0]]).unwrap();
    /// assert_eq!(lines.len(), 1);
    /// assert_eq!(lines.line(0), (&[0.0, 1.0][..], &[0.0, 2.0][..]));
    /// ```
    pub fn new(xs: Vec<Vec<f64>>, ys: Vec<Vec<f64>>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GaError::dimension("y sequences", xs.len(), ys.len()));
        }
        for (x, y) in xs.iter().zip(&ys) {
            if x.len() != y.len() {
                return Err(GaError::dimension("y coordinates", x.len(), y.len()));
            }
        }
        Ok(Self { xs, ys })
    }

    /// Number of polylines.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if there are no polylines.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The `i`-th polyline as `(xs, ys)`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn line(&self, i: usize) -> (&[f64], &[f64]) {
        (&self.xs[i], &self.ys[i])
    }

    /// Iterates over `(xs, ys)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(x, y)| (x.as_slice(), y.as_slice()))
    }

    /// All x sequences.
    pub fn xs(&self) -> &[Vec<f64>] {
        &self.xs
    }

    /// All y sequences.
    pub fn ys(&self) -> &[Vec<f64>] {
        &self.ys
    }
}
