//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised by the GA engine and its problem encodings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// The fitness vector sums to zero, so selection probabilities are undefined.
    #[error("fitness vector sums to zero: selection probabilities are undefined")]
    AllZeroFitness,

    /// A fitness entry is negative, NaN or infinite, or the total overflowed.
    #[error("invalid fitness value {value} at index {index}")]
    InvalidFitness { index: usize, value: f64 },

    /// An input's shape disagrees with the configured dimensions.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Gene bounds with an empty range.
    #[error("invalid gene bounds: low ({low}) must be smaller than high ({high})")]
    InvalidBounds { low: i32, high: i32 },

    /// A gene of a continuous-step individual lies outside `[low, high)`.
    #[error("gene {gene} at locus {locus} of individual {index} is outside [{low}, {high})")]
    GeneOutOfBounds {
        index: usize,
        locus: usize,
        gene: i32,
        low: i32,
        high: i32,
    },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An individual under permutation encoding is not a bijection onto `0..n`.
    #[error("individual {index} is not a valid permutation")]
    InvalidPermutation { index: usize },
}

impl GaError {
    pub(crate) fn dimension(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
