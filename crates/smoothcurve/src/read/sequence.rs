use ndarray::Array1;

use crate::error::{Result, SmoothError};

/// Default number of points in the generated ramp.
pub const DEFAULT_NUM_POINTS: usize = 1000;

/// Observed bounds of an integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest value in the sequence.
    pub min: i64,
    /// Largest value in the sequence.
    pub max: i64,
}

impl Bounds {
    /// Width of the range, `max - min`, as a float.
    ///
    /// The integer difference overflows `i64` once the range is wider than
    /// `i64::MAX`, so the subtraction happens in `f64`.
    pub fn span(&self) -> f64 {
        self.max as f64 - self.min as f64
    }

    /// True when min and max coincide.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Build the contiguous ramp `0, 1, ..., n-1`.
///
/// # Arguments
/// * `n` - Number of points
///
/// # Returns
/// * Ordered integer sequence of length `n`
///
/// # Errors
/// Returns [`SmoothError::TooManyPoints`] when `n - 1` does not fit in an `i64`.
pub fn linear_sequence(n: usize) -> Result<Array1<i64>> {
    let end = i64::try_from(n).map_err(|_| SmoothError::TooManyPoints { n })?;
    Ok(Array1::from_iter(0..end))
}

/// Find the minimum and maximum of a sequence.
///
/// # Errors
/// Returns [`SmoothError::EmptySequence`] when `values` is empty.
pub fn sequence_bounds(values: &Array1<i64>) -> Result<Bounds> {
    let mut iter = values.iter().copied();
    let first = iter.next().ok_or(SmoothError::EmptySequence)?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Ok(Bounds { min, max })
}
