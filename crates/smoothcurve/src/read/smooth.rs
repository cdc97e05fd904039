use ndarray::Array1;

use super::clamp::clamp_unit;
use super::normalize::normalize_to_unit;
use super::sequence::{Bounds, sequence_bounds};
use crate::error::Result;

/// Maximum of [`ease`] on `[0, 1]`, reached at `k = 0.5`.
pub const PEAK_VALUE: f64 = 1.5;

/// Easing polynomial `t = 6k - 6k²`.
///
/// This is not the canonical smoothstep `3k² - 2k³`: it starts at 0, peaks at
/// [`PEAK_VALUE`] for `k = 0.5` and comes back to 0 at `k = 1`.
#[inline]
pub fn ease(k: f64) -> f64 {
    6.0 * k - 6.0 * k * k
}

/// Rescale a sequence into `[0, 1]` with its own bounds, then ease it.
///
/// For every element `i`, in input order:
/// `k = clamp((i - min) / (max - min), 0, 1)` and `t = ease(k)`.
///
/// # Arguments
/// * `values` - Ordered integer sequence
///
/// # Returns
/// * Eased values, same length and order as `values`
///
/// # Errors
/// * [`SmoothError::EmptySequence`](crate::SmoothError::EmptySequence) on empty input
/// * [`SmoothError::DegenerateRange`](crate::SmoothError::DegenerateRange) when all values are equal
pub fn smooth_sequence(values: &Array1<i64>) -> Result<Array1<f64>> {
    let bounds = sequence_bounds(values)?;
    smooth_with_bounds(values, bounds)
}

/// Same as [`smooth_sequence`] with bounds the caller already computed.
///
/// # Errors
/// * [`SmoothError::DegenerateRange`](crate::SmoothError::DegenerateRange) when `bounds.min == bounds.max`
pub fn smooth_with_bounds(values: &Array1<i64>, bounds: Bounds) -> Result<Array1<f64>> {
    let unit = clamp_unit(&normalize_to_unit(values, bounds)?);
    Ok(unit.mapv(ease))
}
