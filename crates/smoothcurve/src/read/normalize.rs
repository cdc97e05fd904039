use ndarray::Array1;

use super::sequence::Bounds;
use crate::error::{Result, SmoothError};

/// Linearly rescale integers into `[0, 1]` using the given bounds.
///
/// Each value maps to `(v - min) / (max - min)`, so `min` lands on 0 and
/// `max` on 1. Values outside the bounds land outside the unit interval;
/// use [`clamp_unit`](super::clamp_unit) to fold them back.
///
/// # Arguments
///
/// * `values` - Integer sequence to rescale
/// * `bounds` - Minimum and maximum used for the rescale
///
/// # Errors
///
/// Returns [`SmoothError::DegenerateRange`] when `bounds.min == bounds.max`.
pub fn normalize_to_unit(values: &Array1<i64>, bounds: Bounds) -> Result<Array1<f64>> {
    if bounds.is_degenerate() {
        return Err(SmoothError::DegenerateRange { value: bounds.min });
    }

    let min = bounds.min as f64;
    let span = bounds.span();
    Ok(values.mapv(|v| (v as f64 - min) / span))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_zero_and_one() {
        let values = Array1::from(vec![10, 15, 20]);
        let out = normalize_to_unit(&values, Bounds { min: 10, max: 20 }).unwrap();
        assert_eq!(out.to_vec(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn values_outside_bounds_are_not_clamped_here() {
        let values = Array1::from(vec![-10, 30]);
        let out = normalize_to_unit(&values, Bounds { min: 0, max: 20 }).unwrap();
        assert_eq!(out.to_vec(), vec![-0.5, 1.5]);
    }

    #[test]
    fn full_i64_range_normalizes_without_overflow() {
        let values = Array1::from(vec![i64::MIN, 0, i64::MAX]);
        let bounds = Bounds {
            min: i64::MIN,
            max: i64::MAX,
        };
        let out = normalize_to_unit(&values, bounds).unwrap();
        assert_eq!(out.to_vec(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        let values = Array1::from(vec![3, 3, 3]);
        let err = normalize_to_unit(&values, Bounds { min: 3, max: 3 }).unwrap_err();
        assert!(matches!(err, SmoothError::DegenerateRange { value: 3 }));
    }
}
