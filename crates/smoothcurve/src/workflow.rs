//! Shared workflow steps used by the binary.

use log::{debug, info};
use ndarray::Array1;

use crate::cli::Args;
use crate::error::Result;
use crate::read::{linear_sequence, sequence_bounds, smooth_with_bounds};
use crate::summary::{CurveSummary, summarize};

/// Result of one normalize-and-ease pass.
#[derive(Debug, Clone)]
pub struct SmoothRun {
    /// Eased values, one per input point.
    pub values: Array1<f64>,
    /// Summary of `values`.
    pub summary: CurveSummary,
}

/// Generate the ramp of `num_points` values and run it through the smoother.
pub fn compute_curve(num_points: usize) -> Result<SmoothRun> {
    let input = linear_sequence(num_points)?;
    let bounds = sequence_bounds(&input)?;
    info!(
        "Smoothing {} points over [{}, {}]",
        input.len(),
        bounds.min,
        bounds.max
    );

    let values = smooth_with_bounds(&input, bounds)?;
    let summary = summarize(&values)?;
    debug!(
        "min {:.6}, max {:.6} at index {}",
        summary.min, summary.max, summary.peak_index
    );

    Ok(SmoothRun { values, summary })
}

/// Compute the curve described by the command-line arguments.
pub fn run_from_args(args: &Args) -> Result<SmoothRun> {
    compute_curve(args.num_points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmoothError;

    #[test]
    fn compute_curve_peaks_in_the_middle() {
        let run = compute_curve(101).unwrap();
        assert_eq!(run.values.len(), 101);
        assert_eq!(run.summary.peak_index, 50);
        assert_eq!(run.summary.peak_value, 1.5);
        assert_eq!(run.summary.min, 0.0);
    }

    #[test]
    fn compute_curve_matches_direct_smoothing() {
        let run = compute_curve(1000).unwrap();
        let direct = crate::read::smooth_sequence(&linear_sequence(1000).unwrap()).unwrap();
        assert_eq!(run.values, direct);
    }

    #[test]
    fn compute_curve_single_point_fails() {
        let err = compute_curve(1).unwrap_err();
        assert!(matches!(err, SmoothError::DegenerateRange { value: 0 }));
    }
}
