use ndarray::Array1;
use serde::Serialize;

use crate::error::{Result, SmoothError};

/// Shape of a smoothed curve: its extent and where it peaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSummary {
    /// Number of points.
    pub len: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// First index at which `max` occurs.
    pub peak_index: usize,
    /// Value at `peak_index` (equal to `max`).
    pub peak_value: f64,
}

impl CurveSummary {
    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute the [`CurveSummary`] of a curve.
///
/// # Errors
/// Returns [`SmoothError::EmptySequence`] when `values` is empty.
pub fn summarize(values: &Array1<f64>) -> Result<CurveSummary> {
    let first = *values.first().ok_or(SmoothError::EmptySequence)?;
    let mut min = first;
    let mut peak_index = 0;
    let mut peak_value = first;
    for (i, &v) in values.iter().enumerate().skip(1) {
        min = min.min(v);
        if v > peak_value {
            peak_value = v;
            peak_index = i;
        }
    }

    Ok(CurveSummary {
        len: values.len(),
        min,
        max: peak_value,
        peak_index,
        peak_value,
    })
}
