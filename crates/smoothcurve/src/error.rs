//! Error types for the smoothcurve crate.
//!
//! This module provides a unified error type for sequence normalization,
//! easing and summary output.

use thiserror::Error;

/// Error type for smoothcurve operations.
#[derive(Debug, Error)]
pub enum SmoothError {
    /// The input has no spread: its minimum equals its maximum, so it cannot be
    /// rescaled into the unit interval.
    #[error("degenerate range: min and max are both {value}, cannot normalize")]
    DegenerateRange {
        /// The single value the input collapses to.
        value: i64,
    },

    /// The requested ramp is longer than an `i64` range can index.
    #[error("too many points: {n} does not fit in an i64 range")]
    TooManyPoints {
        /// Requested number of points.
        n: usize,
    },

    /// The input sequence has no elements.
    #[error("empty sequence: nothing to normalize")]
    EmptySequence,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for smoothcurve operations.
pub type Result<T> = std::result::Result<T, SmoothError>;

impl SmoothError {
    /// Returns true if the error comes from the shape of the input data.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SmoothError::DegenerateRange { .. }
                | SmoothError::TooManyPoints { .. }
                | SmoothError::EmptySequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_message_names_the_value() {
        let err = SmoothError::DegenerateRange { value: 7 };
        assert_eq!(
            err.to_string(),
            "degenerate range: min and max are both 7, cannot normalize"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn json_error_is_not_an_input_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SmoothError = json_err.into();
        assert!(!err.is_input_error());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
