#![doc = include_str!("../README.md")]

/// Error types for smoothcurve operations.
pub mod error;
pub use error::{Result, SmoothError};

/// Command-line interface definitions
pub mod cli;
/// Plotting and visualization functions
pub mod plot;
/// Sequence generation, normalization and easing
pub mod read;
/// Summary statistics of a smoothed curve
pub mod summary;
/// Shared workflow steps used by the binary
pub mod workflow;

// Re-export commonly used items
pub use cli::Args;
pub use plot::*;
pub use read::*;
pub use summary::{CurveSummary, summarize};
pub use workflow::*;
