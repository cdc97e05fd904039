//! smoothcurve - Normalize, ease and plot an integer ramp
//!
//! Copyright (C) 2025 Pierre Aubert pierre(at)spinorama(dot)org
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod clamp;
mod normalize;
mod sequence;
mod smooth;

// Re-export commonly used functions
pub use clamp::clamp_unit;
pub use normalize::normalize_to_unit;
pub use sequence::{Bounds, DEFAULT_NUM_POINTS, linear_sequence, sequence_bounds};
pub use smooth::{PEAK_VALUE, ease, smooth_sequence, smooth_with_bounds};
