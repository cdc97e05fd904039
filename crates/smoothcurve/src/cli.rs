//! smoothcurve - Normalize, ease and plot an integer ramp
//! Command-line interface definitions
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

use clap::Parser;

use crate::plot::DEFAULT_TITLE;
use crate::read::DEFAULT_NUM_POINTS;

/// Build an integer ramp, normalize it, ease it and plot it.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of points in the ramp `0..N`.
    /// A single point has no range to normalize over and is rejected.
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_POINTS, value_parser = parse_strictly_positive_usize)]
    pub num_points: usize,

    /// Title shown above the plot.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Compute and log the curve without opening the plot.
    #[arg(long)]
    pub no_show: bool,

    /// Print the curve summary as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Parse a usize that must be at least 1.
pub fn parse_strictly_positive_usize(s: &str) -> Result<usize, String> {
    let v: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid non-negative integer", s))?;
    if v == 0 {
        Err(format!("value must be at least 1, got {}", v))
    } else {
        Ok(v)
    }
}
