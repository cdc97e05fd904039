//! smoothcurve - Normalize an integer ramp, ease it and plot it
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

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use smoothcurve::{Args, plot_curve, run_from_args, show_plot};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let curve = run_from_args(args)
        .with_context(|| format!("Failed to smooth a ramp of {} points", args.num_points))?;

    info!(
        "Peak {:.6} at index {} of {}",
        curve.summary.peak_value, curve.summary.peak_index, curve.summary.len
    );

    if args.json {
        let json = curve
            .summary
            .to_json()
            .with_context(|| "Failed to serialize curve summary")?;
        println!("{}", json);
    }

    if args.no_show {
        warn!("Plot display skipped (--no-show)");
        return Ok(());
    }

    let plot = plot_curve(&curve.values, &args.title);
    show_plot(&plot);
    info!("Done!");

    Ok(())
}
