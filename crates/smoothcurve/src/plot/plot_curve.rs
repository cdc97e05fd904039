use log::debug;
use ndarray::Array1;
use plotly::common::Mode;
use plotly::{Layout, Plot, Scatter};

use crate::plot::ref_lines::make_ref_lines;

/// Plot title used when none is given.
pub const DEFAULT_TITLE: &str = "Smoothed curve";

/// Create a line plot of a smoothed curve.
///
/// The x axis is the position in the sequence, the y axis the eased value.
/// Reference lines at 0 and at the easing peak are drawn underneath.
pub fn plot_curve(values: &Array1<f64>, title: &str) -> Plot {
    let mut plot = Plot::new();

    for ref_line in make_ref_lines(values.len()) {
        plot.add_trace(Box::new(ref_line));
    }

    let index: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    let curve_trace = Scatter::new(index, values.to_vec())
        .mode(Mode::Lines)
        .name("smoothed")
        .line(plotly::common::Line::new().color("#1f77b4").width(2.0));
    plot.add_trace(curve_trace);

    let layout = Layout::new()
        .title(title.to_string())
        .width(1024)
        .height(600)
        .x_axis(plotly::layout::Axis::new().title("Index".to_string()))
        .y_axis(
            plotly::layout::Axis::new()
                .title("Value".to_string())
                .range(vec![-0.1, 1.6]),
        );
    plot.set_layout(layout);

    debug!("built plot '{}' with {} points", title, values.len());
    plot
}

/// Display the plot in the default viewer.
pub fn show_plot(plot: &Plot) {
    plot.show();
}
