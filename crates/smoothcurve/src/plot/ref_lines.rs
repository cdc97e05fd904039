use plotly::Scatter;
use plotly::common::Mode;

use crate::read::PEAK_VALUE;

// Two horizontal reference lines spanning the index range: the baseline at
// y=0 and the easing peak
pub fn make_ref_lines(len: usize) -> Vec<Scatter<f64, f64>> {
    let x_ref = vec![0.0_f64, len.saturating_sub(1) as f64];
    let y_zero = vec![0.0_f64, 0.0_f64];
    let y_peak = vec![PEAK_VALUE, PEAK_VALUE];

    let ref_zero = Scatter::new(x_ref.clone(), y_zero)
        .mode(Mode::Lines)
        .name("baseline")
        .show_legend(false)
        .line(plotly::common::Line::new().color("#000000").width(1.0));
    let ref_peak = Scatter::new(x_ref, y_peak)
        .mode(Mode::Lines)
        .name(format!("peak {PEAK_VALUE}"))
        .line(
            plotly::common::Line::new()
                .color("#888888")
                .width(1.0)
                .dash(plotly::common::DashType::Dash),
        );

    vec![*ref_zero, *ref_peak]
}
