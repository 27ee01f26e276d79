// src/plot_functions/mod.rs

pub mod plot_compositions;
pub mod plot_fractional_integrals;
pub mod plot_orlicz_maximal;

use std::path::{Path, PathBuf};

use crate::constants::{COLOR_CURVE_DARK, LINE_WIDTH_INDICATOR};
use crate::data_analysis::operators::chi;
use crate::plot_framework::{zip_series, LineStyle, PlotSeries};
use crate::types::SampleGrid;

pub const OUTPUT_EXTENSION: &str = "pdf";

pub const INDICATOR_LABEL: &str = r"$y = \chi_{[0,1]}(x)$";
pub const X_AXIS_LABEL: &str = "$x$";
pub const Y_AXIS_LABEL: &str = "$y$";

/// Where a figure with the given stem is written.
pub fn output_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("{stem}.{OUTPUT_EXTENSION}"))
}

/// `a \leq x \leq b`, the sampled interval as it appears in titles.
pub fn interval_latex(start: f64, end: f64) -> String {
    format!(r"{start} \leq x \leq {end}")
}

/// The thick solid indicator curve drawn on top of every figure.
pub fn indicator_curve(grid: &SampleGrid) -> PlotSeries {
    PlotSeries {
        data: zip_series(grid, &chi(grid)),
        label: INDICATOR_LABEL.to_string(),
        color: COLOR_CURVE_DARK,
        stroke_width: LINE_WIDTH_INDICATOR,
        line_style: LineStyle::Solid,
    }
}

// src/plot_functions/mod.rs
