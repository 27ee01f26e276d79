// src/plot_functions/plot_orlicz_maximal.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{COLOR_CURVE_DARK, LINE_WIDTH_PLOT, ORLICZ_INTERVAL, SAMPLE_COUNT};
use crate::data_analysis::operators::{chi, hardy_littlewood_maximal, orlicz_maximal};
use crate::font_config::PlotStyle;
use crate::plot_framework::{
    calculate_range, draw_figure, sample_grid, value_bounds, zip_series, FigureConfig,
    FigureLayer, LegendPosition, LegendSize, LineStyle, PlotSeries,
};
use crate::plot_functions::{
    indicator_curve, interval_latex, output_path, X_AXIS_LABEL, Y_AXIS_LABEL,
};

pub const OUTPUT_FILE_STEM: &str = "Orlicz_maximal_functions";

/// Orlicz maximal function against the Hardy-Littlewood maximal function.
pub fn build_orlicz_maximal_figure(interval: (f64, f64)) -> Result<FigureConfig, Box<dyn Error>> {
    let (start, end) = interval;
    let x = sample_grid(start, end, SAMPLE_COUNT)?;

    let orlicz = orlicz_maximal(&x);
    let hardy_littlewood = hardy_littlewood_maximal(&x);
    let (y_min, y_max) = value_bounds(&[&orlicz, &hardy_littlewood, &chi(&x)])?;

    let layers = vec![
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &orlicz),
            label: r"$y = M_{\exp}(\chi_{[0,1]})(x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dashed,
        }),
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &hardy_littlewood),
            label: r"$y = M(\chi_{[0,1]})(x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dotted,
        }),
        FigureLayer::Curve(indicator_curve(&x)),
    ];

    Ok(FigureConfig {
        title: format!("The range is ${}$", interval_latex(start, end)),
        x_range: calculate_range(start, end),
        y_range: calculate_range(y_min, y_max),
        layers,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        legend_position: LegendPosition::UpperRight,
        legend_size: LegendSize::Regular,
    })
}

/// Generates `Orlicz_maximal_functions.pdf` in `output_dir`.
pub fn plot_orlicz_maximal(output_dir: &Path, style: &PlotStyle) -> Result<PathBuf, Box<dyn Error>> {
    info!("Figure 1: Orlicz vs Hardy-Littlewood maximal functions");
    let config = build_orlicz_maximal_figure(ORLICZ_INTERVAL)?;
    let path = output_path(output_dir, OUTPUT_FILE_STEM);
    draw_figure(&path, &config, style)?;
    Ok(path)
}

// src/plot_functions/plot_orlicz_maximal.rs
