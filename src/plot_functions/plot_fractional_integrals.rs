// src/plot_functions/plot_fractional_integrals.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{
    COLOR_CURVE_DARK, FRACTIONAL_ALPHA, FRACTIONAL_INTERVAL, LINE_WIDTH_PLOT, SAMPLE_COUNT,
};
use crate::data_analysis::operators::{chi, fractional_integral, fractional_maximal};
use crate::data_analysis::rational_param::RationalParam;
use crate::font_config::PlotStyle;
use crate::plot_framework::{
    calculate_range, draw_figure, sample_grid, value_bounds, zip_series, FigureConfig,
    FigureLayer, LegendPosition, LegendSize, LineStyle, PlotSeries,
};
use crate::plot_functions::{
    indicator_curve, interval_latex, output_path, X_AXIS_LABEL, Y_AXIS_LABEL,
};

pub const OUTPUT_FILE_STEM: &str = "Fractional_integrals";

/// Fractional integral I_alpha against the fractional maximal function M_alpha.
pub fn build_fractional_integrals_figure(
    interval: (f64, f64),
    alpha: &RationalParam,
) -> Result<FigureConfig, Box<dyn Error>> {
    let (start, end) = interval;
    let x = sample_grid(start, end, SAMPLE_COUNT)?;
    let a = alpha.value();

    let integral = fractional_integral(&x, a);
    let maximal = fractional_maximal(&x, a);
    let (y_min, y_max) = value_bounds(&[&integral, &maximal, &chi(&x)])?;

    let layers = vec![
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &integral),
            label: r"$y = I_{\alpha}[\chi_{[0,1]}](x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dashed,
        }),
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &maximal),
            label: r"$y = M_{\alpha}[\chi_{[0,1]}](x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dotted,
        }),
        FigureLayer::Curve(indicator_curve(&x)),
    ];

    Ok(FigureConfig {
        title: format!(
            r"The case of $\alpha = {}$ on ${}$",
            alpha.latex(),
            interval_latex(start, end)
        ),
        x_range: calculate_range(start, end),
        y_range: calculate_range(y_min, y_max),
        layers,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        legend_position: LegendPosition::UpperRight,
        legend_size: LegendSize::Regular,
    })
}

/// Generates `Fractional_integrals.pdf` in `output_dir`.
pub fn plot_fractional_integrals(
    output_dir: &Path,
    style: &PlotStyle,
) -> Result<PathBuf, Box<dyn Error>> {
    let (numer, denom) = FRACTIONAL_ALPHA;
    let alpha = RationalParam::new(numer, denom)?;
    info!("Figure 3: fractional integral and fractional maximal function (alpha = {})", alpha);

    let config = build_fractional_integrals_figure(FRACTIONAL_INTERVAL, &alpha)?;
    let path = output_path(output_dir, OUTPUT_FILE_STEM);
    draw_figure(&path, &config, style)?;
    Ok(path)
}

// src/plot_functions/plot_fractional_integrals.rs
