// src/plot_functions/plot_compositions.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{
    COLOR_CURVE_DARK, COLOR_CURVE_MEDIUM, COLOR_MARKER, COMPOSITION_ALPHA, COMPOSITION_INTERVAL,
    LINE_WIDTH_PLOT, MARKER_RADIUS, SAMPLE_COUNT,
};
use crate::data_analysis::extrema::{composition_maximum, maximum_label};
use crate::data_analysis::operators::{
    chi, fractional_maximal_of_maximal, iterated_maximal, maximal_of_fractional_maximal,
};
use crate::data_analysis::rational_param::RationalParam;
use crate::font_config::PlotStyle;
use crate::plot_framework::{
    calculate_range, draw_figure, sample_grid, value_bounds, zip_series, FigureConfig,
    FigureLayer, LegendPosition, LegendSize, LineStyle, PlotMarkers, PlotSeries,
};
use crate::plot_functions::{
    indicator_curve, interval_latex, output_path, X_AXIS_LABEL, Y_AXIS_LABEL,
};

pub const OUTPUT_FILE_STEM: &str = "MalpM_and_MMalp";

/// M^2, M after M_alpha and M_alpha after M, with the maxima of M_alpha(M) marked.
pub fn build_compositions_figure(
    interval: (f64, f64),
    alpha: &RationalParam,
) -> Result<FigureConfig, Box<dyn Error>> {
    let (start, end) = interval;
    let x = sample_grid(start, end, SAMPLE_COUNT)?;

    let a = alpha.value();
    let b = alpha.offset(-1).value();

    let iterated = iterated_maximal(&x);
    let maximal_after_fractional = maximal_of_fractional_maximal(&x, a);
    let fractional_after_maximal = fractional_maximal_of_maximal(&x, b);

    let right_max = composition_maximum(alpha)?;
    let left_max = right_max.mirrored();
    debug!(
        "alpha = {}: maxima at ({:.6}, {:.6}) and ({:.6}, {:.6})",
        alpha, right_max.x, right_max.y, left_max.x, left_max.y
    );

    let (y_min, y_max) = value_bounds(&[
        &iterated,
        &maximal_after_fractional,
        &fractional_after_maximal,
        &chi(&x),
    ])?;
    let y_max = y_max.max(right_max.y);

    let layers = vec![
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &iterated),
            label: r"$y=M^{2}(\chi_{[0,1]})(x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dashed,
        }),
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &maximal_after_fractional),
            label: r"$y=M \circ M_{\alpha}(\chi_{[0,1]})(x)$".to_string(),
            color: COLOR_CURVE_DARK,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Dotted,
        }),
        FigureLayer::Curve(PlotSeries {
            data: zip_series(&x, &fractional_after_maximal),
            label: r"$y=M_{\alpha} \circ M(\chi_{[0,1]})(x)$".to_string(),
            color: COLOR_CURVE_MEDIUM,
            stroke_width: LINE_WIDTH_PLOT,
            line_style: LineStyle::Solid,
        }),
        FigureLayer::Markers(PlotMarkers {
            points: vec![(right_max.x, right_max.y), (left_max.x, left_max.y)],
            label: Some(maximum_label()),
            color: COLOR_MARKER,
            radius: MARKER_RADIUS,
        }),
        FigureLayer::Curve(indicator_curve(&x)),
    ];

    Ok(FigureConfig {
        title: format!(
            r"The case of $\alpha={}$ on ${}$",
            alpha.latex(),
            interval_latex(start, end)
        ),
        x_range: calculate_range(start, end),
        y_range: calculate_range(y_min, y_max),
        layers,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        legend_position: LegendPosition::LowerRight,
        legend_size: LegendSize::Small,
    })
}

/// Generates `MalpM_and_MMalp.pdf` in `output_dir`.
pub fn plot_compositions(output_dir: &Path, style: &PlotStyle) -> Result<PathBuf, Box<dyn Error>> {
    let (numer, denom) = COMPOSITION_ALPHA;
    let alpha = RationalParam::new(numer, denom)?;
    info!("Figure 2: compositions of M and M_alpha (alpha = {})", alpha);

    let config = build_compositions_figure(COMPOSITION_INTERVAL, &alpha)?;
    let path = output_path(output_dir, OUTPUT_FILE_STEM);
    draw_figure(&path, &config, style)?;
    Ok(path)
}

// src/plot_functions/plot_compositions.rs
