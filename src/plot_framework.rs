// src/plot_framework.rs

use plotters::backend::SVGBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, EmptyElement, PathElement};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::Path;

use ndarray::Array1;
use ndarray_stats::QuantileExt;
use svg2pdf::usvg;
use tracing::{debug, info};

use crate::constants::{
    AXIS_PADDING_FRACTION, COLOR_GRID, DASH_PATTERN_DASHED, DASH_PATTERN_DOTTED, GRID_ALPHA,
    PLOT_DPI, X_LABEL_AREA_SIZE, Y_LABEL_AREA_SIZE,
};
use crate::font_config::PlotStyle;
use crate::types::{FunctionValues, SampleGrid, SeriesData};

/// Length of a legend swatch in pixels.
const LEGEND_SWATCH_WIDTH: i32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    /// Three (start, end) pixel spans that draw this style in a legend swatch.
    fn legend_spans(self) -> [(i32, i32); 3] {
        match self {
            LineStyle::Solid => [(0, 8), (8, 16), (16, LEGEND_SWATCH_WIDTH)],
            LineStyle::Dashed => [(0, 6), (9, 15), (18, LEGEND_SWATCH_WIDTH)],
            LineStyle::Dotted => [(0, 2), (11, 13), (22, LEGEND_SWATCH_WIDTH)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperRight,
    LowerRight,
}

impl LegendPosition {
    fn to_series_label_position(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSize {
    Regular,
    Small,
}

/// One curve. `label` is LaTeX source; an empty label keeps the curve out of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub data: SeriesData,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub line_style: LineStyle,
}

/// Filled circles sharing one legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotMarkers {
    pub points: SeriesData,
    pub label: Option<String>,
    pub color: RGBColor,
    pub radius: u32,
}

/// Layers are drawn, and listed in the legend, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum FigureLayer {
    Curve(PlotSeries),
    Markers(PlotMarkers),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub layers: Vec<FigureLayer>,
    pub x_label: String,
    pub y_label: String,
    pub legend_position: LegendPosition,
    pub legend_size: LegendSize,
}

impl FigureConfig {
    pub fn curves(&self) -> impl Iterator<Item = &PlotSeries> {
        self.layers.iter().filter_map(|layer| match layer {
            FigureLayer::Curve(series) => Some(series),
            FigureLayer::Markers(_) => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &PlotMarkers> {
        self.layers.iter().filter_map(|layer| match layer {
            FigureLayer::Markers(markers) => Some(markers),
            FigureLayer::Curve(_) => None,
        })
    }
}

/// `count` evenly spaced samples over the closed interval `[start, end]`.
pub fn sample_grid(start: f64, end: f64, count: usize) -> Result<SampleGrid, Box<dyn Error>> {
    if !start.is_finite() || !end.is_finite() || start >= end {
        return Err(format!("Invalid sample interval [{start}, {end}]").into());
    }
    if count < 2 {
        return Err(format!("Sample grid needs at least 2 points, got {count}").into());
    }
    Ok(Array1::linspace(start, end, count))
}

/// Pairs a grid with an operator's output.
pub fn zip_series(grid: &SampleGrid, values: &FunctionValues) -> SeriesData {
    grid.iter().copied().zip(values.iter().copied()).collect()
}

/// Calculate plot range with padding.
/// Adds AXIS_PADDING_FRACTION of the span on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> Range<f64> {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        0.5
    } else {
        range * AXIS_PADDING_FRACTION
    };
    (min - padding)..(max + padding)
}

/// Smallest and largest finite value across all outputs. Non-finite samples are ignored.
pub fn value_bounds(outputs: &[&FunctionValues]) -> Result<(f64, f64), Box<dyn Error>> {
    let finite: Array1<f64> = outputs
        .iter()
        .flat_map(|values| values.iter().copied())
        .filter(|v| v.is_finite())
        .collect();
    let min = *finite.min()?;
    let max = *finite.max()?;
    Ok((min, max))
}

/// Split a series at non-finite samples so they show up as gaps.
pub fn split_finite_segments(data: &[(f64, f64)]) -> Vec<SeriesData> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Renders a figure and writes it to `output_path` as a single-page PDF.
pub fn draw_figure(
    output_path: &Path,
    config: &FigureConfig,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let svg = render_svg(config, style)?;
    let pdf = svg_to_pdf(&svg, PLOT_DPI)?;
    fs::write(output_path, pdf)?;
    info!("  Figure saved as '{}'.", output_path.display());
    Ok(())
}

/// Renders a figure into an in-memory SVG document.
pub fn render_svg(config: &FigureConfig, style: &PlotStyle) -> Result<String, Box<dyn Error>> {
    let mut svg = String::new();
    {
        let root_area =
            SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        root_area.fill(&WHITE)?;
        draw_chart(&root_area, config, style)?;
        root_area.present()?;
    }
    Ok(svg)
}

/// Converts an SVG document to PDF. `dpi` maps SVG pixels to physical page size.
pub fn svg_to_pdf(svg: &str, dpi: f64) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let mut page_options = svg2pdf::PageOptions::default();
    page_options.dpi = dpi as f32;
    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), page_options)
        .map_err(|e| format!("PDF conversion failed: {e:?}").into())
}

fn draw_chart(
    root_area: &DrawingArea<SVGBackend, Shift>,
    config: &FigureConfig,
    style: &PlotStyle,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(root_area)
        .caption(style.render_label(&config.title), style.title_font.as_tuple())
        .margin(style.margin)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(style.render_label(&config.x_label))
        .y_desc(style.render_label(&config.y_label))
        .x_labels(12)
        .y_labels(10)
        .bold_line_style(COLOR_GRID.mix(GRID_ALPHA))
        .light_line_style(WHITE.mix(0.0))
        .label_style(style.tick_label_font.as_tuple())
        .axis_desc_style(style.axis_label_font.as_tuple())
        .draw()?;

    let mut legend_series_count = 0;

    for layer in &config.layers {
        match layer {
            FigureLayer::Curve(s) => {
                let shape = s.color.stroke_width(s.stroke_width);
                let label = style.render_label(&s.label);
                let segments = split_finite_segments(&s.data);
                if segments.len() > 1 {
                    debug!("Curve '{}' split into {} segments", label, segments.len());
                }

                for (segment_index, segment) in segments.into_iter().enumerate() {
                    let series = match s.line_style {
                        LineStyle::Solid => chart.draw_series(LineSeries::new(segment, shape))?,
                        LineStyle::Dashed => {
                            let (dash, gap) = DASH_PATTERN_DASHED;
                            chart.draw_series(DashedLineSeries::new(segment, dash, gap, shape))?
                        }
                        LineStyle::Dotted => {
                            let (dash, gap) = DASH_PATTERN_DOTTED;
                            chart.draw_series(DashedLineSeries::new(segment, dash, gap, shape))?
                        }
                    };

                    // Only the first segment carries the legend entry
                    if segment_index == 0 && !label.is_empty() {
                        let spans = s.line_style.legend_spans();
                        series.label(label.clone()).legend(move |(x, y)| {
                            EmptyElement::at((x, y))
                                + PathElement::new(vec![(spans[0].0, 0), (spans[0].1, 0)], shape)
                                + PathElement::new(vec![(spans[1].0, 0), (spans[1].1, 0)], shape)
                                + PathElement::new(vec![(spans[2].0, 0), (spans[2].1, 0)], shape)
                        });
                        legend_series_count += 1;
                    }
                }
            }
            FigureLayer::Markers(m) => {
                let fill = m.color.filled();
                let radius = m.radius;
                let series = chart.draw_series(
                    m.points
                        .iter()
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|&point| Circle::new(point, radius, fill)),
                )?;

                if let Some(label) = &m.label {
                    series
                        .label(style.render_label(label))
                        .legend(move |(x, y)| Circle::new((x + LEGEND_SWATCH_WIDTH / 2, y), radius, fill));
                    legend_series_count += 1;
                }
            }
        }
    }

    if legend_series_count > 0 {
        let legend_font = match config.legend_size {
            LegendSize::Regular => style.legend_font,
            LegendSize::Small => style.legend_font_small,
        };
        chart
            .configure_series_labels()
            .position(config.legend_position.to_series_label_position())
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(legend_font.as_tuple())
            .draw()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sample_grid_endpoints() {
        let grid = sample_grid(-2.0, 3.0, 1000).unwrap();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], -2.0);
        assert_abs_diff_eq!(grid[999], 3.0, epsilon = 1e-12);
        assert!(grid.windows(2).into_iter().all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_sample_grid_rejects_bad_input() {
        assert!(sample_grid(1.0, 1.0, 10).is_err());
        assert!(sample_grid(2.0, 1.0, 10).is_err());
        assert!(sample_grid(0.0, 1.0, 1).is_err());
        assert!(sample_grid(f64::NAN, 1.0, 10).is_err());
    }

    #[test]
    fn test_calculate_range_padding() {
        let r = calculate_range(0.0, 10.0);
        assert_abs_diff_eq!(r.start, -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(r.end, 10.5, epsilon = 1e-12);

        let flat = calculate_range(1.0, 1.0);
        assert_eq!(flat, 0.5..1.5);

        let swapped = calculate_range(10.0, 0.0);
        assert_abs_diff_eq!(swapped.start, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_value_bounds_skips_non_finite() {
        let a = Array1::from(vec![0.5, f64::NAN, 2.0]);
        let b = Array1::from(vec![-1.0, f64::INFINITY]);
        assert_eq!(value_bounds(&[&a, &b]).unwrap(), (-1.0, 2.0));
    }

    #[test]
    fn test_value_bounds_empty_is_error() {
        let a = Array1::from(vec![f64::NAN]);
        assert!(value_bounds(&[&a]).is_err());
    }

    #[test]
    fn test_split_finite_segments() {
        let data = vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 2.0), (3.0, 3.0)];
        let segments = split_finite_segments(&data);
        assert_eq!(segments, vec![vec![(0.0, 1.0)], vec![(2.0, 2.0), (3.0, 3.0)]]);
        assert!(split_finite_segments(&[]).is_empty());
    }
}

// src/plot_framework.rs
