// src/font_config.rs

// Rendering configuration shared by every figure.
// Built once at startup and passed by reference to the renderer; never mutated afterwards.

use crate::constants::{
    FONT_SIZE_AXIS_LABEL_PT, FONT_SIZE_LEGEND_PT, FONT_SIZE_LEGEND_SMALL_PT,
    FONT_SIZE_TICK_LABEL_PT, FONT_SIZE_TITLE_PT, PLOT_DPI, PLOT_HEIGHT, PLOT_MARGIN, PLOT_WIDTH,
};

/// Font family name for default system fonts
pub const FONT_FAMILY_SYSTEM: &str = "serif";

/// How LaTeX label sources reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathRendering {
    /// Convert the LaTeX subset to Unicode text (`\alpha` -> `α`, `^{2}` -> `²`).
    Unicode,
    /// Pass label sources through untouched.
    Raw,
}

/// Represents a font style (family + size) for consistent usage throughout the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size: i32,
}

impl FontStyle {
    /// Builds a style from a point size at the configured resolution.
    pub fn from_points(family: &'static str, points: f64, dpi: f64) -> Self {
        Self {
            family,
            size: points_to_pixels(points, dpi),
        }
    }

    /// Tuple form accepted by plotters' `IntoFont`.
    pub fn as_tuple(&self) -> (&'static str, i32) {
        (self.family, self.size)
    }
}

/// Process-wide plot styling.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub math_rendering: MathRendering,
    pub title_font: FontStyle,
    pub axis_label_font: FontStyle,
    pub tick_label_font: FontStyle,
    pub legend_font: FontStyle,
    pub legend_font_small: FontStyle,
}

impl PlotStyle {
    /// Renders a label source according to `math_rendering`.
    pub fn render_label(&self, source: &str) -> String {
        match self.math_rendering {
            MathRendering::Unicode => crate::tex::to_text(source),
            MathRendering::Raw => source.to_string(),
        }
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            margin: PLOT_MARGIN,
            math_rendering: MathRendering::Unicode,
            title_font: FontStyle::from_points(FONT_FAMILY_SYSTEM, FONT_SIZE_TITLE_PT, PLOT_DPI),
            axis_label_font: FontStyle::from_points(
                FONT_FAMILY_SYSTEM,
                FONT_SIZE_AXIS_LABEL_PT,
                PLOT_DPI,
            ),
            tick_label_font: FontStyle::from_points(
                FONT_FAMILY_SYSTEM,
                FONT_SIZE_TICK_LABEL_PT,
                PLOT_DPI,
            ),
            legend_font: FontStyle::from_points(FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND_PT, PLOT_DPI),
            legend_font_small: FontStyle::from_points(
                FONT_FAMILY_SYSTEM,
                FONT_SIZE_LEGEND_SMALL_PT,
                PLOT_DPI,
            ),
        }
    }
}

/// Plotters divides a requested font size by this factor before emitting it.
pub const PLOTTERS_FONT_SCALE: f64 = 1.24;

/// Size to request from plotters so that the emitted glyphs measure `points`
/// at `dpi` (1 pt = 1/72 in).
pub fn points_to_pixels(points: f64, dpi: f64) -> i32 {
    (points * dpi / 72.0 * PLOTTERS_FONT_SCALE).round() as i32
}

/// Size plotters actually writes for a requested font size.
pub fn rendered_pixels(requested: i32) -> f64 {
    f64::from(requested) / PLOTTERS_FONT_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_pixels() {
        assert_eq!(points_to_pixels(72.0, 100.0), 124);
        assert_eq!(points_to_pixels(20.0, 100.0), 34);
        assert_eq!(points_to_pixels(14.0, 100.0), 24);
        assert_eq!(points_to_pixels(12.0, 100.0), 21);
    }

    #[test]
    fn test_rendered_size_matches_point_size() {
        for points in [12.0, 14.0, 20.0] {
            let expected = points * PLOT_DPI / 72.0;
            let rendered = rendered_pixels(points_to_pixels(points, PLOT_DPI));
            assert!((rendered - expected).abs() < 0.5, "{points} pt -> {rendered} px");
        }
    }

    #[test]
    fn test_default_style_is_a4_landscape() {
        let style = PlotStyle::default();
        assert_eq!((style.width, style.height), (1169, 827));
        assert_eq!(style.math_rendering, MathRendering::Unicode);
        assert!(style.legend_font_small.size < style.legend_font.size);
    }

    #[test]
    fn test_raw_rendering_passes_through() {
        let style = PlotStyle {
            math_rendering: MathRendering::Raw,
            ..PlotStyle::default()
        };
        assert_eq!(style.render_label(r"$\alpha$"), r"$\alpha$");
        assert_eq!(PlotStyle::default().render_label(r"$\alpha$"), "α");
    }
}

// src/font_config.rs
