// src/constants.rs

use plotters::style::RGBColor;

// Page size: A4 landscape (11.69 x 8.27 in) at 100 dpi.
pub const PLOT_WIDTH: u32 = 1169;
pub const PLOT_HEIGHT: u32 = 827;
pub const PLOT_DPI: f64 = 100.0;

// Figure margins in pixels. Kept small since the SVG backend has no tight bounding box.
pub const PLOT_MARGIN: u32 = 15;
pub const X_LABEL_AREA_SIZE: u32 = 70;
pub const Y_LABEL_AREA_SIZE: u32 = 80;

// Font sizes in points; converted to pixels through PLOT_DPI.
pub const FONT_SIZE_TITLE_PT: f64 = 20.0;
pub const FONT_SIZE_AXIS_LABEL_PT: f64 = 20.0;
pub const FONT_SIZE_TICK_LABEL_PT: f64 = 14.0;
pub const FONT_SIZE_LEGEND_PT: f64 = 14.0;
pub const FONT_SIZE_LEGEND_SMALL_PT: f64 = 12.0;

// Number of samples in every grid.
pub const SAMPLE_COUNT: usize = 1000;

// Additive guard for denominators and logarithms that vanish at x = 0 or x = 1.
pub const BOUNDARY_EPSILON: f64 = 1e-15;

// Fraction of the data span added on each side of both axes.
pub const AXIS_PADDING_FRACTION: f64 = 0.05;

// --- Figure 1: Orlicz vs Hardy-Littlewood ---
pub const ORLICZ_INTERVAL: (f64, f64) = (-14.0, 15.0);

// --- Figure 2: compositions of M and M_alpha ---
pub const COMPOSITION_INTERVAL: (f64, f64) = (-3.0, 4.0);
pub const COMPOSITION_ALPHA: (i64, i64) = (1, 5);

// --- Figure 3: fractional integral and fractional maximal ---
pub const FRACTIONAL_INTERVAL: (f64, f64) = (-2.0, 3.0);
pub const FRACTIONAL_ALPHA: (i64, i64) = (2, 3);

// --- Grey levels (matplotlib "0.1" and "0.4") ---
pub const COLOR_CURVE_DARK: RGBColor = RGBColor(26, 26, 26);
pub const COLOR_CURVE_MEDIUM: RGBColor = RGBColor(102, 102, 102);
pub const COLOR_MARKER: RGBColor = RGBColor(0, 0, 0);
pub const COLOR_GRID: RGBColor = RGBColor(176, 176, 176);
pub const GRID_ALPHA: f64 = 0.6;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_INDICATOR: u32 = 4;
pub const MARKER_RADIUS: u32 = 8;

// Dash patterns in pixels: (dash length, gap length).
pub const DASH_PATTERN_DASHED: (u32, u32) = (14, 8);
pub const DASH_PATTERN_DOTTED: (u32, u32) = (2, 5);

// src/constants.rs
