// tests/figure_assembly_test.rs

use std::path::Path;

use fractional_operator_plots::constants::{
    COMPOSITION_INTERVAL, FRACTIONAL_INTERVAL, ORLICZ_INTERVAL, SAMPLE_COUNT,
};
use fractional_operator_plots::data_analysis::rational_param::RationalParam;
use fractional_operator_plots::plot_framework::{
    FigureConfig, FigureLayer, LegendPosition, LegendSize, LineStyle,
};
use fractional_operator_plots::plot_functions::plot_compositions::build_compositions_figure;
use fractional_operator_plots::plot_functions::plot_fractional_integrals::build_fractional_integrals_figure;
use fractional_operator_plots::plot_functions::plot_orlicz_maximal::build_orlicz_maximal_figure;
use fractional_operator_plots::plot_functions::{
    output_path, plot_compositions, plot_fractional_integrals, plot_orlicz_maximal,
};
use fractional_operator_plots::tex::to_text;

fn legend_texts(config: &FigureConfig) -> Vec<String> {
    config
        .layers
        .iter()
        .filter_map(|layer| match layer {
            FigureLayer::Curve(series) => Some(series.label.as_str()),
            FigureLayer::Markers(markers) => markers.label.as_deref(),
        })
        .map(to_text)
        .collect()
}

fn assert_all_points_inside(config: &FigureConfig) {
    for series in config.curves() {
        for &(x, y) in &series.data {
            assert!(config.x_range.contains(&x), "x = {x} outside {:?}", config.x_range);
            assert!(config.y_range.contains(&y), "y = {y} outside {:?}", config.y_range);
        }
    }
    for markers in config.markers() {
        for &(x, y) in &markers.points {
            assert!(config.x_range.contains(&x) && config.y_range.contains(&y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orlicz_figure_layout() {
        let config = build_orlicz_maximal_figure(ORLICZ_INTERVAL).unwrap();

        assert_eq!(to_text(&config.title), "The range is -14 ≤ x ≤ 15");
        assert_eq!(
            legend_texts(&config),
            vec!["y = Mₑₓₚ(χ[0,1])(x)", "y = M(χ[0,1])(x)", "y = χ[0,1](x)"]
        );

        let styles: Vec<LineStyle> = config.curves().map(|s| s.line_style).collect();
        assert_eq!(styles, vec![LineStyle::Dashed, LineStyle::Dotted, LineStyle::Solid]);
        assert!(config.curves().all(|s| s.data.len() == SAMPLE_COUNT));
        assert_eq!(config.legend_position, LegendPosition::UpperRight);
        assert_eq!(config.legend_size, LegendSize::Regular);
        assert_all_points_inside(&config);
    }

    #[test]
    fn test_compositions_figure_layout() {
        let alpha = RationalParam::new(1, 5).unwrap();
        let config = build_compositions_figure(COMPOSITION_INTERVAL, &alpha).unwrap();

        assert_eq!(to_text(&config.title), "The case of α=1/5 on -3 ≤ x ≤ 4");
        assert_eq!(
            legend_texts(&config),
            vec![
                "y=M²(χ[0,1])(x)",
                "y=M ∘ Mα(χ[0,1])(x)",
                "y=Mα ∘ M(χ[0,1])(x)",
                "Max: (x₀, y₀) = (e^(α/(1 - α)), e⁻ᵅ/(1 - α))",
                "y = χ[0,1](x)",
            ]
        );
        assert_eq!(config.legend_position, LegendPosition::LowerRight);
        assert_eq!(config.legend_size, LegendSize::Small);

        // The indicator is drawn last, on top of everything else.
        assert!(matches!(config.layers.last(), Some(FigureLayer::Curve(s)) if s.stroke_width > 2));

        let markers: Vec<_> = config.markers().collect();
        assert_eq!(markers.len(), 1);
        let points = &markers[0].points;
        assert_eq!(points.len(), 2);
        assert!((points[0].0 + points[1].0 - 1.0).abs() < 1e-12);
        assert_eq!(points[0].1, points[1].1);
        assert!((points[0].0 - 0.25f64.exp()).abs() < 1e-12);
        assert_all_points_inside(&config);
    }

    #[test]
    fn test_fractional_integrals_figure_layout() {
        let alpha = RationalParam::new(2, 3).unwrap();
        let config = build_fractional_integrals_figure(FRACTIONAL_INTERVAL, &alpha).unwrap();

        assert_eq!(to_text(&config.title), "The case of α = 2/3 on -2 ≤ x ≤ 3");
        assert_eq!(
            legend_texts(&config),
            vec!["y = Iα[χ[0,1]](x)", "y = Mα[χ[0,1]](x)", "y = χ[0,1](x)"]
        );
        assert_eq!(config.markers().count(), 0);
        assert_eq!(config.legend_position, LegendPosition::UpperRight);
        assert_all_points_inside(&config);
    }

    #[test]
    fn test_figures_are_reproducible() {
        let alpha = RationalParam::new(1, 5).unwrap();
        assert_eq!(
            build_compositions_figure(COMPOSITION_INTERVAL, &alpha).unwrap(),
            build_compositions_figure(COMPOSITION_INTERVAL, &alpha).unwrap()
        );
        assert_eq!(
            build_orlicz_maximal_figure(ORLICZ_INTERVAL).unwrap(),
            build_orlicz_maximal_figure(ORLICZ_INTERVAL).unwrap()
        );
    }

    #[test]
    fn test_invalid_parameters_are_errors() {
        let alpha = RationalParam::new(3, 2).unwrap();
        assert!(build_compositions_figure(COMPOSITION_INTERVAL, &alpha).is_err());
        assert!(build_orlicz_maximal_figure((1.0, -1.0)).is_err());
    }

    #[test]
    fn test_output_file_names() {
        let dir = Path::new("out");
        assert_eq!(
            output_path(dir, plot_orlicz_maximal::OUTPUT_FILE_STEM),
            dir.join("Orlicz_maximal_functions.pdf")
        );
        assert_eq!(
            output_path(dir, plot_compositions::OUTPUT_FILE_STEM),
            dir.join("MalpM_and_MMalp.pdf")
        );
        assert_eq!(
            output_path(dir, plot_fractional_integrals::OUTPUT_FILE_STEM),
            dir.join("Fractional_integrals.pdf")
        );
    }
}
