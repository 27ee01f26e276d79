// src/main.rs

use std::error::Error;
use std::path::Path;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use fractional_operator_plots::crate_version;
use fractional_operator_plots::font_config::PlotStyle;
use fractional_operator_plots::plot_functions::plot_compositions::plot_compositions;
use fractional_operator_plots::plot_functions::plot_fractional_integrals::plot_fractional_integrals;
use fractional_operator_plots::plot_functions::plot_orlicz_maximal::plot_orlicz_maximal;

fn main() -> Result<(), Box<dyn Error>> {
    // Progress goes through `tracing`; RUST_LOG overrides the default `info` level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("fractional_operator_plots {}", crate_version());

    // Set once, read-only for every figure.
    let style = PlotStyle::default();
    let output_dir = Path::new(".");

    // Figures are written in order; a failure stops the run and keeps earlier files.
    let written = [
        plot_orlicz_maximal(output_dir, &style)?,
        plot_compositions(output_dir, &style)?,
        plot_fractional_integrals(output_dir, &style)?,
    ];

    info!("Done: {} figures written.", written.len());
    Ok(())
}
