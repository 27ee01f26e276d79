// src/lib.rs - Library interface for the function library and figure assembler

pub mod constants;
pub mod data_analysis;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod tex;
pub mod types;

// Crate version as declared in Cargo.toml.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_version_matches_manifest() {
        assert!(!crate_version().is_empty());
        assert_eq!(crate_version(), env!("CARGO_PKG_VERSION"));
    }
}
