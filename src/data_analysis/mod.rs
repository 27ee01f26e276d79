// src/data_analysis/mod.rs

pub mod extrema;
pub mod operators;
pub mod rational_param;

// src/data_analysis/mod.rs
