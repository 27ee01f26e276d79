// src/types.rs
// Type aliases shared by the function library and the figure assembler

use ndarray::Array1;

// Evenly spaced sample points over a closed interval
pub type SampleGrid = Array1<f64>;

// Output of an operator, same length and order as its grid
pub type FunctionValues = Array1<f64>;

// (x, y) pairs as handed to the plotting backend
pub type SeriesData = Vec<(f64, f64)>;

// src/types.rs
