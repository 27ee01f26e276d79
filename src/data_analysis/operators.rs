// src/data_analysis/operators.rs
//
// Closed-form values of maximal, fractional and composed operators applied to the
// indicator function of the unit interval. Every operator is piecewise over the
// open interval (0, 1), the left half-line x <= 0 and the right half-line x >= 1.

use ndarray::Array1;

use crate::constants::BOUNDARY_EPSILON;

/// Position of a sample relative to the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// x <= 0
    Left,
    /// 0 < x < 1
    Inside,
    /// everything else, including x >= 1 and NaN
    Right,
}

/// Boundary points are outside: both comparisons are strict.
pub fn region_of(x: f64) -> Region {
    if x > 0.0 && x < 1.0 {
        Region::Inside
    } else if x <= 0.0 {
        Region::Left
    } else {
        Region::Right
    }
}

/// Distance from the midpoint of the unit interval.
fn distance_from_center(x: f64) -> f64 {
    (x - 0.5).abs()
}

// --- Pointwise evaluators ---

/// Indicator of (0, 1).
pub fn chi_at(x: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left | Region::Right => 0.0,
    }
}

/// Orlicz maximal function of exponential type, M_exp(chi).
pub fn orlicz_maximal_at(x: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0 / std::f64::consts::LN_2,
        Region::Left | Region::Right => 1.0 / (1.5 + distance_from_center(x)).ln(),
    }
}

/// Hardy-Littlewood maximal function, M(chi).
pub fn hardy_littlewood_maximal_at(x: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left | Region::Right => 1.0 / (0.5 + distance_from_center(x)),
    }
}

/// Iterated maximal function, M(M(chi)).
pub fn iterated_maximal_at(x: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left | Region::Right => {
            let d = distance_from_center(x);
            (1.0 + (d + 0.5).ln()) / (0.5 + d)
        }
    }
}

/// M(M_alpha(chi)) with `alpha = a`.
pub fn maximal_of_fractional_maximal_at(x: f64, a: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left => (1.0 - 1.0 / a + (1.0 - x).powf(a) / a) / (1.0 - x + BOUNDARY_EPSILON),
        Region::Right => (1.0 - 1.0 / a + x.powf(a) / a) / (x + BOUNDARY_EPSILON),
    }
}

/// M_alpha(M(chi)), parameterised by the decay exponent `b = alpha - 1`.
pub fn fractional_maximal_of_maximal_at(x: f64, b: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left => (1.0 - x).powf(b) * (1.0 + (1.0 - x + BOUNDARY_EPSILON).ln()),
        Region::Right => x.powf(b) * (1.0 + (x + BOUNDARY_EPSILON).ln()),
    }
}

/// Fractional integral I_alpha(chi) with `alpha = a`.
pub fn fractional_integral_at(x: f64, a: f64) -> f64 {
    match region_of(x) {
        Region::Inside => (x.powf(a) + (1.0 - x).powf(a)) / a,
        Region::Left => ((1.0 - x).powf(a) - x.abs().powf(a)) / a,
        Region::Right => (x.powf(a) - (x - 1.0).powf(a)) / a,
    }
}

/// Fractional maximal function M_alpha(chi) with `alpha = a`.
pub fn fractional_maximal_at(x: f64, a: f64) -> f64 {
    match region_of(x) {
        Region::Inside => 1.0,
        Region::Left => (1.0 - x).powf(a - 1.0),
        Region::Right => x.powf(a - 1.0),
    }
}

// --- Array evaluators ---

pub fn chi(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(chi_at)
}

pub fn orlicz_maximal(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(orlicz_maximal_at)
}

pub fn hardy_littlewood_maximal(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(hardy_littlewood_maximal_at)
}

pub fn iterated_maximal(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(iterated_maximal_at)
}

pub fn maximal_of_fractional_maximal(x: &Array1<f64>, a: f64) -> Array1<f64> {
    x.mapv(|t| maximal_of_fractional_maximal_at(t, a))
}

pub fn fractional_maximal_of_maximal(x: &Array1<f64>, b: f64) -> Array1<f64> {
    x.mapv(|t| fractional_maximal_of_maximal_at(t, b))
}

pub fn fractional_integral(x: &Array1<f64>, a: f64) -> Array1<f64> {
    x.mapv(|t| fractional_integral_at(t, a))
}

pub fn fractional_maximal(x: &Array1<f64>, a: f64) -> Array1<f64> {
    x.mapv(|t| fractional_maximal_at(t, a))
}


// src/data_analysis/operators.rs
