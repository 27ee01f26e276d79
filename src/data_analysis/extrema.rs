// src/data_analysis/extrema.rs
//
// Closed-form maximum of M_alpha(M(chi)) on the right half-line.
//
// For x >= 1 the function is g(x) = x^(alpha-1) (1 + ln x). Setting g'(x) = 0 gives
// ln x0 = alpha / (1 - alpha), so x0 = e^(alpha/(1-alpha)) and g(x0) = e^(-alpha) / (1 - alpha).
// The left branch is the mirror image about x = 1/2, so the second maximum is at 1 - x0.

use std::error::Error;

use crate::data_analysis::rational_param::RationalParam;

/// Symbolic coordinates of the maximum, as printed in the legend.
pub const MAXIMUM_X_LATEX: &str = r"e^{\frac{\alpha}{1 - \alpha}}";
pub const MAXIMUM_Y_LATEX: &str = r"\frac{e^{- \alpha}}{1 - \alpha}";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremalPoint {
    pub x: f64,
    pub y: f64,
}

impl ExtremalPoint {
    /// The matching maximum on the left half-line.
    pub fn mirrored(&self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: self.y,
        }
    }
}

/// Right-hand maximum of M_alpha(M(chi)). Requires 0 < alpha < 1.
pub fn composition_maximum(alpha: &RationalParam) -> Result<ExtremalPoint, Box<dyn Error>> {
    let a = alpha.value();
    if !(a > 0.0 && a < 1.0) {
        return Err(format!("Maximum of M_alpha(M(chi)) needs 0 < alpha < 1, got {alpha}").into());
    }
    // Same arithmetic as the figure: b = alpha - 1, x0 = exp(-a/b), y0 = -exp(-a)/b.
    let b = alpha.offset(-1).value();
    Ok(ExtremalPoint {
        x: (-a / b).exp(),
        y: -(-a).exp() / b,
    })
}

/// Legend text for the marked maxima.
pub fn maximum_label() -> String {
    format!("Max: $(x_0, y_0) = ({MAXIMUM_X_LATEX}, {MAXIMUM_Y_LATEX})$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::operators::fractional_maximal_of_maximal_at;
    use approx::assert_relative_eq;

    #[test]
    fn test_maximum_for_one_fifth() {
        let alpha = RationalParam::new(1, 5).unwrap();
        let p = composition_maximum(&alpha).unwrap();
        assert_relative_eq!(p.x, 0.25f64.exp(), epsilon = 1e-12);
        assert_relative_eq!(p.y, (-0.2f64).exp() / 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_maximum_lies_on_curve() {
        let alpha = RationalParam::new(1, 5).unwrap();
        let b = alpha.offset(-1).value();
        let p = composition_maximum(&alpha).unwrap();
        assert_relative_eq!(fractional_maximal_of_maximal_at(p.x, b), p.y, epsilon = 1e-9);
        let q = p.mirrored();
        assert_relative_eq!(fractional_maximal_of_maximal_at(q.x, b), q.y, epsilon = 1e-9);
    }

    #[test]
    fn test_maximum_is_local_max() {
        let alpha = RationalParam::new(2, 3).unwrap();
        let b = alpha.offset(-1).value();
        let p = composition_maximum(&alpha).unwrap();
        for h in [1e-2, 1e-3] {
            assert!(fractional_maximal_of_maximal_at(p.x + h, b) < p.y);
            assert!(fractional_maximal_of_maximal_at(p.x - h, b) < p.y);
        }
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        assert!(composition_maximum(&RationalParam::new(1, 1).unwrap()).is_err());
        assert!(composition_maximum(&RationalParam::new(-1, 2).unwrap()).is_err());
    }

    #[test]
    fn test_label_text() {
        assert_eq!(
            crate::tex::to_text(&maximum_label()),
            "Max: (x₀, y₀) = (e^(α/(1 - α)), e⁻ᵅ/(1 - α))"
        );
    }
}

// src/data_analysis/extrema.rs
