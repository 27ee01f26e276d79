// src/data_analysis/rational_param.rs
//
// Exact rational parameters (alpha, beta) paired with their floating-point value.
// The exact form feeds labels, the float form feeds the formulas.

use std::error::Error;
use std::fmt;

use num_rational::Ratio;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalParam {
    exact: Ratio<i64>,
    value: f64,
}

impl RationalParam {
    /// Creates `numer / denom` in lowest terms.
    pub fn new(numer: i64, denom: i64) -> Result<Self, Box<dyn Error>> {
        if denom == 0 {
            return Err(format!("Invalid rational parameter {numer}/{denom}: zero denominator").into());
        }
        Ok(Self::from_ratio(Ratio::new(numer, denom)))
    }

    fn from_ratio(exact: Ratio<i64>) -> Self {
        let value = *exact.numer() as f64 / *exact.denom() as f64;
        Self { exact, value }
    }

    pub fn exact(&self) -> Ratio<i64> {
        self.exact
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `self + k`, exactly. Figure 2 uses `beta = alpha - 1`.
    pub fn offset(&self, k: i64) -> Self {
        Self::from_ratio(self.exact + Ratio::from_integer(k))
    }

    /// LaTeX form as a symbolic-math package prints it: `\frac{1}{5}`, `- \frac{4}{5}`, `3`.
    pub fn latex(&self) -> String {
        let numer = *self.exact.numer();
        let denom = *self.exact.denom();
        if denom == 1 {
            return numer.to_string();
        }
        let sign = if numer < 0 { "- " } else { "" };
        format!("{sign}\\frac{{{}}}{{{denom}}}", numer.unsigned_abs())
    }
}

impl fmt::Display for RationalParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exact)
    }
}


// src/data_analysis/rational_param.rs
