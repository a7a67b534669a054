//! Guarded division results
//!
//! Formulas that divide by a caller-controlled quantity return a [`Quotient`]
//! so that a genuinely computed zero can be told apart from a ratio that is
//! undefined because its denominator was zero.

use serde::{Deserialize, Serialize};

/// The result of a division whose denominator may be zero
///
/// Serialises as a JSON number, or `null` when the denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Quotient {
    /// The division was performed
    Computed(f64),
    /// The denominator was zero; the ratio is undefined
    ZeroDenominator,
}

impl Quotient {
    /// Divide `numerator` by `denominator`, refusing a zero denominator
    pub fn divide(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Self::ZeroDenominator
        } else {
            Self::Computed(numerator / denominator)
        }
    }

    /// The computed value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Computed(value) => Some(*value),
            Self::ZeroDenominator => None,
        }
    }

    /// The value shown on a dashboard: undefined ratios display as zero
    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Whether the denominator was zero
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::ZeroDenominator)
    }

    /// Transform a computed value, leaving an undefined one alone
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Computed(value) => Self::Computed(f(value)),
            Self::ZeroDenominator => Self::ZeroDenominator,
        }
    }
}

impl From<Quotient> for Option<f64> {
    fn from(quotient: Quotient) -> Self {
        quotient.value()
    }
}

impl From<Option<f64>> for Quotient {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::ZeroDenominator, Self::Computed)
    }
}
