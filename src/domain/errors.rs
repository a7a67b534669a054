//! Error types for formula calculations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a formula can report instead of producing a number
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormulaError {
    /// A chemistry mix with no capacity at all has no ratios to blend
    #[error("No capacity specified: lithium-ion and sodium-ion capacity are both zero")]
    ZeroTotalCapacity,

    /// An input was outside the range the formula accepts
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl FormulaError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(FormulaError::ZeroTotalCapacity
            .to_string()
            .contains("No capacity specified"));

        let err = FormulaError::invalid_input("capacity_kwh", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid input for capacity_kwh: must be greater than zero"
        );
    }
}
