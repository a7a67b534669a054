//! Explicit tunables threaded through formula calls
//!
//! Each formula family receives its parameters by reference. Nothing here is
//! global or mutable; a dashboard slider produces a new parameter value and
//! passes it into the next call.

use crate::domain::constants::{carbon, charging, swap};
use crate::domain::values::{CreditRate, Fraction, GridIntensity, Seconds, UsdPerTonne};
use serde::{Deserialize, Serialize};

/// Parameters of the carbon credit formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonParameters {
    pub charging_efficiency: Fraction,
    pub grid_intensity: GridIntensity,
    pub base_rate: CreditRate,
    /// Telemetry accuracy threshold
    pub accuracy: Fraction,
    /// Verification confidence level
    pub confidence: Fraction,
    pub carbon_price: UsdPerTonne,
    /// Clean share of the charging mix when a session does not report one
    pub default_clean_energy_ratio: Fraction,
}

impl Default for CarbonParameters {
    fn default() -> Self {
        Self {
            charging_efficiency: Fraction::try_new(carbon::DEFAULT_CHARGING_EFFICIENCY)
                .expect("Default charging efficiency is valid"),
            grid_intensity: GridIntensity::try_new(carbon::DEFAULT_GRID_INTENSITY)
                .expect("Default grid intensity is valid"),
            base_rate: CreditRate::try_new(carbon::DEFAULT_BASE_CREDIT_RATE)
                .expect("Default credit rate is valid"),
            accuracy: Fraction::try_new(carbon::DEFAULT_ACCURACY_THRESHOLD)
                .expect("Default accuracy is valid"),
            confidence: Fraction::try_new(carbon::DEFAULT_VERIFICATION_CONFIDENCE)
                .expect("Default confidence is valid"),
            carbon_price: UsdPerTonne::try_new(carbon::DEFAULT_CARBON_PRICE_PER_TONNE)
                .expect("Default carbon price is valid"),
            default_clean_energy_ratio: Fraction::try_new(carbon::DEFAULT_CLEAN_ENERGY_RATIO)
                .expect("Default clean energy ratio is valid"),
        }
    }
}

/// Coefficients of the degradation-aware charging formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegradationParameters {
    /// Annual degradation before temperature, depth and cycling effects
    pub base_rate: f64,
    /// Per degree above 25 °C
    pub temperature_coefficient: f64,
    /// Per percent of target state of charge
    pub depth_of_discharge_coefficient: f64,
    /// Per completed cycle
    pub cycle_coefficient: f64,
    pub charging_efficiency: Fraction,
}

impl Default for DegradationParameters {
    fn default() -> Self {
        Self {
            base_rate: charging::DEFAULT_BASE_DEGRADATION_RATE,
            temperature_coefficient: charging::DEFAULT_TEMPERATURE_COEFFICIENT,
            depth_of_discharge_coefficient: charging::DEFAULT_DEPTH_OF_DISCHARGE_COEFFICIENT,
            cycle_coefficient: charging::DEFAULT_CYCLE_COEFFICIENT,
            charging_efficiency: Fraction::try_new(carbon::DEFAULT_CHARGING_EFFICIENCY)
                .expect("Default charging efficiency is valid"),
        }
    }
}

/// Parameters of the swap-station integrity formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapParameters {
    /// Time to complete one battery swap
    pub swap_time: Seconds,
}

impl Default for SwapParameters {
    fn default() -> Self {
        Self {
            swap_time: Seconds::try_new(swap::DEFAULT_SWAP_TIME_SECONDS)
                .expect("Default swap time is valid"),
        }
    }
}

/// All formula tunables, as loaded from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaParameters {
    pub carbon: CarbonParameters,
    pub degradation: DegradationParameters,
    pub swap: SwapParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_values() {
        let params = FormulaParameters::default();
        assert_eq!(params.carbon.carbon_price.into_inner(), 25.0);
        assert_eq!(params.carbon.charging_efficiency.into_inner(), 0.92);
        assert_eq!(params.carbon.grid_intensity.into_inner(), 0.4);
        assert_eq!(params.degradation.base_rate, 0.02);
        assert_eq!(params.swap.swap_time.into_inner(), 90.0);
    }

    #[test]
    fn test_parameters_roundtrip_through_json() {
        let params = FormulaParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: FormulaParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_out_of_range_parameter_is_rejected() {
        let mut json = serde_json::to_value(FormulaParameters::default()).unwrap();
        json["carbon"]["accuracy"] = serde_json::json!(1.5);
        assert!(serde_json::from_value::<FormulaParameters>(json).is_err());
    }
}
