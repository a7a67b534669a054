//! Depreciation/appreciation blender for a single vehicle
//!
//! The vehicle body depreciates quadratically, the battery linearly and the
//! software appreciates with updates. The integrated system earns a synergy
//! premium over a conventional vehicle of the same price and age.

use crate::domain::constants::{portfolio::depreciation, units};
use crate::domain::quotient::Quotient;
use crate::domain::values::Usd;
use serde::{Deserialize, Serialize};

/// Output of [`compute_depreciation_blend`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationBlend {
    pub current_vehicle_value: f64,
    pub current_battery_value: f64,
    pub current_software_value: f64,
    pub blended_value: f64,
    /// Value of a conventional vehicle of the same price and age
    pub traditional_value: f64,
    pub premium: f64,
    /// Premium over the traditional value; undefined once that reaches zero
    pub premium_pct: Quotient,
}

pub fn compute_depreciation_blend(
    vehicle_price: Usd,
    battery_value: Usd,
    software_value: Usd,
    age_months: u32,
) -> DepreciationBlend {
    let years = f64::from(age_months) / units::MONTHS_PER_YEAR;

    let vehicle_depreciation = depreciation::VEHICLE_LINEAR_RATE * years
        + depreciation::VEHICLE_QUADRATIC_RATE * years.powi(2);
    let battery_depreciation = depreciation::BATTERY_LINEAR_RATE * years;
    let software_appreciation = depreciation::SOFTWARE_APPRECIATION_RATE * years;

    let current_vehicle_value = vehicle_price.into_inner() * (1.0 - vehicle_depreciation);
    let current_battery_value = battery_value.into_inner() * (1.0 - battery_depreciation);
    let current_software_value = software_value.into_inner() * (1.0 + software_appreciation);

    let blended_value = (current_vehicle_value + current_battery_value + current_software_value)
        * depreciation::SYNERGY_FACTOR;

    let traditional_value =
        vehicle_price.into_inner() * (1.0 - depreciation::TRADITIONAL_DEPRECIATION_RATE * years);
    let premium = blended_value - traditional_value;

    DepreciationBlend {
        current_vehicle_value,
        current_battery_value,
        current_software_value,
        blended_value,
        traditional_value,
        premium,
        premium_pct: Quotient::divide(premium, traditional_value).map(|ratio| ratio * 100.0),
    }
}
