//! Carbon credit calculation from metered charging sessions
//!
//! Credits are issued on the effective (post-efficiency) energy delivered and
//! discounted by the MRV quality factor. The monetary value is computed
//! separately from avoided grid emissions.

use crate::domain::constants::units;
use crate::domain::parameters::CarbonParameters;
use crate::domain::quotient::Quotient;
use crate::domain::values::{Fraction, GridIntensity, KilowattHours, UsdPerTonne};
use crate::domain::vehicle::VehicleClass;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A metered charging session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargingSession {
    pub energy_kwh: KilowattHours,
    pub vehicle_class: VehicleClass,
    pub clean_energy_ratio: Fraction,
}

impl ChargingSession {
    /// Credits earned by this session
    pub fn carbon_credits(&self, params: &CarbonParameters) -> CarbonCredits {
        compute_carbon_credits(self.energy_kwh, self.clean_energy_ratio, params)
    }
}

/// Output of [`compute_carbon_credits`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonCredits {
    pub energy_delivered: f64,
    pub avoided_emissions_kg: f64,
    pub base_credits: f64,
    pub verified_credits: f64,
    pub quality_factor: f64,
    pub carbon_value_usd: f64,
    /// Verified credits per delivered kWh; undefined for an empty session
    pub credit_rate: Quotient,
}

/// Carbon credits for `energy_kwh` delivered with a given clean-energy share
pub fn compute_carbon_credits(
    energy_kwh: KilowattHours,
    clean_ratio: Fraction,
    params: &CarbonParameters,
) -> CarbonCredits {
    let energy = energy_kwh.into_inner();

    let avoided_emissions_kg =
        energy * params.grid_intensity.into_inner() * clean_ratio.into_inner();

    let effective_energy = energy * params.charging_efficiency.into_inner();
    let base_credits = effective_energy * params.base_rate.into_inner();

    let quality_factor = params.accuracy.into_inner() * params.confidence.into_inner();
    let verified_credits = base_credits * quality_factor;

    let carbon_value_usd =
        avoided_emissions_kg * params.carbon_price.into_inner() / units::KG_PER_TONNE;

    debug!(
        energy,
        verified_credits,
        carbon_value_usd,
        "Computed carbon credits"
    );

    CarbonCredits {
        energy_delivered: energy,
        avoided_emissions_kg,
        base_credits,
        verified_credits,
        quality_factor,
        carbon_value_usd,
        credit_rate: Quotient::divide(verified_credits, energy),
    }
}

/// Output of [`compute_fleet_carbon_revenue`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetCarbonRevenue {
    pub annual_kwh: f64,
    pub avoided_emissions_tonnes: f64,
    pub annual_revenue_usd: f64,
    pub revenue_per_vehicle: Quotient,
}

/// Annual carbon revenue of a whole fleet charging on the grid
pub fn compute_fleet_carbon_revenue(
    vehicles: u32,
    kwh_per_charge: KilowattHours,
    charges_per_month: u32,
    carbon_price: UsdPerTonne,
    grid_intensity: GridIntensity,
) -> FleetCarbonRevenue {
    let monthly_kwh =
        f64::from(vehicles) * kwh_per_charge.into_inner() * f64::from(charges_per_month);
    let annual_kwh = monthly_kwh * units::MONTHS_PER_YEAR;

    let avoided_emissions_tonnes = annual_kwh * grid_intensity.into_inner() / units::KG_PER_TONNE;
    let annual_revenue_usd = avoided_emissions_tonnes * carbon_price.into_inner();

    FleetCarbonRevenue {
        annual_kwh,
        avoided_emissions_tonnes,
        annual_revenue_usd,
        revenue_per_vehicle: Quotient::divide(annual_revenue_usd, f64::from(vehicles)),
    }
}
