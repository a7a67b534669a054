//! Sodium-ion integration policy
//!
//! Scores a lithium-ion / sodium-ion capacity mix with fixed weights. Despite
//! the "optimisation" naming this evaluates one mix; it does not search the
//! design space.

use crate::domain::constants::sodium::{self, economics};
use crate::domain::errors::FormulaError;
use crate::domain::values::{Fraction, KilowattHours, UsdPerKwh};
use crate::infrastructure::log_messages;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Capacity and cost of a blended pack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryChemistryMix {
    pub li_capacity_kwh: KilowattHours,
    pub na_capacity_kwh: KilowattHours,
    pub li_cost_per_kwh: UsdPerKwh,
    pub na_cost_per_kwh: UsdPerKwh,
    pub performance_target: Fraction,
}

/// Output of [`compute_sodium_blend`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SodiumBlend {
    pub li_ratio: f64,
    pub na_ratio: f64,
    pub blended_performance: f64,
    pub total_cost: f64,
    pub cost_per_kwh: f64,
    /// Performance per dollar per kWh, scaled by 1000
    pub performance_cost_ratio: f64,
    pub meets_target: bool,
    pub optimization_score: f64,
}

/// Score a chemistry mix
///
/// Fails with [`FormulaError::ZeroTotalCapacity`] when the mix has no capacity.
pub fn compute_sodium_blend(mix: &BatteryChemistryMix) -> Result<SodiumBlend, FormulaError> {
    let li_capacity = mix.li_capacity_kwh.into_inner();
    let na_capacity = mix.na_capacity_kwh.into_inner();
    let total_capacity = li_capacity + na_capacity;

    if total_capacity == 0.0 {
        warn!("{}", log_messages::formulas::ZERO_CAPACITY_BLEND);
        return Err(FormulaError::ZeroTotalCapacity);
    }

    let li_ratio = li_capacity / total_capacity;
    let na_ratio = na_capacity / total_capacity;

    let blended_performance = sodium::ALPHA * sodium::LI_PERFORMANCE * li_ratio
        + sodium::BETA * sodium::NA_PERFORMANCE * na_ratio
        + sodium::GAMMA * sodium::INTEGRATION_BONUS * li_ratio.min(na_ratio) * 2.0;

    let total_cost = li_capacity * mix.li_cost_per_kwh.into_inner()
        + na_capacity * mix.na_cost_per_kwh.into_inner();
    let cost_per_kwh = total_cost / total_capacity;

    let performance_cost_ratio =
        blended_performance / cost_per_kwh * sodium::PERFORMANCE_COST_SCALE;

    let meets_target = blended_performance >= mix.performance_target.into_inner();
    let multiplier = if meets_target {
        sodium::TARGET_MET_MULTIPLIER
    } else {
        sodium::TARGET_MISSED_MULTIPLIER
    };

    debug!(
        li_ratio,
        blended_performance,
        meets_target,
        "Computed sodium blend"
    );

    Ok(SodiumBlend {
        li_ratio,
        na_ratio,
        blended_performance,
        total_cost,
        cost_per_kwh,
        performance_cost_ratio,
        meets_target,
        optimization_score: performance_cost_ratio * multiplier,
    })
}

/// Output of [`compare_sodium_lithium`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemistryEconomics {
    pub battery_cost_sodium: f64,
    pub battery_cost_lithium: f64,
    pub cost_savings: f64,
    pub effective_capacity: f64,
    pub extended_cycle_life: f64,
    pub cost_per_cycle_sodium: f64,
    pub cost_per_cycle_lithium: f64,
    pub annual_savings: f64,
    /// `None` when sodium never pays back
    pub payback_years: Option<f64>,
}

/// Compare an all-sodium pack with an all-lithium pack of the same capacity
pub fn compare_sodium_lithium(
    capacity: KilowattHours,
    cycle_target: u32,
    li_cost_per_kwh: UsdPerKwh,
) -> Result<ChemistryEconomics, FormulaError> {
    if cycle_target == 0 {
        return Err(FormulaError::invalid_input(
            "cycle_target",
            "cycle target must be greater than zero",
        ));
    }

    let capacity = capacity.into_inner();
    let cycles = f64::from(cycle_target);
    let li_cost = li_cost_per_kwh.into_inner();

    let sodium_cost_per_kwh = li_cost * (1.0 - economics::COST_REDUCTION);
    let battery_cost_sodium = capacity * sodium_cost_per_kwh;
    let battery_cost_lithium = capacity * li_cost;

    let effective_capacity = capacity * economics::ENERGY_DENSITY_RATIO;
    let extended_cycle_life = cycles * economics::CYCLE_LIFE_ADVANTAGE;

    let cost_per_cycle_sodium = battery_cost_sodium / extended_cycle_life;
    let cost_per_cycle_lithium = battery_cost_lithium / cycles;

    let cost_savings = battery_cost_lithium - battery_cost_sodium;
    let annual_savings = cost_savings + (cost_per_cycle_lithium - cost_per_cycle_sodium) * 365.0;

    let payback_years = (annual_savings > 0.0)
        .then(|| cost_savings / annual_savings.max(economics::MIN_ANNUAL_SAVINGS));

    Ok(ChemistryEconomics {
        battery_cost_sodium,
        battery_cost_lithium,
        cost_savings,
        effective_capacity,
        extended_cycle_life,
        cost_per_cycle_sodium,
        cost_per_cycle_lithium,
        annual_savings,
        payback_years,
    })
}
