//! Degradation-aware charging orchestration
//!
//! Two views of the same problem: a one-year degradation projection that
//! recommends a charging rate and credit-yield multiplier, and a simpler
//! temperature-banded C-rate plan that estimates life extension savings.

use crate::domain::constants::charging::{self, plan};
use crate::domain::errors::FormulaError;
use crate::domain::parameters::DegradationParameters;
use crate::domain::quotient::Quotient;
use crate::domain::values::{Celsius, KilowattHours, Percentage, StateOfHealth};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of a battery pack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBatteryState")]
pub struct BatteryState {
    capacity_kwh: KilowattHours,
    state_of_health: StateOfHealth,
    temperature_c: Celsius,
    target_soc_pct: Percentage,
    cycles_completed: u64,
}

#[derive(Deserialize)]
struct RawBatteryState {
    capacity_kwh: KilowattHours,
    state_of_health: StateOfHealth,
    temperature_c: Celsius,
    target_soc_pct: Percentage,
    cycles_completed: u64,
}

impl TryFrom<RawBatteryState> for BatteryState {
    type Error = FormulaError;

    fn try_from(raw: RawBatteryState) -> Result<Self, Self::Error> {
        Self::new(
            raw.capacity_kwh,
            raw.state_of_health,
            raw.temperature_c,
            raw.target_soc_pct,
            raw.cycles_completed,
        )
    }
}

impl BatteryState {
    /// A pack snapshot; capacity must be strictly positive
    pub fn new(
        capacity_kwh: KilowattHours,
        state_of_health: StateOfHealth,
        temperature_c: Celsius,
        target_soc_pct: Percentage,
        cycles_completed: u64,
    ) -> Result<Self, FormulaError> {
        if capacity_kwh.into_inner() <= 0.0 {
            return Err(FormulaError::invalid_input(
                "capacity_kwh",
                "battery capacity must be greater than zero",
            ));
        }
        Ok(Self {
            capacity_kwh,
            state_of_health,
            temperature_c,
            target_soc_pct,
            cycles_completed,
        })
    }

    pub fn capacity_kwh(&self) -> KilowattHours {
        self.capacity_kwh
    }

    pub fn state_of_health(&self) -> StateOfHealth {
        self.state_of_health
    }

    pub fn temperature_c(&self) -> Celsius {
        self.temperature_c
    }

    pub fn target_soc_pct(&self) -> Percentage {
        self.target_soc_pct
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }
}

/// Output of [`compute_optimal_charging`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargingRecommendation {
    /// Recommended rate as a fraction of C
    pub optimal_rate: f64,
    pub energy_delivered: f64,
    pub credit_yield_multiplier: f64,
    pub current_soh: f64,
    /// Never below 0.6
    pub projected_soh_1yr: f64,
    pub degradation_rate: f64,
    pub temp_impact: f64,
    pub cycle_impact: f64,
}

/// Recommend a charging rate and project SOH one year ahead
///
/// This is a single-step projection, not a time-series simulation.
pub fn compute_optimal_charging(
    battery: &BatteryState,
    params: &DegradationParameters,
) -> ChargingRecommendation {
    let soh = battery.state_of_health.into_inner();
    let temperature = battery.temperature_c.into_inner();
    let target_soc = battery.target_soc_pct.into_inner();
    let above_reference = temperature - charging::REFERENCE_TEMPERATURE_C;

    let temp_impact = (above_reference * params.temperature_coefficient).max(0.0);
    let dod_impact = target_soc * params.depth_of_discharge_coefficient;
    // Cycle counts stay far below 2^53, so the conversion is exact.
    let cycle_impact = battery.cycles_completed as f64 * params.cycle_coefficient;
    let degradation_rate = params.base_rate + temp_impact + dod_impact + cycle_impact;

    let temp_factor = (1.0 - above_reference / charging::TEMPERATURE_DERATING_SPAN_C)
        .max(charging::MIN_TEMPERATURE_FACTOR);
    let optimal_rate = charging::BASE_C_RATE * soh * temp_factor;

    let energy_delivered = battery.capacity_kwh.into_inner() * target_soc / 100.0;

    let soh_multiplier = 1.0 + (soh - charging::SOH_YIELD_PIVOT) * charging::SOH_YIELD_SLOPE;
    let credit_yield_multiplier = soh_multiplier * params.charging_efficiency.into_inner();

    let projected_soh_1yr = (soh - degradation_rate).max(charging::MIN_PROJECTED_SOH);

    debug!(
        optimal_rate,
        degradation_rate,
        projected_soh_1yr,
        "Computed charging recommendation"
    );

    ChargingRecommendation {
        optimal_rate,
        energy_delivered,
        credit_yield_multiplier,
        current_soh: soh,
        projected_soh_1yr,
        degradation_rate,
        temp_impact,
        cycle_impact,
    }
}

/// Output of [`compute_charging_plan`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargingPlan {
    pub soh_factor: f64,
    pub temp_factor: f64,
    pub optimal_c_rate: f64,
    pub max_charging_power_kw: f64,
    /// Hours to fill the charge window; undefined when no power can be drawn
    pub charge_time_hours: Quotient,
    pub degradation_factor: f64,
    pub extended_cycles: f64,
    pub life_extension_pct: f64,
    pub cost_savings_usd: f64,
}

/// Temperature-banded C-rate plan with life extension savings
pub fn compute_charging_plan(
    capacity: KilowattHours,
    soh: StateOfHealth,
    temperature: Celsius,
) -> ChargingPlan {
    let capacity = capacity.into_inner();
    let soh_factor = soh.into_inner();

    let temp_factor = match temperature.into_inner() {
        t if t < plan::COLD_LIMIT_C => plan::COLD_DERATING,
        t if t > plan::HOT_LIMIT_C => plan::HOT_DERATING,
        _ => 1.0,
    };

    let optimal_c_rate = charging::BASE_C_RATE * soh_factor * temp_factor;
    let max_charging_power_kw = capacity * optimal_c_rate;
    let charge_time_hours = Quotient::divide(capacity * plan::CHARGE_WINDOW, max_charging_power_kw);

    let degradation_factor = if optimal_c_rate > plan::AGGRESSIVE_C_RATE {
        plan::AGGRESSIVE_DEGRADATION_FACTOR
    } else if optimal_c_rate < plan::GENTLE_C_RATE {
        plan::GENTLE_DEGRADATION_FACTOR
    } else {
        1.0
    };

    let extended_cycles = plan::BASE_CYCLE_LIFE * (2.0 - degradation_factor) * soh_factor;
    let life_extension_pct =
        (extended_cycles - plan::BASE_CYCLE_LIFE) / plan::BASE_CYCLE_LIFE * 100.0;

    let replacement_cost = capacity * plan::REPLACEMENT_COST_PER_KWH;
    let cost_savings_usd = replacement_cost * (life_extension_pct / 100.0) * plan::SAVINGS_SHARE;

    ChargingPlan {
        soh_factor,
        temp_factor,
        optimal_c_rate,
        max_charging_power_kw,
        charge_time_hours,
        degradation_factor,
        extended_cycles,
        life_extension_pct,
        cost_savings_usd,
    }
}
