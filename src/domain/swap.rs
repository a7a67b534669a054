//! Swap-station integrity, quality-gate MRV and station economics

use crate::domain::constants::{
    swap::{self, economics, maintenance},
    units,
};
use crate::domain::parameters::SwapParameters;
use crate::domain::quotient::Quotient;
use crate::domain::values::{Fraction, Usd};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily operating statistics of one swap station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapStationStats {
    pub swaps_per_day: u32,
    pub error_rate: Fraction,
    pub verification_samples: u32,
}

/// A closed interval of plausible quality-gate values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Output of [`compute_integrity`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapIntegrity {
    pub integrity_score: f64,
    /// Verified-successful share of the samples; undefined with no samples
    pub quality_gate_score: Quotient,
    pub throughput_efficiency: f64,
    pub verification_confidence: f64,
    pub confidence_interval: ConfidenceInterval,
    pub margin_of_error: f64,
    /// Unclamped swaps / theoretical maximum
    pub capacity_utilization: f64,
}

/// Score a station's MRV integrity
///
/// `quality_gate_score` is computed literally as successes over samples,
/// which reduces to `1 - error_rate` whenever samples are present.
pub fn compute_integrity(stats: &SwapStationStats, params: &SwapParameters) -> SwapIntegrity {
    let swaps = f64::from(stats.swaps_per_day);
    let samples = f64::from(stats.verification_samples);
    let error_rate = stats.error_rate.into_inner();

    let theoretical_max = units::SECONDS_PER_DAY / params.swap_time.into_inner();
    let capacity_utilization = swaps / theoretical_max;
    let throughput_efficiency = capacity_utilization.min(1.0);

    let base_integrity = 1.0 - error_rate;
    let verification_confidence = Quotient::divide(samples, swaps * swap::VERIFICATION_SAMPLE_RATE)
        .map(|ratio| ratio.min(1.0))
        .or_zero();

    let integrity_score = base_integrity * verification_confidence * throughput_efficiency;

    let successful_verifications = samples * (1.0 - error_rate);
    let quality_gate_score = Quotient::divide(successful_verifications, samples);
    let gate = quality_gate_score.or_zero();

    let margin_of_error = if stats.verification_samples > swap::NORMAL_APPROXIMATION_MIN_SAMPLES {
        swap::Z_95 * (gate * (1.0 - gate) / samples).sqrt()
    } else {
        swap::SMALL_SAMPLE_MARGIN
    };

    let confidence_interval = ConfidenceInterval {
        lower: (gate - margin_of_error).max(0.0),
        upper: (gate + margin_of_error).min(1.0),
    };

    debug!(
        integrity_score,
        throughput_efficiency,
        verification_confidence,
        "Computed swap integrity"
    );

    SwapIntegrity {
        integrity_score,
        quality_gate_score,
        throughput_efficiency,
        verification_confidence,
        confidence_interval,
        margin_of_error,
        capacity_utilization,
    }
}

/// Output of [`compute_station_economics`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationEconomics {
    pub daily_swaps_total: f64,
    pub daily_revenue: f64,
    pub annual_revenue: f64,
    pub uptime_bonus: f64,
    /// 0 to 10
    pub reliability_score: f64,
    pub downtime_savings: f64,
    pub total_annual_value: f64,
}

/// Revenue and reliability value of a network of swap stations
///
/// `target_uptime_pct` is a percentage, e.g. `99.5`.
pub fn compute_station_economics(
    stations: u32,
    swaps_per_day: u32,
    swap_fee: Usd,
    target_uptime_pct: f64,
) -> StationEconomics {
    let stations = f64::from(stations);
    let swaps_per_day = f64::from(swaps_per_day);
    let fee = swap_fee.into_inner();

    let daily_swaps_total = stations * swaps_per_day;
    let daily_revenue = daily_swaps_total * fee;
    let annual_revenue = daily_revenue * units::DAYS_PER_YEAR;

    let uptime_multiplier = if target_uptime_pct > economics::UPTIME_PIVOT_PCT {
        1.0 + (target_uptime_pct - economics::UPTIME_PIVOT_PCT) * economics::UPTIME_BONUS_SLOPE
    } else {
        target_uptime_pct / economics::UPTIME_PIVOT_PCT
    };
    let uptime_bonus = daily_revenue * (uptime_multiplier - 1.0) * units::DAYS_PER_YEAR;

    let reliability_score = (target_uptime_pct / 10.0).min(economics::MAX_RELIABILITY_SCORE);

    let downtime_cost_per_hour = fee * (swaps_per_day / units::HOURS_PER_DAY) * stations;
    let hours_saved = (target_uptime_pct - economics::INDUSTRY_AVERAGE_UPTIME_PCT) / 100.0
        * units::HOURS_PER_DAY
        * units::DAYS_PER_YEAR;
    let downtime_savings = hours_saved * downtime_cost_per_hour;

    StationEconomics {
        daily_swaps_total,
        daily_revenue,
        annual_revenue,
        uptime_bonus,
        reliability_score,
        downtime_savings,
        total_annual_value: annual_revenue + uptime_bonus + downtime_savings,
    }
}

/// How soon a station needs maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum MaintenanceUrgency {
    Low,
    Medium,
    High,
}

impl MaintenanceUrgency {
    /// Categorise an integrity level on the 70–95 scale
    pub fn from_integrity(integrity: f64) -> Self {
        match integrity {
            i if i < maintenance::HIGH_URGENCY_BELOW => Self::High,
            i if i < maintenance::MEDIUM_URGENCY_BELOW => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Expected downtime when maintenance is performed
    pub fn predicted_downtime_hours(&self) -> f64 {
        match self {
            Self::High => maintenance::HIGH_URGENCY_DOWNTIME_HOURS,
            Self::Medium => maintenance::MEDIUM_URGENCY_DOWNTIME_HOURS,
            Self::Low => maintenance::LOW_URGENCY_DOWNTIME_HOURS,
        }
    }
}

/// Output of [`compute_maintenance_outlook`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOutlook {
    pub total_swaps: f64,
    pub current_integrity: f64,
    pub urgency: MaintenanceUrgency,
    pub predicted_downtime_hours: f64,
    pub annual_maintenance_cost: f64,
    pub total_cost: f64,
}

/// Wear-based maintenance forecast over one year of swaps
pub fn compute_maintenance_outlook(
    batteries: u32,
    swaps_per_day: u32,
    maintenance_cost_per_battery: Usd,
) -> MaintenanceOutlook {
    let batteries = f64::from(batteries);
    let total_swaps = batteries * f64::from(swaps_per_day) * units::DAYS_PER_YEAR;

    let wear_capacity = batteries * maintenance::SWAPS_PER_INTEGRITY_POINT;
    let wear = Quotient::divide(total_swaps, wear_capacity).or_zero();
    let current_integrity = (maintenance::BASE_INTEGRITY - wear).max(maintenance::MIN_INTEGRITY);

    let urgency = MaintenanceUrgency::from_integrity(current_integrity);
    let predicted_downtime_hours = urgency.predicted_downtime_hours();

    let annual_maintenance_cost = batteries * maintenance_cost_per_battery.into_inner();
    let downtime_cost = predicted_downtime_hours * maintenance::DOWNTIME_COST_PER_HOUR;

    MaintenanceOutlook {
        total_swaps,
        current_integrity,
        urgency,
        predicted_downtime_hours,
        annual_maintenance_cost,
        total_cost: annual_maintenance_cost + downtime_cost,
    }
}
