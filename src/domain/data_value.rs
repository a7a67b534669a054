//! Cross-border data stewarding value
//!
//! Values a governed data-processing job by volume, the number of
//! jurisdictions it spans, compliance and processing speed; and estimates
//! fleet-wide data monetisation across countries.

use crate::domain::constants::{
    data::{self, monetization},
    units,
};
use crate::domain::quotient::Quotient;
use crate::domain::values::{Fraction, Gigabytes, Hours, JurisdictionCount};
use crate::infrastructure::log_messages;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A cross-border data processing job
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataGovernanceJob {
    pub volume_gb: Gigabytes,
    pub jurisdictions: JurisdictionCount,
    pub compliance_score: Fraction,
    pub processing_hours: Hours,
}

/// Output of [`compute_data_value`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    pub data_volume_gb: f64,
    pub base_value: f64,
    pub adjusted_value: f64,
    pub jurisdiction_factor: f64,
    /// Negative beyond 21 jurisdictions, which inverts `adjusted_value`
    pub complexity_penalty: f64,
    pub compliance_multiplier: f64,
    pub time_efficiency: f64,
    pub governance_score: f64,
    /// Undefined for an empty job
    pub value_per_gb: Quotient,
    pub processing_cost_ratio: f64,
}

/// Value a governed cross-border data job
pub fn compute_data_value(job: &DataGovernanceJob) -> DataValue {
    let volume = job.volume_gb.into_inner();
    let hours = job.processing_hours.into_inner();
    let compliance = job.compliance_score.into_inner();
    let additional = job.jurisdictions.additional();

    let jurisdiction_factor = 1.0 + additional * data::JURISDICTION_PREMIUM;
    let complexity_penalty = 1.0 - additional * data::JURISDICTION_COMPLEXITY_PENALTY;
    if complexity_penalty < 0.0 {
        warn!(
            jurisdictions = job.jurisdictions.into_inner(),
            complexity_penalty,
            "{}",
            log_messages::formulas::INVERTED_COMPLEXITY_PENALTY
        );
    }

    let compliance_multiplier = data::COMPLIANCE_BASE + compliance * data::COMPLIANCE_SLOPE;

    let target_time = volume * data::TARGET_HOURS_PER_GB;
    let time_efficiency =
        (target_time / hours.max(data::MIN_PROCESSING_HOURS)).min(data::MAX_TIME_EFFICIENCY);

    let base_value = volume * data::BASE_VALUE_PER_GB;
    let adjusted_value = base_value
        * jurisdiction_factor
        * compliance_multiplier
        * time_efficiency
        * complexity_penalty;

    let governance_score = compliance * time_efficiency * data::SECURITY_FACTOR;

    debug!(
        volume,
        adjusted_value,
        governance_score,
        "Computed data value"
    );

    DataValue {
        data_volume_gb: volume,
        base_value,
        adjusted_value,
        jurisdiction_factor,
        complexity_penalty,
        compliance_multiplier,
        time_efficiency,
        governance_score,
        value_per_gb: Quotient::divide(adjusted_value, volume),
        processing_cost_ratio: adjusted_value / (hours * data::PROCESSING_COST_PER_HOUR),
    }
}

/// Output of [`compute_data_monetization`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataMonetization {
    pub total_vehicles: f64,
    pub total_data_points: f64,
    pub basic_revenue: f64,
    pub premium_revenue: f64,
    pub cross_border_premium: f64,
    pub regulatory_value: f64,
    pub total_annual_revenue: f64,
    pub revenue_per_vehicle: Quotient,
}

/// Annual revenue from selling fleet telemetry across countries
pub fn compute_data_monetization(
    countries: u32,
    vehicles_per_country: u32,
    data_points_per_vehicle_day: u32,
) -> DataMonetization {
    let countries = f64::from(countries);
    let total_vehicles = countries * f64::from(vehicles_per_country);
    let total_data_points =
        total_vehicles * f64::from(data_points_per_vehicle_day) * units::DAYS_PER_YEAR;

    let basic_revenue = total_data_points * monetization::VALUE_PER_DATA_POINT;
    let premium_revenue = basic_revenue
        * monetization::PREMIUM_INSIGHTS_MULTIPLIER
        * monetization::PREMIUM_CLIENT_SHARE;

    let network_effect = (countries * monetization::NETWORK_EFFECT_PER_COUNTRY)
        .min(monetization::MAX_NETWORK_EFFECT);
    let cross_border_premium = basic_revenue * network_effect;

    let regulatory_value = countries * monetization::REGULATORY_VALUE_PER_COUNTRY;

    let total_annual_revenue =
        basic_revenue + premium_revenue + cross_border_premium + regulatory_value;

    DataMonetization {
        total_vehicles,
        total_data_points,
        basic_revenue,
        premium_revenue,
        cross_border_premium,
        regulatory_value,
        total_annual_revenue,
        revenue_per_vehicle: Quotient::divide(total_annual_revenue, total_vehicles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(volume: f64, jurisdictions: u32, compliance: f64, hours: f64) -> DataGovernanceJob {
        DataGovernanceJob {
            volume_gb: Gigabytes::try_new(volume).unwrap(),
            jurisdictions: JurisdictionCount::try_new(jurisdictions).unwrap(),
            compliance_score: Fraction::try_new(compliance).unwrap(),
            processing_hours: Hours::try_new(hours).unwrap(),
        }
    }

    #[test]
    fn test_domestic_job_on_schedule() {
        let value = compute_data_value(&job(100.0, 1, 1.0, 10.0));

        assert_eq!(value.jurisdiction_factor, 1.0);
        assert_eq!(value.complexity_penalty, 1.0);
        assert_eq!(value.compliance_multiplier, 2.0);
        assert!((value.time_efficiency - 1.0).abs() < 1e-12);
        assert_eq!(value.base_value, 250.0);
        assert!((value.adjusted_value - 500.0).abs() < 1e-9);
        assert!((value.governance_score - 0.95).abs() < 1e-12);
        assert!((value.value_per_gb.or_zero() - 5.0).abs() < 1e-9);
        assert!((value.processing_cost_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_multi_jurisdiction_job() {
        let value = compute_data_value(&job(10.0, 5, 0.8, 0.8));

        assert!((value.jurisdiction_factor - 1.6).abs() < 1e-12);
        assert!((value.complexity_penalty - 0.8).abs() < 1e-12);
        assert!((value.compliance_multiplier - 1.7).abs() < 1e-12);
        assert!((value.time_efficiency - 1.25).abs() < 1e-12);
        let expected = 25.0 * 1.6 * 1.7 * 1.25 * 0.8;
        assert!((value.adjusted_value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_time_efficiency_is_capped() {
        let value = compute_data_value(&job(1000.0, 1, 0.9, 1.0));
        assert_eq!(value.time_efficiency, 1.5);
    }

    #[test]
    fn test_tiny_processing_time_uses_minimum() {
        let value = compute_data_value(&job(1.0, 1, 0.9, 0.01));
        // target 0.1 / max(0.1, 0.01) = 1.0
        assert!((value.time_efficiency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_job_has_undefined_value_per_gb() {
        let value = compute_data_value(&job(0.0, 3, 0.9, 1.0));
        assert_eq!(value.adjusted_value, 0.0);
        assert!(value.value_per_gb.is_undefined());
    }

    #[test]
    fn test_complexity_penalty_is_not_clamped() {
        let at_limit = compute_data_value(&job(100.0, 21, 0.9, 10.0));
        assert!(at_limit.complexity_penalty.abs() < 1e-12);

        let beyond = compute_data_value(&job(100.0, 25, 0.9, 10.0));
        assert!((beyond.complexity_penalty + 0.2).abs() < 1e-12);
        assert!(beyond.adjusted_value < 0.0);
    }

    #[test]
    fn test_data_monetization() {
        let result = compute_data_monetization(5, 1000, 24);

        assert_eq!(result.total_vehicles, 5000.0);
        assert_eq!(result.total_data_points, 5000.0 * 24.0 * 365.0);
        assert!((result.basic_revenue - 43_800.0).abs() < 1e-6);
        assert!((result.premium_revenue - 43_800.0).abs() < 1e-6);
        assert!((result.cross_border_premium - 21_900.0).abs() < 1e-6);
        assert_eq!(result.regulatory_value, 50_000.0);
        assert!((result.total_annual_revenue - 159_500.0).abs() < 1e-6);
        assert!((result.revenue_per_vehicle.or_zero() - 31.9).abs() < 1e-9);
    }

    #[test]
    fn test_network_effect_is_capped() {
        let result = compute_data_monetization(20, 10, 1);
        assert!((result.cross_border_premium - result.basic_revenue).abs() < 1e-9);
    }

    #[test]
    fn test_no_vehicles() {
        let result = compute_data_monetization(3, 0, 24);
        assert_eq!(result.basic_revenue, 0.0);
        assert_eq!(result.regulatory_value, 30_000.0);
        assert!(result.revenue_per_vehicle.is_undefined());
    }
}
