//! Formula invariants that must hold for every validated input

use crate::generators;
use lcis_formulas::domain::{
    compute_carbon_credits, compute_data_value, compute_integrity, compute_optimal_charging,
    compute_portfolio_valuation, compute_sodium_blend, normalize_weights, BatteryChemistryMix,
    CarbonParameters, DegradationParameters, FormulaError, Fraction, KilowattHours, SwapParameters,
    UsdPerKwh,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn carbon_credits_are_monotone_in_energy(
        a in generators::energy(),
        b in generators::energy(),
        clean_ratio in generators::fraction(),
    ) {
        let params = CarbonParameters::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_credits = compute_carbon_credits(low, clean_ratio, &params);
        let high_credits = compute_carbon_credits(high, clean_ratio, &params);

        prop_assert!(low_credits.verified_credits <= high_credits.verified_credits);
        prop_assert!(low_credits.carbon_value_usd <= high_credits.carbon_value_usd);
    }

    #[test]
    fn credit_rate_is_defined_for_any_positive_energy(
        energy in generators::energy(),
        clean_ratio in generators::fraction(),
    ) {
        let credits = compute_carbon_credits(energy, clean_ratio, &CarbonParameters::default());
        prop_assert_eq!(credits.credit_rate.is_undefined(), energy.into_inner() == 0.0);
    }

    #[test]
    fn projected_soh_never_drops_below_floor(battery in generators::battery_state()) {
        let recommendation = compute_optimal_charging(&battery, &DegradationParameters::default());
        prop_assert!(recommendation.projected_soh_1yr >= 0.6);
        prop_assert!(recommendation.optimal_rate >= 0.0);
    }

    #[test]
    fn integrity_without_errors_is_throughput_times_confidence(
        stats in generators::swap_stats(),
    ) {
        let stats = lcis_formulas::domain::SwapStationStats {
            error_rate: Fraction::zero(),
            ..stats
        };
        let integrity = compute_integrity(&stats, &SwapParameters::default());
        let expected = integrity.throughput_efficiency * integrity.verification_confidence;
        prop_assert!((integrity.integrity_score - expected).abs() < 1e-12);
    }

    #[test]
    fn confidence_interval_stays_in_unit_range(stats in generators::swap_stats()) {
        let integrity = compute_integrity(&stats, &SwapParameters::default());
        let interval = integrity.confidence_interval;
        prop_assert!(0.0 <= interval.lower && interval.lower <= interval.upper);
        prop_assert!(interval.upper <= 1.0);
    }

    #[test]
    fn diversification_bonus_never_decreases(assets in generators::portfolio()) {
        let valuation = compute_portfolio_valuation(&assets);
        prop_assert!(valuation.correlation_adjustment >= 1.0);
        prop_assert!(valuation.diversification_score >= 0.0);
        prop_assert!(valuation.sharpe_ratio >= 0.0);
    }

    #[test]
    fn normalized_weights_sum_to_one(assets in generators::portfolio()) {
        let total: f64 = assets.iter().map(|a| a.weight.into_inner()).sum();
        prop_assume!(total > 1e-9);

        let normalized = normalize_weights(&assets);
        let normalized_total: f64 = normalized.iter().map(|a| a.weight.into_inner()).sum();
        prop_assert!((normalized_total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn data_value_is_non_negative_within_twenty_one_jurisdictions(job in generators::data_job()) {
        let value = compute_data_value(&job);
        prop_assert!(value.complexity_penalty >= -1e-12);
        prop_assert!(value.adjusted_value >= -1e-9);
        prop_assert!(value.time_efficiency <= 1.5);
    }

    #[test]
    fn sodium_ratios_partition_capacity(mix in generators::chemistry_mix()) {
        let blend = compute_sodium_blend(&mix).unwrap();
        prop_assert!((blend.li_ratio + blend.na_ratio - 1.0).abs() < 1e-12);
        let target = mix.performance_target.into_inner();
        prop_assert_eq!(blend.meets_target, blend.blended_performance >= target);
    }

    #[test]
    fn sodium_blend_without_capacity_is_rejected(
        li_cost in 50.0..300.0f64,
        na_cost in 30.0..200.0f64,
        target in generators::fraction(),
    ) {
        let mix = BatteryChemistryMix {
            li_capacity_kwh: KilowattHours::zero(),
            na_capacity_kwh: KilowattHours::zero(),
            li_cost_per_kwh: UsdPerKwh::try_new(li_cost).unwrap(),
            na_cost_per_kwh: UsdPerKwh::try_new(na_cost).unwrap(),
            performance_target: target,
        };
        prop_assert_eq!(compute_sodium_blend(&mix), Err(FormulaError::ZeroTotalCapacity));
    }
}

#[test]
fn empty_portfolio_values_to_zero() {
    let valuation = compute_portfolio_valuation(&[]);
    assert_eq!(valuation.total_value, 0.0);
    assert_eq!(valuation.blended_yield, 0.0);
    assert!(valuation.avg_risk.is_undefined());
}
