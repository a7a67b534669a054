//! Property test generators for validated formula inputs

use lcis_formulas::domain::{
    AnnualYield, BatteryChemistryMix, BatteryState, Celsius, DataGovernanceJob, Fraction, Gigabytes,
    Hours, JurisdictionCount, KilowattHours, Percentage, PortfolioAsset, StateOfHealth,
    SwapStationStats, Usd, UsdPerKwh,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// Generate fractions in [0, 1]
pub fn fraction() -> impl Strategy<Value = Fraction> {
    (0.0..=1.0f64).prop_map(|f| Fraction::try_new(f).expect("Range is valid"))
}

/// Generate energy amounts up to 1 MWh
pub fn energy() -> impl Strategy<Value = KilowattHours> {
    (0.0..1000.0f64).prop_map(|e| KilowattHours::try_new(e).expect("Range is valid"))
}

/// Generate battery snapshots across realistic operating conditions
pub fn battery_state() -> impl Strategy<Value = BatteryState> {
    (
        0.5..200.0f64,
        0.0..=1.0f64,
        -30.0..60.0f64,
        0.0..=100.0f64,
        0u64..10_000,
    )
        .prop_map(|(capacity, soh, temperature, soc, cycles)| {
            BatteryState::new(
                KilowattHours::try_new(capacity).expect("Range is valid"),
                StateOfHealth::try_new(soh).expect("Range is valid"),
                Celsius::try_new(temperature).expect("Range is valid"),
                Percentage::try_new(soc).expect("Range is valid"),
                cycles,
            )
            .expect("Capacity is positive")
        })
}

/// Generate swap station statistics
pub fn swap_stats() -> impl Strategy<Value = SwapStationStats> {
    (0u32..2000, fraction(), 0u32..500).prop_map(|(swaps_per_day, error_rate, samples)| {
        SwapStationStats {
            swaps_per_day,
            error_rate,
            verification_samples: samples,
        }
    })
}

/// Generate a single portfolio holding
pub fn portfolio_asset() -> impl Strategy<Value = PortfolioAsset> {
    (0.0..1_000_000.0f64, fraction(), fraction(), fraction(), -0.5..0.5f64).prop_map(
        |(value, weight, risk_score, liquidity_factor, expected_yield)| PortfolioAsset {
            value: Usd::try_new(value).expect("Range is valid"),
            weight,
            risk_score,
            liquidity_factor,
            expected_yield: AnnualYield::try_new(expected_yield).expect("Range is valid"),
        },
    )
}

/// Generate portfolios of up to 20 holdings, possibly empty
pub fn portfolio() -> impl Strategy<Value = Vec<PortfolioAsset>> {
    vec(portfolio_asset(), 0..20)
}

/// Generate data jobs within 21 jurisdictions, where the complexity penalty stays non-negative
pub fn data_job() -> impl Strategy<Value = DataGovernanceJob> {
    (0.0..5000.0f64, 1u32..=21, fraction(), 0.01..500.0f64).prop_map(
        |(volume, jurisdictions, compliance_score, hours)| DataGovernanceJob {
            volume_gb: Gigabytes::try_new(volume).expect("Range is valid"),
            jurisdictions: JurisdictionCount::try_new(jurisdictions).expect("Range is valid"),
            compliance_score,
            processing_hours: Hours::try_new(hours).expect("Range is valid"),
        },
    )
}

/// Generate chemistry mixes with at least some capacity
pub fn chemistry_mix() -> impl Strategy<Value = BatteryChemistryMix> {
    (
        0.0..500.0f64,
        0.0..500.0f64,
        50.0..300.0f64,
        30.0..200.0f64,
        fraction(),
    )
        .prop_filter("Mix needs capacity", |(li, na, ..)| li + na > 0.0)
        .prop_map(|(li, na, li_cost, na_cost, performance_target)| BatteryChemistryMix {
            li_capacity_kwh: KilowattHours::try_new(li).expect("Range is valid"),
            na_capacity_kwh: KilowattHours::try_new(na).expect("Range is valid"),
            li_cost_per_kwh: UsdPerKwh::try_new(li_cost).expect("Range is valid"),
            na_cost_per_kwh: UsdPerKwh::try_new(na_cost).expect("Range is valid"),
            performance_target,
        })
}
