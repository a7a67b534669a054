//! Reproducible demo portfolios for scenario sweeps
//!
//! Generates placeholder holdings so the valuation formula can be exercised
//! across portfolio sizes without real asset data.

use crate::domain::valuation::portfolio::{normalize_weights, PortfolioAsset};
use crate::domain::values::{AnnualYield, Fraction, Usd};
use derive_more::Display;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Seed used by the scenario sweep
pub const DEFAULT_SEED: u64 = 42;

const VALUE_USD: Range<f64> = 50_000.0..500_000.0;
const WEIGHT: Range<f64> = 0.1..0.3;
const RISK: Range<f64> = 0.2..0.8;
const LIQUIDITY: Range<f64> = 0.6..0.95;
const YIELD: Range<f64> = 0.03..0.12;
const IN_RANGE: &str = "Sampling ranges lie inside the validated bounds";

/// Kind of holding in an EV climate portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AssetKind {
    #[display("Fleet Vehicle")]
    FleetVehicle,
    #[display("Charging Station")]
    ChargingStation,
    #[display("Battery Storage")]
    BatteryStorage,
    #[display("Carbon Credits")]
    CarbonCredits,
    #[display("Infrastructure")]
    Infrastructure,
}

impl AssetKind {
    const CYCLE: [Self; 5] = [
        Self::FleetVehicle,
        Self::ChargingStation,
        Self::BatteryStorage,
        Self::CarbonCredits,
        Self::Infrastructure,
    ];
}

/// A generated holding with its identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoAsset {
    /// `ASSET_001`, `ASSET_002`, ...
    pub id: String,
    pub kind: AssetKind,
    pub asset: PortfolioAsset,
}

/// Generate `count` holdings with weights normalised to sum to one
///
/// The same seed always yields the same portfolio.
pub fn sample_portfolio(count: usize, seed: u64) -> Vec<DemoAsset> {
    let mut rng = StdRng::seed_from_u64(seed);

    let raw: Vec<PortfolioAsset> = (0..count)
        .map(|_| PortfolioAsset {
            value: Usd::try_new(rng.gen_range(VALUE_USD)).expect(IN_RANGE),
            weight: Fraction::try_new(rng.gen_range(WEIGHT)).expect(IN_RANGE),
            risk_score: Fraction::try_new(rng.gen_range(RISK)).expect(IN_RANGE),
            liquidity_factor: Fraction::try_new(rng.gen_range(LIQUIDITY)).expect(IN_RANGE),
            expected_yield: AnnualYield::try_new(rng.gen_range(YIELD)).expect(IN_RANGE),
        })
        .collect();

    normalize_weights(&raw)
        .into_iter()
        .enumerate()
        .map(|(i, asset)| DemoAsset {
            id: format!("ASSET_{:03}", i + 1),
            kind: AssetKind::CYCLE[i % AssetKind::CYCLE.len()],
            asset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_reproducible() {
        assert_eq!(
            sample_portfolio(5, DEFAULT_SEED),
            sample_portfolio(5, DEFAULT_SEED)
        );
        assert_ne!(sample_portfolio(5, 1), sample_portfolio(5, 2));
    }

    #[test]
    fn test_sample_weights_are_normalised() {
        let portfolio = sample_portfolio(10, DEFAULT_SEED);
        let total: f64 = portfolio.iter().map(|a| a.asset.weight.into_inner()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_ranges() {
        for demo in sample_portfolio(15, DEFAULT_SEED) {
            let value = demo.asset.value.into_inner();
            assert!((50_000.0..500_000.0).contains(&value));
            let risk = demo.asset.risk_score.into_inner();
            assert!((0.2..0.8).contains(&risk));
            let yield_ = demo.asset.expected_yield.into_inner();
            assert!((0.03..0.12).contains(&yield_));
        }
    }

    #[test]
    fn test_ids_and_kinds_cycle() {
        let portfolio = sample_portfolio(6, DEFAULT_SEED);
        assert_eq!(portfolio[0].id, "ASSET_001");
        assert_eq!(portfolio[5].id, "ASSET_006");
        assert_eq!(portfolio[0].kind, AssetKind::FleetVehicle);
        assert_eq!(portfolio[5].kind, AssetKind::FleetVehicle);
        assert_eq!(portfolio[3].kind.to_string(), "Carbon Credits");
    }

    #[test]
    fn test_empty_sample() {
        assert!(sample_portfolio(0, DEFAULT_SEED).is_empty());
    }
}
