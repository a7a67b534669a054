//! Blended portfolio valuation
//!
//! Each asset is discounted for risk and illiquidity, then weighted. The
//! portfolio yield receives a logarithmic diversification bonus that never
//! decreases as assets are added.

use crate::domain::constants::portfolio;
use crate::domain::quotient::Quotient;
use crate::domain::values::{AnnualYield, Fraction, Usd};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One holding in a portfolio
///
/// Weights need not sum to one; see [`normalize_weights`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAsset {
    pub value: Usd,
    pub weight: Fraction,
    pub risk_score: Fraction,
    pub liquidity_factor: Fraction,
    pub expected_yield: AnnualYield,
}

impl PortfolioAsset {
    /// Value after the risk discount, liquidity haircut and weight
    pub fn adjusted_value(&self) -> f64 {
        let risk_adjustment = 1.0 - self.risk_score.into_inner() * portfolio::MAX_RISK_DISCOUNT;
        self.value.into_inner()
            * self.weight.into_inner()
            * risk_adjustment
            * self.liquidity_factor.into_inner()
    }
}

/// Output of [`compute_portfolio_valuation`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub total_value: f64,
    pub risk_adjusted_value: f64,
    /// Weight-averaged yield; undefined when all weights are zero
    pub portfolio_yield: Quotient,
    pub blended_yield: f64,
    pub correlation_adjustment: f64,
    pub sharpe_ratio: f64,
    pub diversification_score: f64,
    /// Undefined for an empty portfolio
    pub avg_risk: Quotient,
    /// Undefined for an empty portfolio
    pub avg_liquidity: Quotient,
}

/// Value a portfolio of assets
///
/// An empty slice values to zero without dividing by zero.
pub fn compute_portfolio_valuation(assets: &[PortfolioAsset]) -> PortfolioValuation {
    let total_value: f64 = assets.iter().map(PortfolioAsset::adjusted_value).sum();
    let total_weight: f64 = assets.iter().map(|a| a.weight.into_inner()).sum();
    let weighted_yield: f64 = assets
        .iter()
        .map(|a| a.expected_yield.into_inner() * a.weight.into_inner())
        .sum();

    let portfolio_yield = Quotient::divide(weighted_yield, total_weight);

    let count = assets.len() as f64;
    let correlation_adjustment = 1.0 + portfolio::DIVERSIFICATION_COEFFICIENT * count.max(1.0).ln();

    let yield_value = portfolio_yield.or_zero();
    let blended_yield = yield_value * correlation_adjustment;
    let sharpe_ratio = if yield_value > 0.0 {
        yield_value / portfolio::ASSUMED_VOLATILITY
    } else {
        0.0
    };

    let avg_risk = Quotient::divide(
        assets.iter().map(|a| a.risk_score.into_inner()).sum(),
        count,
    );
    let avg_liquidity = Quotient::divide(
        assets.iter().map(|a| a.liquidity_factor.into_inner()).sum(),
        count,
    );

    debug!(
        assets = assets.len(),
        total_value,
        blended_yield,
        "Computed portfolio valuation"
    );

    PortfolioValuation {
        total_value,
        risk_adjusted_value: total_value,
        portfolio_yield,
        blended_yield,
        correlation_adjustment,
        sharpe_ratio,
        diversification_score: correlation_adjustment - 1.0,
        avg_risk,
        avg_liquidity,
    }
}

/// Rescale weights so they sum to one
///
/// A portfolio whose weights sum to zero is returned unchanged.
pub fn normalize_weights(assets: &[PortfolioAsset]) -> Vec<PortfolioAsset> {
    let total_weight: f64 = assets.iter().map(|a| a.weight.into_inner()).sum();
    if total_weight == 0.0 {
        return assets.to_vec();
    }

    assets
        .iter()
        .map(|asset| {
            // Each share is at most one; clamp absorbs rounding just above it.
            let share = (asset.weight.into_inner() / total_weight).clamp(0.0, 1.0);
            PortfolioAsset {
                weight: Fraction::try_new(share).unwrap_or(asset.weight),
                ..*asset
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(value: f64, weight: f64, risk: f64, liquidity: f64, yield_: f64) -> PortfolioAsset {
        PortfolioAsset {
            value: Usd::try_new(value).unwrap(),
            weight: Fraction::try_new(weight).unwrap(),
            risk_score: Fraction::try_new(risk).unwrap(),
            liquidity_factor: Fraction::try_new(liquidity).unwrap(),
            expected_yield: AnnualYield::try_new(yield_).unwrap(),
        }
    }

    #[test]
    fn test_two_equal_assets() {
        let assets = [
            asset(100_000.0, 0.5, 0.5, 0.8, 0.05),
            asset(100_000.0, 0.5, 0.5, 0.8, 0.05),
        ];
        let valuation = compute_portfolio_valuation(&assets);

        assert!((valuation.portfolio_yield.or_zero() - 0.05).abs() < 1e-12);
        let expected_adjustment = 1.0 + 0.1 * 2.0_f64.ln();
        assert!((valuation.correlation_adjustment - expected_adjustment).abs() < 1e-12);
        assert!((valuation.correlation_adjustment - 1.0693).abs() < 1e-4);
        assert!((valuation.blended_yield - 0.0535).abs() < 1e-4);

        // 100k * 0.5 * 0.85 * 0.8 = 34k each
        assert!((valuation.total_value - 68_000.0).abs() < 1e-6);
        assert_eq!(valuation.total_value, valuation.risk_adjusted_value);
        assert!((valuation.sharpe_ratio - 0.05 / 0.15).abs() < 1e-12);
        assert!((valuation.avg_risk.or_zero() - 0.5).abs() < 1e-12);
        assert!((valuation.avg_liquidity.or_zero() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_empty_portfolio_is_zero() {
        let valuation = compute_portfolio_valuation(&[]);

        assert_eq!(valuation.total_value, 0.0);
        assert_eq!(valuation.blended_yield, 0.0);
        assert_eq!(valuation.sharpe_ratio, 0.0);
        assert_eq!(valuation.correlation_adjustment, 1.0);
        assert_eq!(valuation.diversification_score, 0.0);
        assert!(valuation.portfolio_yield.is_undefined());
        assert!(valuation.avg_risk.is_undefined());
        assert!(valuation.avg_liquidity.is_undefined());
    }

    #[test]
    fn test_zero_weights_leave_yield_undefined() {
        let valuation = compute_portfolio_valuation(&[asset(50_000.0, 0.0, 0.2, 0.9, 0.08)]);
        assert!(valuation.portfolio_yield.is_undefined());
        assert_eq!(valuation.total_value, 0.0);
        assert!(valuation.avg_risk.value().is_some());
    }

    #[test]
    fn test_negative_yield_has_zero_sharpe() {
        let valuation = compute_portfolio_valuation(&[asset(10_000.0, 1.0, 0.9, 0.5, -0.1)]);
        assert!(valuation.blended_yield < 0.0);
        assert_eq!(valuation.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_riskier_asset_is_worth_less() {
        let safe = asset(100_000.0, 1.0, 0.0, 1.0, 0.05).adjusted_value();
        let risky = asset(100_000.0, 1.0, 1.0, 1.0, 0.05).adjusted_value();
        assert_eq!(safe, 100_000.0);
        assert!((risky - 70_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_weights() {
        let assets = [
            asset(1.0, 0.2, 0.5, 0.5, 0.05),
            asset(1.0, 0.3, 0.5, 0.5, 0.05),
        ];
        let normalized = normalize_weights(&assets);
        let total: f64 = normalized.iter().map(|a| a.weight.into_inner()).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((normalized[0].weight.into_inner() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_weights_is_identity() {
        let assets = [asset(1.0, 0.0, 0.5, 0.5, 0.05)];
        assert_eq!(normalize_weights(&assets), assets.to_vec());
    }

    #[test]
    fn test_normalization_does_not_change_yield() {
        let assets = [
            asset(80_000.0, 0.1, 0.3, 0.9, 0.04),
            asset(120_000.0, 0.3, 0.6, 0.7, 0.09),
        ];
        let raw = compute_portfolio_valuation(&assets);
        let normalized = compute_portfolio_valuation(&normalize_weights(&assets));
        assert!((raw.blended_yield - normalized.blended_yield).abs() < 1e-12);
    }
}
