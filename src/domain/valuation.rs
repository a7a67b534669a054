//! Asset valuation for EV portfolios
//!
//! Portfolio-level blended valuation, a per-vehicle depreciation blender and
//! a reproducible demo portfolio for scenario sweeps.

pub mod demo_portfolio;
pub mod depreciation;
pub mod portfolio;

pub use demo_portfolio::{sample_portfolio, AssetKind, DemoAsset};
pub use depreciation::{compute_depreciation_blend, DepreciationBlend};
pub use portfolio::{
    compute_portfolio_valuation, normalize_weights, PortfolioAsset, PortfolioValuation,
};
