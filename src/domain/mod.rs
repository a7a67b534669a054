//! Domain types and business formulas for the climate intelligence library
//!
//! Every formula here is closed-form and pure: validated inputs in, a plain
//! serialisable record out. Tunables are passed explicitly through the
//! parameter structs in [`parameters`].

pub mod carbon;
pub mod charging;
pub mod constants;
pub mod data_value;
pub mod errors;
pub mod ip_portfolio;
pub mod parameters;
pub mod quotient;
pub mod sodium;
pub mod swap;
pub mod valuation;
pub mod values;
pub mod vehicle;

pub use carbon::{
    compute_carbon_credits, compute_fleet_carbon_revenue, CarbonCredits, ChargingSession,
    FleetCarbonRevenue,
};
pub use charging::{
    compute_charging_plan, compute_optimal_charging, BatteryState, ChargingPlan,
    ChargingRecommendation,
};
pub use data_value::{
    compute_data_monetization, compute_data_value, DataGovernanceJob, DataMonetization, DataValue,
};
pub use errors::FormulaError;
pub use parameters::{CarbonParameters, DegradationParameters, FormulaParameters, SwapParameters};
pub use quotient::Quotient;
pub use sodium::{
    compare_sodium_lithium, compute_sodium_blend, BatteryChemistryMix, ChemistryEconomics,
    SodiumBlend,
};
pub use swap::{
    compute_integrity, compute_maintenance_outlook, compute_station_economics, ConfidenceInterval,
    MaintenanceOutlook, MaintenanceUrgency, StationEconomics, SwapIntegrity, SwapStationStats,
};
pub use valuation::{
    compute_depreciation_blend, compute_portfolio_valuation, normalize_weights, sample_portfolio,
    AssetKind, DemoAsset, DepreciationBlend, PortfolioAsset, PortfolioValuation,
};
pub use values::*;
pub use vehicle::VehicleClass;
