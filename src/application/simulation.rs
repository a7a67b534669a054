//! Comprehensive scenario sweep
//!
//! Runs every formula family over a fixed grid of inputs, evaluates a
//! reference business case with the supplementary calculators and rolls the
//! results into one serialisable report.

use crate::config::SimulationSettings;
use crate::domain::carbon::{compute_carbon_credits, compute_fleet_carbon_revenue};
use crate::domain::charging::{compute_charging_plan, compute_optimal_charging, BatteryState};
use crate::domain::data_value::{compute_data_monetization, compute_data_value};
use crate::domain::ip_portfolio::{
    self, assess_portfolio_risk, filing_timeline, investment_projection, ExecutiveSummary,
    Milestone, RiskAssessment, YearProjection,
};
use crate::domain::parameters::FormulaParameters;
use crate::domain::sodium::{compare_sodium_lithium, compute_sodium_blend};
use crate::domain::swap::{
    compute_integrity, compute_maintenance_outlook, compute_station_economics, SwapStationStats,
};
use crate::domain::valuation::{
    compute_depreciation_blend, compute_portfolio_valuation, sample_portfolio, DemoAsset,
};
use crate::domain::values::{
    Celsius, Fraction, Gigabytes, Hours, JurisdictionCount, KilowattHours, Percentage,
    StateOfHealth, Usd, UsdPerKwh, UsdPerTonne,
};
use crate::domain::vehicle::VehicleClass;
use crate::domain::{
    BatteryChemistryMix, CarbonCredits, ChargingPlan, ChargingRecommendation, ChemistryEconomics,
    DataGovernanceJob, DataMonetization, DataValue, DepreciationBlend, FleetCarbonRevenue,
    MaintenanceOutlook, PortfolioAsset, PortfolioValuation, SodiumBlend, StationEconomics,
    SwapIntegrity,
};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages;
use serde::Serialize;
use std::fmt::Display;
use tracing::{info, instrument, warn};

/// Input grids for each formula family
mod grid {
    pub const CARBON_ENERGY_KWH: [f64; 4] = [10.0, 25.0, 50.0, 100.0];

    pub const CHARGING_CAPACITY_KWH: f64 = 15.0;
    pub const CHARGING_TARGET_SOC_PCT: f64 = 80.0;
    pub const CHARGING_SOH: [f64; 5] = [0.6, 0.7, 0.8, 0.9, 1.0];
    pub const CHARGING_TEMPERATURE_C: [f64; 4] = [15.0, 25.0, 35.0, 45.0];
    pub const CHARGING_CYCLES: [u64; 4] = [0, 500, 1000, 2000];

    pub const SWAPS_PER_DAY: [u32; 4] = [50, 100, 200, 400];
    pub const SWAP_ERROR_RATE: [f64; 4] = [0.01, 0.02, 0.05, 0.1];
    pub const SWAP_SAMPLES: [u32; 4] = [10, 25, 50, 100];

    pub const PORTFOLIO_SIZES: [usize; 4] = [3, 5, 10, 15];

    pub const DATA_VOLUME_GB: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];
    pub const DATA_JURISDICTIONS: [u32; 4] = [1, 2, 5, 10];
    pub const DATA_COMPLIANCE: [f64; 4] = [0.7, 0.8, 0.9, 0.95];
    /// Optimistic processing time per GB
    pub const DATA_HOURS_PER_GB: f64 = 0.08;

    pub const SODIUM_TOTAL_CAPACITY_KWH: f64 = 100.0;
    pub const SODIUM_RATIOS: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];
    pub const SODIUM_LI_COST: f64 = 150.0;
    pub const SODIUM_NA_COST: f64 = 80.0;
    pub const SODIUM_PERFORMANCE_TARGET: f64 = 0.85;
}

/// Inputs of the reference business case
mod reference {
    pub const FLEET_VEHICLES: u32 = 1000;
    pub const FLEET_KWH_PER_CHARGE: f64 = 45.0;
    pub const FLEET_CHARGES_PER_MONTH: u32 = 12;
    pub const FLEET_CARBON_PRICE: f64 = 50.0;

    pub const PLAN_CAPACITY_KWH: f64 = 75.0;
    pub const PLAN_SOH_PCT: f64 = 95.0;
    pub const PLAN_TEMPERATURE_C: f64 = 25.0;

    pub const STATIONS: u32 = 10;
    pub const STATION_SWAPS_PER_DAY: u32 = 200;
    pub const SWAP_FEE: f64 = 20.0;
    pub const TARGET_UPTIME_PCT: f64 = 99.5;

    pub const BATTERIES: u32 = 200;
    pub const BATTERY_SWAPS_PER_DAY: u32 = 3;
    pub const MAINTENANCE_COST_PER_BATTERY: f64 = 300.0;

    pub const VEHICLE_PRICE: f64 = 45_000.0;
    pub const BATTERY_VALUE: f64 = 15_000.0;
    pub const SOFTWARE_VALUE: f64 = 8_000.0;
    pub const AGE_MONTHS: u32 = 24;

    pub const COUNTRIES: u32 = 8;
    pub const VEHICLES_PER_COUNTRY: u32 = 10_000;
    pub const DATA_POINTS_PER_VEHICLE_DAY: u32 = 500;

    pub const CHEMISTRY_CAPACITY_KWH: f64 = 80.0;
    pub const CYCLE_TARGET: u32 = 4000;
    pub const LI_COST_PER_KWH: f64 = 120.0;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarbonScenario {
    pub energy_kwh: f64,
    pub vehicle_class: VehicleClass,
    #[serde(flatten)]
    pub credits: CarbonCredits,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargingScenario {
    pub soh: f64,
    pub temperature_c: f64,
    pub cycles: u64,
    #[serde(flatten)]
    pub recommendation: ChargingRecommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapScenario {
    pub swaps_per_day: u32,
    pub error_rate: f64,
    pub verification_samples: u32,
    #[serde(flatten)]
    pub integrity: SwapIntegrity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioScenario {
    pub num_assets: usize,
    #[serde(flatten)]
    pub valuation: PortfolioValuation,
    pub portfolio: Vec<DemoAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataScenario {
    pub jurisdictions: u32,
    pub compliance_score: f64,
    pub processing_hours: f64,
    #[serde(flatten)]
    pub value: DataValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SodiumScenario {
    pub na_ratio_input: f64,
    #[serde(flatten)]
    pub blend: SodiumBlend,
}

/// Supplementary calculators evaluated once at reference inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessCase {
    pub fleet_carbon: FleetCarbonRevenue,
    pub charging_plan: ChargingPlan,
    pub station_economics: StationEconomics,
    pub maintenance: MaintenanceOutlook,
    pub depreciation: DepreciationBlend,
    pub data_monetization: DataMonetization,
    pub chemistry: ChemistryEconomics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpOverview {
    pub summary: ExecutiveSummary,
    pub risks: Vec<RiskAssessment>,
    pub timeline: Vec<Milestone>,
    pub projection: Vec<YearProjection>,
}

/// Headline figures across the sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub scenario_count: usize,
    pub total_verified_credits: f64,
    pub total_carbon_value_usd: f64,
    pub total_avoided_emissions_kg: f64,
    pub avg_quality_factor: f64,
    pub avg_portfolio_yield: f64,
    pub avg_swap_integrity: f64,
    /// Sodium share of the best-scoring blend
    pub optimal_sodium_ratio: f64,
    pub peak_optimization_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub summary: SweepSummary,
    pub carbon_credits: Vec<CarbonScenario>,
    pub degradation_charging: Vec<ChargingScenario>,
    pub swap_integrity: Vec<SwapScenario>,
    pub blended_valuation: Vec<PortfolioScenario>,
    pub cross_border_data: Vec<DataScenario>,
    pub sodium_optimization: Vec<SodiumScenario>,
    pub business_case: BusinessCase,
    pub ip_portfolio: IpOverview,
}

fn validated<T, E: Display>(value: std::result::Result<T, E>, field: &str) -> Result<T> {
    value.map_err(|e| {
        warn!(field, error = %e, "{}", log_messages::formulas::INVALID_SCENARIO_INPUT);
        Error::invalid_input(field)
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn carbon_scenarios(params: &FormulaParameters) -> Result<Vec<CarbonScenario>> {
    info!("{}", log_messages::simulation::CARBON_SWEEP);
    let clean_ratio = params.carbon.default_clean_energy_ratio;

    let mut scenarios = Vec::new();
    for energy_kwh in grid::CARBON_ENERGY_KWH {
        let energy = validated(KilowattHours::try_new(energy_kwh), "energy_kwh")?;
        for vehicle_class in VehicleClass::ALL {
            scenarios.push(CarbonScenario {
                energy_kwh,
                vehicle_class,
                credits: compute_carbon_credits(energy, clean_ratio, &params.carbon),
            });
        }
    }
    Ok(scenarios)
}

fn charging_scenarios(params: &FormulaParameters) -> Result<Vec<ChargingScenario>> {
    info!("{}", log_messages::simulation::CHARGING_SWEEP);
    let capacity = validated(
        KilowattHours::try_new(grid::CHARGING_CAPACITY_KWH),
        "capacity_kwh",
    )?;
    let target_soc = validated(
        Percentage::try_new(grid::CHARGING_TARGET_SOC_PCT),
        "target_soc_pct",
    )?;

    let mut scenarios = Vec::new();
    for soh in grid::CHARGING_SOH {
        for temperature_c in grid::CHARGING_TEMPERATURE_C {
            for cycles in grid::CHARGING_CYCLES {
                let battery = BatteryState::new(
                    capacity,
                    validated(StateOfHealth::try_new(soh), "state_of_health")?,
                    validated(Celsius::try_new(temperature_c), "temperature_c")?,
                    target_soc,
                    cycles,
                )?;
                scenarios.push(ChargingScenario {
                    soh,
                    temperature_c,
                    cycles,
                    recommendation: compute_optimal_charging(&battery, &params.degradation),
                });
            }
        }
    }
    Ok(scenarios)
}

fn swap_scenarios(params: &FormulaParameters) -> Result<Vec<SwapScenario>> {
    info!("{}", log_messages::simulation::SWAP_SWEEP);

    let mut scenarios = Vec::new();
    for swaps_per_day in grid::SWAPS_PER_DAY {
        for error_rate in grid::SWAP_ERROR_RATE {
            for verification_samples in grid::SWAP_SAMPLES {
                let stats = SwapStationStats {
                    swaps_per_day,
                    error_rate: validated(Fraction::try_new(error_rate), "error_rate")?,
                    verification_samples,
                };
                scenarios.push(SwapScenario {
                    swaps_per_day,
                    error_rate,
                    verification_samples,
                    integrity: compute_integrity(&stats, &params.swap),
                });
            }
        }
    }
    Ok(scenarios)
}

fn portfolio_scenarios(settings: &SimulationSettings) -> Vec<PortfolioScenario> {
    info!("{}", log_messages::simulation::PORTFOLIO_SWEEP);

    grid::PORTFOLIO_SIZES
        .into_iter()
        .map(|num_assets| {
            let portfolio = sample_portfolio(num_assets, settings.portfolio_seed);
            let assets: Vec<PortfolioAsset> = portfolio.iter().map(|demo| demo.asset).collect();
            PortfolioScenario {
                num_assets,
                valuation: compute_portfolio_valuation(&assets),
                portfolio,
            }
        })
        .collect()
}

fn data_scenarios() -> Result<Vec<DataScenario>> {
    info!("{}", log_messages::simulation::DATA_SWEEP);

    let mut scenarios = Vec::new();
    for volume in grid::DATA_VOLUME_GB {
        let processing_hours = volume * grid::DATA_HOURS_PER_GB;
        for jurisdictions in grid::DATA_JURISDICTIONS {
            for compliance_score in grid::DATA_COMPLIANCE {
                let job = DataGovernanceJob {
                    volume_gb: validated(Gigabytes::try_new(volume), "volume_gb")?,
                    jurisdictions: validated(
                        JurisdictionCount::try_new(jurisdictions),
                        "jurisdictions",
                    )?,
                    compliance_score: validated(
                        Fraction::try_new(compliance_score),
                        "compliance_score",
                    )?,
                    processing_hours: validated(
                        Hours::try_new(processing_hours),
                        "processing_hours",
                    )?,
                };
                scenarios.push(DataScenario {
                    jurisdictions,
                    compliance_score,
                    processing_hours,
                    value: compute_data_value(&job),
                });
            }
        }
    }
    Ok(scenarios)
}

fn sodium_scenarios() -> Result<Vec<SodiumScenario>> {
    info!("{}", log_messages::simulation::SODIUM_SWEEP);
    let li_cost = validated(UsdPerKwh::try_new(grid::SODIUM_LI_COST), "li_cost_per_kwh")?;
    let na_cost = validated(UsdPerKwh::try_new(grid::SODIUM_NA_COST), "na_cost_per_kwh")?;
    let target = validated(
        Fraction::try_new(grid::SODIUM_PERFORMANCE_TARGET),
        "performance_target",
    )?;

    grid::SODIUM_RATIOS
        .into_iter()
        .map(|na_ratio| -> Result<SodiumScenario> {
            let mix = BatteryChemistryMix {
                li_capacity_kwh: validated(
                    KilowattHours::try_new(grid::SODIUM_TOTAL_CAPACITY_KWH * (1.0 - na_ratio)),
                    "li_capacity_kwh",
                )?,
                na_capacity_kwh: validated(
                    KilowattHours::try_new(grid::SODIUM_TOTAL_CAPACITY_KWH * na_ratio),
                    "na_capacity_kwh",
                )?,
                li_cost_per_kwh: li_cost,
                na_cost_per_kwh: na_cost,
                performance_target: target,
            };
            Ok(SodiumScenario {
                na_ratio_input: na_ratio,
                blend: compute_sodium_blend(&mix)?,
            })
        })
        .collect()
}

fn business_case(params: &FormulaParameters) -> Result<BusinessCase> {
    let fleet_carbon = compute_fleet_carbon_revenue(
        reference::FLEET_VEHICLES,
        validated(
            KilowattHours::try_new(reference::FLEET_KWH_PER_CHARGE),
            "kwh_per_charge",
        )?,
        reference::FLEET_CHARGES_PER_MONTH,
        validated(
            UsdPerTonne::try_new(reference::FLEET_CARBON_PRICE),
            "carbon_price",
        )?,
        params.carbon.grid_intensity,
    );

    let charging_plan = compute_charging_plan(
        validated(
            KilowattHours::try_new(reference::PLAN_CAPACITY_KWH),
            "capacity_kwh",
        )?,
        validated(
            StateOfHealth::from_percent(reference::PLAN_SOH_PCT),
            "state_of_health",
        )?,
        validated(
            Celsius::try_new(reference::PLAN_TEMPERATURE_C),
            "temperature_c",
        )?,
    );

    let station_economics = compute_station_economics(
        reference::STATIONS,
        reference::STATION_SWAPS_PER_DAY,
        validated(Usd::try_new(reference::SWAP_FEE), "swap_fee")?,
        reference::TARGET_UPTIME_PCT,
    );

    let maintenance = compute_maintenance_outlook(
        reference::BATTERIES,
        reference::BATTERY_SWAPS_PER_DAY,
        validated(
            Usd::try_new(reference::MAINTENANCE_COST_PER_BATTERY),
            "maintenance_cost_per_battery",
        )?,
    );

    let depreciation = compute_depreciation_blend(
        validated(Usd::try_new(reference::VEHICLE_PRICE), "vehicle_price")?,
        validated(Usd::try_new(reference::BATTERY_VALUE), "battery_value")?,
        validated(Usd::try_new(reference::SOFTWARE_VALUE), "software_value")?,
        reference::AGE_MONTHS,
    );

    let data_monetization = compute_data_monetization(
        reference::COUNTRIES,
        reference::VEHICLES_PER_COUNTRY,
        reference::DATA_POINTS_PER_VEHICLE_DAY,
    );

    let chemistry = compare_sodium_lithium(
        validated(
            KilowattHours::try_new(reference::CHEMISTRY_CAPACITY_KWH),
            "capacity",
        )?,
        reference::CYCLE_TARGET,
        validated(
            UsdPerKwh::try_new(reference::LI_COST_PER_KWH),
            "li_cost_per_kwh",
        )?,
    )?;

    Ok(BusinessCase {
        fleet_carbon,
        charging_plan,
        station_economics,
        maintenance,
        depreciation,
        data_monetization,
        chemistry,
    })
}

fn ip_overview(settings: &SimulationSettings) -> Result<IpOverview> {
    Ok(IpOverview {
        summary: ip_portfolio::executive_summary(),
        risks: assess_portfolio_risk(),
        timeline: filing_timeline(settings.timeline_start)?,
        projection: investment_projection(),
    })
}

fn summarize(
    carbon: &[CarbonScenario],
    charging: &[ChargingScenario],
    swap: &[SwapScenario],
    portfolio: &[PortfolioScenario],
    data: &[DataScenario],
    sodium: &[SodiumScenario],
) -> SweepSummary {
    let score = |s: &&SodiumScenario| s.blend.optimization_score;
    let best_blend = sodium.iter().max_by(|a, b| score(a).total_cmp(&score(b)));

    SweepSummary {
        scenario_count: carbon.len()
            + charging.len()
            + swap.len()
            + portfolio.len()
            + data.len()
            + sodium.len(),
        total_verified_credits: carbon.iter().map(|s| s.credits.verified_credits).sum(),
        total_carbon_value_usd: carbon.iter().map(|s| s.credits.carbon_value_usd).sum(),
        total_avoided_emissions_kg: carbon.iter().map(|s| s.credits.avoided_emissions_kg).sum(),
        avg_quality_factor: mean(carbon.iter().map(|s| s.credits.quality_factor)),
        avg_portfolio_yield: mean(portfolio.iter().map(|s| s.valuation.blended_yield)),
        avg_swap_integrity: mean(swap.iter().map(|s| s.integrity.integrity_score)),
        optimal_sodium_ratio: best_blend.map_or(0.0, |s| s.blend.na_ratio),
        peak_optimization_score: best_blend.map_or(0.0, |s| s.blend.optimization_score),
    }
}

/// Sweep every formula family and assemble the report
#[instrument(skip_all, fields(seed = settings.portfolio_seed))]
pub fn run(params: &FormulaParameters, settings: &SimulationSettings) -> Result<SimulationReport> {
    let carbon_credits = carbon_scenarios(params)?;
    let degradation_charging = charging_scenarios(params)?;
    let swap_integrity = swap_scenarios(params)?;
    let blended_valuation = portfolio_scenarios(settings);
    let cross_border_data = data_scenarios()?;
    let sodium_optimization = sodium_scenarios()?;

    let summary = summarize(
        &carbon_credits,
        &degradation_charging,
        &swap_integrity,
        &blended_valuation,
        &cross_border_data,
        &sodium_optimization,
    );

    info!(
        scenarios = summary.scenario_count,
        "{}",
        log_messages::application::SWEEP_COMPLETED
    );

    Ok(SimulationReport {
        summary,
        carbon_credits,
        degradation_charging,
        swap_integrity,
        blended_valuation,
        cross_border_data,
        sodium_optimization,
        business_case: business_case(params)?,
        ip_portfolio: ip_overview(settings)?,
    })
}
