//! Fixed coefficients used by the formula library
//!
//! Tunable parameters (carbon price, efficiencies, degradation coefficients)
//! live in [`crate::domain::parameters`]; the values here are structural
//! constants of each formula.

/// Unit conversions
pub mod units {
    /// Kilograms per tonne
    pub const KG_PER_TONNE: f64 = 1000.0;

    /// Seconds per day
    pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

    /// Days per year used by annualised projections
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Months per year
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Hours per day
    pub const HOURS_PER_DAY: f64 = 24.0;
}

/// Carbon credit defaults
pub mod carbon {
    pub const DEFAULT_CARBON_PRICE_PER_TONNE: f64 = 25.0;
    pub const DEFAULT_BASE_CREDIT_RATE: f64 = 0.1;
    pub const DEFAULT_CHARGING_EFFICIENCY: f64 = 0.92;
    /// kg CO2e per kWh, grid average
    pub const DEFAULT_GRID_INTENSITY: f64 = 0.4;
    pub const DEFAULT_CLEAN_ENERGY_RATIO: f64 = 0.7;
    /// Telemetry accuracy required for credit issuance
    pub const DEFAULT_ACCURACY_THRESHOLD: f64 = 0.95;
    pub const DEFAULT_VERIFICATION_CONFIDENCE: f64 = 0.99;
}

/// Degradation-aware charging
pub mod charging {
    /// Annual base degradation (2%)
    pub const DEFAULT_BASE_DEGRADATION_RATE: f64 = 0.02;
    /// Degradation per degree above the reference temperature
    pub const DEFAULT_TEMPERATURE_COEFFICIENT: f64 = 0.001;
    /// Degradation per percent of target state of charge
    pub const DEFAULT_DEPTH_OF_DISCHARGE_COEFFICIENT: f64 = 0.0005;
    /// Degradation per completed cycle
    pub const DEFAULT_CYCLE_COEFFICIENT: f64 = 0.000_001;

    pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;
    /// Temperature span over which the rate derates linearly
    pub const TEMPERATURE_DERATING_SPAN_C: f64 = 50.0;
    pub const MIN_TEMPERATURE_FACTOR: f64 = 0.5;

    /// Base charging rate as a fraction of C
    pub const BASE_C_RATE: f64 = 0.8;

    /// SOH at which no credit-yield bonus or penalty applies
    pub const SOH_YIELD_PIVOT: f64 = 0.8;
    pub const SOH_YIELD_SLOPE: f64 = 0.5;

    /// One-year projections never fall below this SOH
    pub const MIN_PROJECTED_SOH: f64 = 0.6;

    /// C-rate plan temperature bands
    pub mod plan {
        pub const COLD_LIMIT_C: f64 = 0.0;
        pub const HOT_LIMIT_C: f64 = 35.0;
        pub const COLD_DERATING: f64 = 0.7;
        pub const HOT_DERATING: f64 = 0.8;

        /// Portion of the pack a charge session fills
        pub const CHARGE_WINDOW: f64 = 0.8;

        pub const AGGRESSIVE_C_RATE: f64 = 1.0;
        pub const GENTLE_C_RATE: f64 = 0.5;
        pub const AGGRESSIVE_DEGRADATION_FACTOR: f64 = 1.2;
        pub const GENTLE_DEGRADATION_FACTOR: f64 = 0.8;

        pub const BASE_CYCLE_LIFE: f64 = 2000.0;
        pub const REPLACEMENT_COST_PER_KWH: f64 = 200.0;
        /// Share of the life-extension value counted as savings
        pub const SAVINGS_SHARE: f64 = 0.5;
    }
}

/// Swap-station integrity
pub mod swap {
    pub const DEFAULT_SWAP_TIME_SECONDS: f64 = 90.0;
    /// Fraction of swaps that should be independently verified
    pub const VERIFICATION_SAMPLE_RATE: f64 = 0.1;

    /// Above this many samples the normal approximation is used
    pub const NORMAL_APPROXIMATION_MIN_SAMPLES: u32 = 30;
    /// z-score for a 95% confidence interval
    pub const Z_95: f64 = 1.96;
    /// Margin used when the sample is too small for the normal approximation
    pub const SMALL_SAMPLE_MARGIN: f64 = 0.1;

    /// Station economics
    pub mod economics {
        pub const UPTIME_PIVOT_PCT: f64 = 99.0;
        pub const UPTIME_BONUS_SLOPE: f64 = 0.1;
        pub const MAX_RELIABILITY_SCORE: f64 = 10.0;
        pub const INDUSTRY_AVERAGE_UPTIME_PCT: f64 = 96.0;
    }

    /// Maintenance outlook
    pub mod maintenance {
        pub const BASE_INTEGRITY: f64 = 95.0;
        pub const MIN_INTEGRITY: f64 = 70.0;
        /// Swaps per battery that cost one integrity point
        pub const SWAPS_PER_INTEGRITY_POINT: f64 = 1000.0;
        pub const HIGH_URGENCY_BELOW: f64 = 80.0;
        pub const MEDIUM_URGENCY_BELOW: f64 = 90.0;
        pub const HIGH_URGENCY_DOWNTIME_HOURS: f64 = 24.0;
        pub const MEDIUM_URGENCY_DOWNTIME_HOURS: f64 = 8.0;
        pub const LOW_URGENCY_DOWNTIME_HOURS: f64 = 2.0;
        pub const DOWNTIME_COST_PER_HOUR: f64 = 1000.0;
    }
}

/// Portfolio valuation
pub mod portfolio {
    /// Maximum discount applied to the riskiest asset
    pub const MAX_RISK_DISCOUNT: f64 = 0.3;
    /// Weight of the logarithmic diversification bonus
    pub const DIVERSIFICATION_COEFFICIENT: f64 = 0.1;
    /// Assumed portfolio volatility for the Sharpe ratio
    pub const ASSUMED_VOLATILITY: f64 = 0.15;

    /// Depreciation blender
    pub mod depreciation {
        pub const VEHICLE_LINEAR_RATE: f64 = 0.15;
        pub const VEHICLE_QUADRATIC_RATE: f64 = 0.05;
        pub const BATTERY_LINEAR_RATE: f64 = 0.08;
        pub const SOFTWARE_APPRECIATION_RATE: f64 = 0.05;
        /// Premium for an integrated vehicle, battery and software system
        pub const SYNERGY_FACTOR: f64 = 1.15;
        /// Depreciation of a conventional vehicle used as the comparable
        pub const TRADITIONAL_DEPRECIATION_RATE: f64 = 0.20;
    }
}

/// Cross-border data stewarding
pub mod data {
    pub const BASE_VALUE_PER_GB: f64 = 2.5;
    pub const JURISDICTION_PREMIUM: f64 = 0.15;
    pub const JURISDICTION_COMPLEXITY_PENALTY: f64 = 0.05;
    pub const COMPLIANCE_BASE: f64 = 0.5;
    pub const COMPLIANCE_SLOPE: f64 = 1.5;
    /// Target processing hours per GB
    pub const TARGET_HOURS_PER_GB: f64 = 0.1;
    pub const MIN_PROCESSING_HOURS: f64 = 0.1;
    pub const MAX_TIME_EFFICIENCY: f64 = 1.5;
    pub const SECURITY_FACTOR: f64 = 0.95;
    pub const PROCESSING_COST_PER_HOUR: f64 = 50.0;

    /// Fleet data monetisation
    pub mod monetization {
        pub const VALUE_PER_DATA_POINT: f64 = 0.001;
        pub const PREMIUM_INSIGHTS_MULTIPLIER: f64 = 5.0;
        pub const PREMIUM_CLIENT_SHARE: f64 = 0.2;
        pub const NETWORK_EFFECT_PER_COUNTRY: f64 = 0.1;
        pub const MAX_NETWORK_EFFECT: f64 = 1.0;
        pub const REGULATORY_VALUE_PER_COUNTRY: f64 = 10_000.0;
    }
}

/// Sodium-ion blending
pub mod sodium {
    pub const LI_PERFORMANCE: f64 = 1.0;
    pub const NA_PERFORMANCE: f64 = 0.75;
    pub const INTEGRATION_BONUS: f64 = 0.1;

    pub const ALPHA: f64 = 0.6;
    pub const BETA: f64 = 0.3;
    pub const GAMMA: f64 = 0.1;

    /// Scale applied to performance per dollar for readability
    pub const PERFORMANCE_COST_SCALE: f64 = 1000.0;
    pub const TARGET_MET_MULTIPLIER: f64 = 1.2;
    pub const TARGET_MISSED_MULTIPLIER: f64 = 0.8;

    /// Sodium versus lithium economics
    pub mod economics {
        pub const COST_REDUCTION: f64 = 0.30;
        pub const ENERGY_DENSITY_RATIO: f64 = 0.85;
        pub const CYCLE_LIFE_ADVANTAGE: f64 = 1.25;
        /// Payback divides by at least this much annual saving
        pub const MIN_ANNUAL_SAVINGS: f64 = 1.0;
    }
}

/// Intellectual property portfolio planning
pub mod ip {
    /// Highest score on the 1-10 evaluation scale
    pub const MAX_SCORE: u8 = 10;

    pub const PATENT_EFFECTIVENESS: f64 = 8.0;
    pub const DEFENSIVE_PUBLICATION_EFFECTIVENESS: f64 = 6.0;
    pub const TRADE_SECRET_EFFECTIVENESS: f64 = 7.0;

    /// Filing and implementation schedule, in days
    pub mod timeline {
        pub const PATENT_FILING_STAGGER_DAYS: u64 = 30;
        /// 18 months after filing
        pub const PUBLICATION_AFTER_FILING_DAYS: u64 = 540;
        /// Roughly three years after filing
        pub const GRANT_AFTER_FILING_DAYS: u64 = 1095;
        pub const TRADE_SECRET_STAGGER_DAYS: u64 = 15;
    }

    /// Six-year cost and revenue outlook
    pub mod projection {
        pub const FIRST_YEAR: i32 = 2025;
        pub const PATENT_COSTS: [f64; 6] = [
            200_000.0, 150_000.0, 100_000.0, 80_000.0, 60_000.0, 40_000.0,
        ];
        pub const TRADE_SECRET_COSTS: [f64; 6] = [
            10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0, 35_000.0,
        ];
        pub const PATENT_REVENUE: [f64; 6] = [
            0.0,
            500_000.0,
            2_000_000.0,
            5_000_000.0,
            12_000_000.0,
            20_000_000.0,
        ];
        pub const TRADE_SECRET_REVENUE: [f64; 6] = [
            100_000.0,
            300_000.0,
            600_000.0,
            1_000_000.0,
            1_500_000.0,
            2_200_000.0,
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sodium_weights_sum_to_one() {
        let total = sodium::ALPHA + sodium::BETA + sodium::GAMMA;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_ordering() {
        const _: () = assert!(
            swap::maintenance::HIGH_URGENCY_BELOW < swap::maintenance::MEDIUM_URGENCY_BELOW
        );
        const _: () = assert!(swap::maintenance::MIN_INTEGRITY < swap::maintenance::BASE_INTEGRITY);
        const _: () = assert!(charging::plan::GENTLE_C_RATE < charging::plan::AGGRESSIVE_C_RATE);
        const _: () = assert!(
            ip::timeline::PUBLICATION_AFTER_FILING_DAYS < ip::timeline::GRANT_AFTER_FILING_DAYS
        );
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(units::SECONDS_PER_DAY, 86_400.0);
        assert_eq!(units::KG_PER_TONNE, 1000.0);
    }
}
