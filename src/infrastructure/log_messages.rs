//! Log message constants
//!
//! This module centralizes the messages emitted through `tracing` so their
//! wording stays consistent between the library and the binary.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting climate intelligence scenario sweep";
    pub const SWEEP_COMPLETED: &str = "Scenario sweep completed";
    pub const REPORT_WRITTEN: &str = "Simulation report written to stdout";
}

/// Configuration messages
pub mod configuration {
    pub const LOADING_CONFIG: &str = "Loading configuration for environment";
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}

/// Messages raised while evaluating formulas
pub mod formulas {
    pub const INVERTED_COMPLEXITY_PENALTY: &str =
        "Jurisdiction complexity penalty is negative; adjusted data value is inverted";
    pub const ZERO_CAPACITY_BLEND: &str =
        "Chemistry mix has no lithium-ion or sodium-ion capacity; blend is undefined";
    pub const INVALID_SCENARIO_INPUT: &str = "Scenario input rejected by validation";
}

/// Per-family sweep progress
pub mod simulation {
    pub const CARBON_SWEEP: &str = "Sweeping carbon credit scenarios";
    pub const CHARGING_SWEEP: &str = "Sweeping charging scenarios";
    pub const SWAP_SWEEP: &str = "Sweeping swap station scenarios";
    pub const PORTFOLIO_SWEEP: &str = "Sweeping portfolio scenarios";
    pub const DATA_SWEEP: &str = "Sweeping data value scenarios";
    pub const SODIUM_SWEEP: &str = "Sweeping sodium blend scenarios";
}
