use crate::domain::parameters::FormulaParameters;
use crate::domain::valuation::demo_portfolio::DEFAULT_SEED;
use crate::infrastructure::log_messages;
use chrono::NaiveDate;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

const DEFAULT_ENVIRONMENT: &str = "development";
const ENV_PREFIX: &str = "LCIS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub formulas: FormulaParameters,
    pub logging: LoggingSettings,
    pub simulation: SimulationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub environment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Seed for the generated demo portfolios
    pub portfolio_seed: u64,
    /// First day of the IP filing schedule
    pub timeline_start: NaiveDate,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            portfolio_seed: DEFAULT_SEED,
            timeline_start: NaiveDate::from_ymd_opt(2025, 1, 1).expect("Valid calendar date"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            application: ApplicationSettings {
                environment: DEFAULT_ENVIRONMENT.to_string(),
            },
            formulas: FormulaParameters::default(),
            logging: LoggingSettings {
                level: "info".to_string(),
                format: LogFormat::Json,
            },
            simulation: SimulationSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());
        debug!(%environment, "{}", log_messages::configuration::LOADING_CONFIG);

        let config = Self::with_defaults(&environment)?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builder seeded with every default value, formula tunables included
    fn with_defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self {
            application: ApplicationSettings {
                environment: environment.to_string(),
            },
            ..Self::default()
        };

        Ok(Config::builder().add_source(Config::try_from(&defaults)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_defaults_survive_the_config_layer() {
        let settings: Settings = Settings::with_defaults("test")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.application.environment, "test");
        assert_eq!(settings.formulas, FormulaParameters::default());
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.simulation, SimulationSettings::default());
    }

    #[test]
    fn test_override_formula_parameter() {
        let settings: Settings = Settings::with_defaults("test")
            .unwrap()
            .set_override("formulas.carbon.carbon_price", 40.0)
            .unwrap()
            .set_override("logging.format", "compact")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.formulas.carbon.carbon_price.into_inner(), 40.0);
        assert_eq!(settings.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_out_of_range_parameter_is_rejected() {
        let result = Settings::with_defaults("test")
            .unwrap()
            .set_override("formulas.carbon.accuracy", 1.5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>();

        assert!(result.is_err());
    }
}
