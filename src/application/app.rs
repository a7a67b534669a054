use crate::application::simulation::{self, SimulationReport};
use crate::config::Settings;
use crate::infrastructure::log_messages;
use crate::Result;
use tracing::{info, instrument};

/// Main application struct that wires configuration to the scenario sweep
pub struct Application {
    settings: Settings,
}

impl Application {
    /// Load settings from defaults, config files and the environment
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Ok(Self::with_settings(settings))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    #[instrument(skip(self), fields(environment = %self.settings.application.environment))]
    pub fn run(&self) -> Result<SimulationReport> {
        info!("{}", log_messages::application::STARTING);
        simulation::run(&self.settings.formulas, &self.settings.simulation)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
