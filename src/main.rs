use anyhow::Result;
use lcis_formulas::infrastructure::{log_messages, telemetry};
use lcis_formulas::Application;
use tracing::{info, instrument};

#[instrument]
fn main() -> Result<()> {
    let app = Application::new()?;

    // Initialize tracing
    telemetry::init(&app.settings().logging)?;
    info!(
        environment = %app.settings().application.environment,
        "{}",
        log_messages::configuration::CONFIG_LOADED
    );

    let report = app.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!("{}", log_messages::application::REPORT_WRITTEN);

    Ok(())
}
