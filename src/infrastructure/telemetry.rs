//! Tracing subscriber setup

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise the configured level applies
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Install the global subscriber, writing to stderr so stdout carries only the report
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| Error::telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let settings = LoggingSettings {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        };

        // The first call may already have lost to another global subscriber
        let _ = init(&settings);
        assert!(matches!(init(&settings), Err(Error::Telemetry { .. })));
    }
}
