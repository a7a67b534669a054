use crate::domain::errors::FormulaError;
use thiserror::Error;

/// Library error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),

    #[error("Invalid input: {field}")]
    InvalidInput { field: String },

    #[error("Telemetry error: {message}")]
    Telemetry { message: String },
}

impl Error {
    pub fn invalid_input(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
