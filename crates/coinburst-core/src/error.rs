//! Error types for Coinburst

use thiserror::Error;

/// The main error type for Coinburst operations
#[derive(Debug, Error)]
pub enum CoinburstError {
    #[error("Invalid range: {field} has min {min} greater than max {max}")]
    InvalidRange { field: String, min: f64, max: f64 },

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Non-finite value: {field} is {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown preset: {value} is not one of {allowed:?}")]
    UnknownPreset {
        value: String,
        allowed: Vec<String>,
    },

    #[error("Scheduler error: {0}")]
    SchedulerError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Coinburst operations
pub type Result<T> = std::result::Result<T, CoinburstError>;

impl From<toml::de::Error> for CoinburstError {
    fn from(err: toml::de::Error) -> Self {
        CoinburstError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for CoinburstError {
    fn from(err: toml::ser::Error) -> Self {
        CoinburstError::TomlSerError(err.to_string())
    }
}
