use std::io;
use thiserror::Error;

/// Custom error type for hoi-ola probes
#[derive(Error, Debug)]
pub enum HoiError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Sensor unavailable: {0}")]
    SensorUnavailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),
}

/// Result type alias for hoi-ola
pub type Result<T> = std::result::Result<T, HoiError>;

impl HoiError {
    /// Create a command error
    pub fn command<S: Into<String>>(msg: S) -> Self {
        HoiError::Command(msg.into())
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        HoiError::Parse(msg.into())
    }

    pub fn sensor_unavailable<S: Into<String>>(msg: S) -> Self {
        HoiError::SensorUnavailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        HoiError::MetricCollection(msg.into())
    }
}
