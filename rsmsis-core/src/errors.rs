use thiserror::Error;

/// Error type for invalid model configuration or input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MsisError {
    #[error("Switch 9 selects the Ap history, but the input carries no Ap history")]
    MissingApHistory,
    #[error("Invalid value {value} for switch {index}")]
    InvalidSwitch { index: usize, value: i32 },
    #[error("Switch vector must have 24 slots, got {0}")]
    WrongSwitchCount(usize),
    #[error("Target pressure must be positive and finite, got {0} mbar")]
    InvalidPressure(f64),
    #[error("Atmospheric context is missing {0}")]
    MissingContext(&'static str),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, MsisError>`.
pub type MsisResult<T> = Result<T, MsisError>;
