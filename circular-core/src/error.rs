//! Error types for circular values, statistics and configuration.

/// Result type for circular value operations
pub type CircularResult<T> = Result<T, CircularError>;

/// Error type for circular value operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CircularError {
    /// Malformed textual input (wrong token shape, non-numeric parts).
    #[error("Invalid vector format: {0}")]
    InvalidVectorFormat(String),

    /// A numeric value is NaN, infinite, or outside the declared range.
    #[error("Invalid circular value: {0}")]
    InvalidCircularValue(String),

    /// A statistic is mathematically undefined for the given input.
    #[error("Invalid circular operation: {0}")]
    InvalidCircularOperation(String),
}

/// Error type for analysis configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
