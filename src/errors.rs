use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Invalid parameters or a malformed thrust curve, raised before any step runs.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown motor: {0}")]
    UnknownMotor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
