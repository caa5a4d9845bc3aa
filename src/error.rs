use thiserror::Error;

#[derive(Error, Debug)]
pub enum KicktunerError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid population state: {0}")]
    InvalidPopulationState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KicktunerError>;
