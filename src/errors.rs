use thiserror::Error;

/// Unified error type for configuration, storage, and environment failures.
///
/// Missing wizard fields are not errors: the controller reports them as a
/// blocked transition instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Environment(String),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl From<dialoguer::Error> for ReportError {
    fn from(err: dialoguer::Error) -> Self {
        ReportError::Prompt(err.to_string())
    }
}

impl From<url::ParseError> for ReportError {
    fn from(err: url::ParseError) -> Self {
        ReportError::InvalidInput(err.to_string())
    }
}
