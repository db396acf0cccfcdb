use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Hospital directory unavailable: {message}")]
    DataFetchFailure { message: String },

    #[error("Contact submission failed: {message}")]
    SubmissionFailure { message: String },

    #[error("Contract violation: {message}")]
    ContractViolation { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl FinderError {
    pub fn data_fetch(message: impl Into<String>) -> Self {
        Self::DataFetchFailure {
            message: message.into(),
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::SubmissionFailure {
            message: message.into(),
        }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }

    /// Directory failures are absorbed by the fallback list; nothing else is.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataFetchFailure { .. })
    }

    /// Text safe to show an end user. Internals stay in the logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::DataFetchFailure { .. } => {
                "Could not reach the hospital directory. Showing cached results.".to_string()
            }
            Self::SubmissionFailure { .. } => {
                "Failed to send message. Please try again.".to_string()
            }
            Self::ValidationError { message } => message.clone(),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::IoError(_) | Self::SerializationError(_) | Self::ContractViolation { .. } => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
