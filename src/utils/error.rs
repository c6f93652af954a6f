use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Generation API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Generation API returned no text ({reason})")]
    EmptyResponseError { reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Api,
    Data,
    Io,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::ApiStatusError { .. } | EtlError::EmptyResponseError { .. } => {
                ErrorCategory::Api
            }
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            EtlError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingConfigError { .. } => {
                "Set the missing value via CLI flag, environment variable or config file"
            }
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Check the CLI flags and the TOML config file"
            }
            EtlError::ApiError(_) => "Check network connectivity and the API base URL",
            EtlError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that GEMINI_API_KEY is valid"
            }
            EtlError::ApiStatusError { status, .. } if *status == 429 => {
                "Quota exceeded, wait before running again"
            }
            EtlError::ApiStatusError { .. } => "Check the model name and API status",
            EtlError::EmptyResponseError { .. } => {
                "The model returned nothing, try rewording the input text"
            }
            EtlError::SerializationError(_) => {
                "The model reply was not the expected JSON object, run again"
            }
            EtlError::ProcessingError { .. } => "Check that the input file is valid UTF-8 text",
            EtlError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => "Could not reach the generation service".to_string(),
            ErrorCategory::Api => format!("Generation service error: {}", self),
            ErrorCategory::Data => format!("Could not understand the model reply: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
