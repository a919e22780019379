use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No planet selected")]
    EmptySelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanetError::Http(_) | PlanetError::Rejected { .. } => ErrorCategory::Network,
            PlanetError::Serialization(_) => ErrorCategory::Data,
            PlanetError::Io(_)
            | PlanetError::Url(_)
            | PlanetError::ConfigError { .. }
            | PlanetError::ConfigValidationError { .. }
            | PlanetError::InvalidConfigValueError { .. }
            | PlanetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlanetError::ValidationError { .. } | PlanetError::EmptySelection => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlanetError::EmptySelection => ErrorSeverity::Low,
            PlanetError::Http(_) => ErrorSeverity::Medium,
            PlanetError::Rejected { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            PlanetError::Rejected { .. }
            | PlanetError::Serialization(_)
            | PlanetError::ValidationError { .. } => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanetError::Http(e) if e.is_timeout() => {
                "The planet server did not answer in time".to_string()
            }
            PlanetError::Http(_) => "Could not reach the planet server".to_string(),
            PlanetError::Rejected { message, .. } => message.clone(),
            PlanetError::Serialization(_) => {
                "The planet server sent a response that could not be read".to_string()
            }
            PlanetError::EmptySelection => "Pick a planet before voting".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the server is running and --base-url points at it",
            ErrorCategory::Data => "Make sure the server speaks the planet JSON API",
            ErrorCategory::Configuration => "Review the configuration file and command line flags",
            ErrorCategory::Input => "Check the planet name and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanetError>;
