use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request to {url} failed with status: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No user list found in response from {source_name}")]
    MissingUserList { source_name: String },

    #[error("Unsupported output format: {value}")]
    UnsupportedFormat { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::Http(_) | EtlError::HttpStatus { .. } => ErrorCategory::Network,
            EtlError::Serialization(_) | EtlError::MissingUserList { .. } => ErrorCategory::Data,
            EtlError::Csv(_) | EtlError::Io(_) => ErrorCategory::Storage,
            EtlError::UnsupportedFormat { .. }
            | EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 單一來源失敗只影響該來源，其餘錯誤依類型升級
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::Http(e) if e.is_timeout() => "The API did not respond in time".to_string(),
            EtlError::Http(e) => format!("Could not reach the API: {}", e),
            EtlError::HttpStatus { status, .. } => {
                format!("The API answered with HTTP status {}", status)
            }
            EtlError::Serialization(e) => format!("The API response is not valid JSON: {}", e),
            EtlError::MissingUserList { .. } => {
                "No user information found in the API response.".to_string()
            }
            EtlError::UnsupportedFormat { .. } => {
                "Invalid file format specified. Please choose JSON or CSV.".to_string()
            }
            EtlError::Csv(e) => format!("Could not write CSV data: {}", e),
            EtlError::Io(e) => format!("Could not write the output file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the source URL",
            ErrorCategory::Data => "Check that the source still returns a results/data/users list",
            ErrorCategory::Storage => "Make sure the output folder exists and is writable",
            ErrorCategory::Configuration => "Review the command line flags and the sources file",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
