use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapLinkError {
    #[error("No display name for country code '{code}'")]
    MissingCountryMapping { code: String },

    #[error("Unknown map link provider: {id}")]
    UnknownProvider { id: String },

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MapLinkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapLinkError::MissingCountryMapping { .. } | MapLinkError::SerializationError(_) => {
                ErrorCategory::Data
            }
            MapLinkError::UnknownProvider { .. }
            | MapLinkError::InvalidUrl(_)
            | MapLinkError::TomlError(_)
            | MapLinkError::ConfigError { .. }
            | MapLinkError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MapLinkError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MapLinkError::MissingCountryMapping { code } => format!(
                "Add a name for '{}' under [countries] in the config file, or set unmapped_country = \"omit\"",
                code
            ),
            MapLinkError::UnknownProvider { .. } => {
                "Run with --list-providers to see the available provider ids".to_string()
            }
            MapLinkError::InvalidUrl(_) => "Check the provider base URL".to_string(),
            MapLinkError::IoError(_) => "Check that the file exists and is readable".to_string(),
            MapLinkError::TomlError(_) => "Fix the syntax of the TOML config file".to_string(),
            MapLinkError::SerializationError(_) => {
                "Make sure the address file is a JSON object with string fields".to_string()
            }
            MapLinkError::ConfigError { .. } | MapLinkError::InvalidConfigValueError { .. } => {
                "Review the configuration values".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MapLinkError::MissingCountryMapping { code } => {
                format!("Country code '{}' is not in the country table", code)
            }
            MapLinkError::UnknownProvider { id } => format!("There is no map provider named '{}'", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapLinkError>;
