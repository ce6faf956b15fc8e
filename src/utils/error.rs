use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeekerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Unknown resort: {id}")]
    UnknownResort { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SeekerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeekerError::IoError(_) => ErrorCategory::Io,
            SeekerError::SerializationError(_)
            | SeekerError::CatalogError { .. }
            | SeekerError::UnknownResort { .. } => ErrorCategory::Data,
            SeekerError::ConfigError { .. }
            | SeekerError::ConfigValidationError { .. }
            | SeekerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 找不到度假村只影響單一指令
            SeekerError::UnknownResort { .. } => ErrorSeverity::Medium,
            SeekerError::ConfigError { .. }
            | SeekerError::ConfigValidationError { .. }
            | SeekerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SeekerError::SerializationError(_) | SeekerError::CatalogError { .. } => {
                ErrorSeverity::High
            }
            SeekerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeekerError::IoError(_) => {
                "Check that the resort data file and data directory exist and are readable"
            }
            SeekerError::SerializationError(_) => {
                "Make sure the resort data file is a JSON array of resort records"
            }
            SeekerError::CatalogError { .. } => {
                "Fix the resort data file: every resort needs a unique id, a name, and price and size from 1 to 3"
            }
            SeekerError::UnknownResort { .. } => {
                "Run `snowseeker list` to see the available resort ids"
            }
            SeekerError::ConfigError { .. }
            | SeekerError::ConfigValidationError { .. }
            | SeekerError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SeekerError::IoError(e) => format!("Cannot start: unable to read data ({})", e),
            SeekerError::SerializationError(e) => {
                format!("Cannot start: resort data is malformed ({})", e)
            }
            SeekerError::CatalogError { message } => {
                format!("Cannot start: resort data is invalid ({})", message)
            }
            SeekerError::UnknownResort { id } => format!("No resort named '{}'", id),
            other => format!("Invalid configuration: {}", other),
        }
    }

    /// 依錯誤類別決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Data => 2,
            ErrorCategory::Io => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeekerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories_map_to_exit_codes() {
        let config = SeekerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected a table".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let data = SeekerError::CatalogError {
            message: "duplicate id".to_string(),
        };
        assert_eq!(data.exit_code(), 2);

        let io = SeekerError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "resorts.json",
        ));
        assert_eq!(io.exit_code(), 3);
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_message_for_unknown_resort() {
        let err = SeekerError::UnknownResort {
            id: "Nowhere".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "No resort named 'Nowhere'");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
