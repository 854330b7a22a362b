use thiserror::Error;

use crate::domain::model::Severity;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("{entity} '{name}' not found")]
    NotFoundError { entity: String, name: String },

    #[error("Invalid input '{input}': {reason}")]
    InputFormatError { input: String, reason: String },

    #[error("Selection abandoned after {attempts} invalid attempts")]
    SelectionAbandoned { attempts: u32 },

    #[error("Input closed")]
    InputClosed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unexpected error: {message}")]
    UnexpectedError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClinicError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ClinicError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, name: &str) -> Self {
        ClinicError::NotFoundError {
            entity: entity.to_string(),
            name: name.to_string(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        ClinicError::UnexpectedError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClinicError::ValidationError { .. } => ErrorCategory::Validation,
            ClinicError::NotFoundError { .. } => ErrorCategory::Lookup,
            ClinicError::InputFormatError { .. }
            | ClinicError::SelectionAbandoned { .. }
            | ClinicError::InputClosed => ErrorCategory::Input,
            ClinicError::ConfigError { .. }
            | ClinicError::InvalidConfigValueError { .. }
            | ClinicError::TomlError(_) => ErrorCategory::Configuration,
            ClinicError::IoError(_)
            | ClinicError::SerializationError(_)
            | ClinicError::UnexpectedError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClinicError::InputFormatError { .. } | ClinicError::InputClosed => ErrorSeverity::Low,
            ClinicError::NotFoundError { .. } | ClinicError::SelectionAbandoned { .. } => {
                ErrorSeverity::Medium
            }
            ClinicError::ValidationError { .. }
            | ClinicError::ConfigError { .. }
            | ClinicError::InvalidConfigValueError { .. }
            | ClinicError::TomlError(_) => ErrorSeverity::High,
            ClinicError::IoError(_)
            | ClinicError::SerializationError(_)
            | ClinicError::UnexpectedError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Audit level used when this error is recorded.
    pub fn audit_severity(&self) -> Severity {
        match self.severity() {
            ErrorSeverity::Low => Severity::Info,
            ErrorSeverity::Medium => Severity::Warning,
            ErrorSeverity::High => Severity::Error,
            ErrorSeverity::Critical => Severity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClinicError::ValidationError { message, .. } => {
                format!("Invalid data: {}", message)
            }
            ClinicError::NotFoundError { entity, name } => {
                format!("No {} named '{}' was found", entity.to_lowercase(), name)
            }
            ClinicError::InputFormatError { .. } => {
                "Invalid input. Please enter a number from the list".to_string()
            }
            ClinicError::SelectionAbandoned { .. } => {
                "Too many invalid selections, operation cancelled".to_string()
            }
            ClinicError::InputClosed => "No more input available".to_string(),
            ClinicError::ConfigError { message } => format!("Configuration problem: {}", message),
            ClinicError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            ClinicError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ClinicError::IoError(_) | ClinicError::SerializationError(_) => {
                "A system error occurred".to_string()
            }
            ClinicError::UnexpectedError { message } => {
                format!("An unexpected error occurred: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClinicError::ValidationError { .. } => "Please check the data entered and try again",
            ClinicError::NotFoundError { .. } => "Please register it first",
            ClinicError::InputFormatError { .. } | ClinicError::SelectionAbandoned { .. } => {
                "Enter the number shown next to the pet you want"
            }
            ClinicError::InputClosed => "Restart the application to continue",
            ClinicError::ConfigError { .. }
            | ClinicError::InvalidConfigValueError { .. }
            | ClinicError::TomlError(_) => "Fix the configuration file and restart",
            ClinicError::IoError(_) | ClinicError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
            ClinicError::UnexpectedError { .. } => "Try the operation again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_maps_to_audit_level() {
        let err = ClinicError::validation("age", "must be a whole number");
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.audit_severity(), Severity::Error);

        let err = ClinicError::unexpected("boom");
        assert_eq!(err.audit_severity(), Severity::Critical);
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_not_found_message() {
        let err = ClinicError::not_found("Pet", "Rex");
        assert_eq!(err.to_string(), "Pet 'Rex' not found");
        assert_eq!(err.user_friendly_message(), "No pet named 'Rex' was found");
    }
}
