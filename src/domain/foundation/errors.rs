//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A single field that failed its rule.
///
/// The `Display` output is the human-readable message shown to the user;
/// the field name is kept separately for keyed error sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    EmptyField { field: String, message: String },

    #[error("{message}")]
    OutOfRange { field: String, message: String },

    #[error("{message}")]
    InvalidFormat { field: String, message: String },

    #[error("{message}")]
    TooMany {
        field: String,
        max: usize,
        message: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a cardinality validation error.
    pub fn too_many(field: impl Into<String>, max: usize, message: impl Into<String>) -> Self {
        ValidationError::TooMany {
            field: field.into(),
            max,
            message: message.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooMany { field, .. } => field,
        }
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::EmptyField { message, .. }
            | ValidationError::OutOfRange { message, .. }
            | ValidationError::InvalidFormat { message, .. }
            | ValidationError::TooMany { message, .. } => message,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // State errors
    InvalidStateTransition,
    WizardComplete,

    // Identity errors
    MissingUserId,
    Unauthorized,

    // Infrastructure errors
    ProfileServiceError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::WizardComplete => "WIZARD_COMPLETE",
            ErrorCode::MissingUserId => "MISSING_USER_ID",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::ProfileServiceError => "PROFILE_SERVICE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } | ValidationError::TooMany { .. } => {
                ErrorCode::OutOfRange
            }
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.message()).with_detail("field", err.field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_only() {
        let err = ValidationError::empty_field("height", "Please enter your height");
        assert_eq!(format!("{}", err), "Please enter your height");
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn too_many_keeps_limit() {
        let err = ValidationError::too_many("goals", 3, "You can select up to 3 goals");
        assert!(matches!(err, ValidationError::TooMany { max: 3, .. }));
        assert_eq!(err.message(), "You can select up to 3 goals");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::MissingUserId, "User ID is unavailable");
        assert_eq!(format!("{}", err), "[MISSING_USER_ID] User ID is unavailable");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "weight")
            .with_detail("reason", "out of range");

        assert_eq!(err.details.get("field"), Some(&"weight".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"out of range".to_string()));
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError =
            ValidationError::out_of_range("weight", "Please enter a valid weight").into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.details.get("field"), Some(&"weight".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::WizardComplete), "WIZARD_COMPLETE");
        assert_eq!(
            format!("{}", ErrorCode::ProfileServiceError),
            "PROFILE_SERVICE_ERROR"
        );
    }
}
