//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while turning raw patient attributes into a validated profile.
///
/// Every variant names the offending field so the caller can point at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be in range {range}, got {actual}")]
    OutOfRange {
        field: String,
        range: String,
        actual: f64,
    },

    #[error("Field '{field}' must be one of [{allowed}], got '{actual}'")]
    InvalidChoice {
        field: String,
        allowed: String,
        actual: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, range: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            range: range.into(),
            actual,
        }
    }

    /// Creates an invalid enumeration value error.
    pub fn invalid_choice(
        field: impl Into<String>,
        allowed: &[&str],
        actual: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidChoice {
            field: field.into(),
            allowed: allowed.join(", "),
            actual: actual.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// The name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidChoice { field, .. }
            | ValidationError::MissingField { field } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client errors
    InvalidParameter,
    MissingField,
    MalformedRequest,

    // Server errors
    ChartRenderFailed,
    InternalError,
}

impl ErrorCode {
    /// Whether the error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidParameter | ErrorCode::MissingField | ErrorCode::MalformedRequest
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::ChartRenderFailed => "CHART_RENDER_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
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

    /// Creates an invalid parameter error for a specific field.
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::MissingField { field } => {
                DomainError::new(ErrorCode::MissingField, err.to_string())
                    .with_detail("field", field.clone())
            }
            _ => DomainError::invalid_parameter(err.field().to_string(), err.to_string()),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("age", "(0, 120]", 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'age' must be in range (0, 120], got 150"
        );
    }

    #[test]
    fn validation_error_invalid_choice_displays_correctly() {
        let err = ValidationError::invalid_choice("breast_density", &["low", "high"], "dense");
        assert_eq!(
            format!("{}", err),
            "Field 'breast_density' must be one of [low, high], got 'dense'"
        );
    }

    #[test]
    fn validation_error_missing_field_displays_correctly() {
        let err = ValidationError::missing_field("bmi");
        assert_eq!(format!("{}", err), "Missing required field: bmi");
    }

    #[test]
    fn validation_error_exposes_field() {
        assert_eq!(ValidationError::out_of_range("bmi", "(0, 60]", 0.0).field(), "bmi");
        assert_eq!(
            ValidationError::invalid_choice("menopausal_status", &[], "x").field(),
            "menopausal_status"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InternalError, "Something broke");
        assert_eq!(format!("{}", err), "[INTERNAL_ERROR] Something broke");
    }

    #[test]
    fn domain_error_from_validation_names_field() {
        let err: DomainError = ValidationError::out_of_range("age", "(0, 120]", -5.0).into();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
        assert_eq!(err.details.get("field"), Some(&"age".to_string()));
    }

    #[test]
    fn domain_error_from_missing_field_uses_missing_code() {
        let err: DomainError = ValidationError::missing_field("age").into();
        assert_eq!(err.code(), ErrorCode::MissingField);
        assert_eq!(err.message(), "Missing required field: age");
    }

    #[test]
    fn error_code_classifies_client_errors() {
        assert!(ErrorCode::InvalidParameter.is_client_error());
        assert!(ErrorCode::MalformedRequest.is_client_error());
        assert!(!ErrorCode::ChartRenderFailed.is_client_error());
        assert_eq!(format!("{}", ErrorCode::MissingField), "MISSING_FIELD");
    }
}
