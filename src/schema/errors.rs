//! Schema and validation error types
//!
//! Error codes:
//! - FIELD_REQUIRED
//! - FIELD_MAX_LEN_EXCEEDED
//! - FIELD_MIN_LEN_VIOLATED
//! - FIELD_BELOW_MINIMUM
//! - FIELD_ABOVE_MAXIMUM
//! - FIELD_INVALID_EMAIL
//!
//! Schema handling errors (loading, registration, structure) carry their own
//! `SCHEMA_*` codes and never surface from validation itself.

use std::fmt;

use thiserror::Error;

/// The constraint a field value violated.
///
/// Bound-carrying variants hold the bound exactly as it was declared in the
/// schema so that messages echo the configured value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Text is empty or integer is zero
    Required,
    /// Text is longer than `maxLen`
    MaxLenExceeded { bound: String },
    /// Text is shorter than `minLen`
    MinLenViolated { bound: String },
    /// Integer is below `min`
    BelowMinimum { bound: String },
    /// Integer is above `max`
    AboveMaximum { bound: String },
    /// Text does not look like `local@domain.tld`
    InvalidEmail,
}

impl Violation {
    /// Returns the stable code for this violation
    pub fn code(&self) -> &'static str {
        match self {
            Violation::Required => "FIELD_REQUIRED",
            Violation::MaxLenExceeded { .. } => "FIELD_MAX_LEN_EXCEEDED",
            Violation::MinLenViolated { .. } => "FIELD_MIN_LEN_VIOLATED",
            Violation::BelowMinimum { .. } => "FIELD_BELOW_MINIMUM",
            Violation::AboveMaximum { .. } => "FIELD_ABOVE_MAXIMUM",
            Violation::InvalidEmail => "FIELD_INVALID_EMAIL",
        }
    }

    /// Returns the declared bound, if this violation has one
    pub fn bound(&self) -> Option<&str> {
        match self {
            Violation::MaxLenExceeded { bound }
            | Violation::MinLenViolated { bound }
            | Violation::BelowMinimum { bound }
            | Violation::AboveMaximum { bound } => Some(bound),
            Violation::Required | Violation::InvalidEmail => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "is required"),
            Violation::MaxLenExceeded { bound } => {
                write!(f, "exceeds maximum length of {}", bound)
            }
            Violation::MinLenViolated { bound } => {
                write!(f, "is shorter than minimum length of {}", bound)
            }
            Violation::BelowMinimum { bound } => {
                write!(f, "is less than minimum value of {}", bound)
            }
            Violation::AboveMaximum { bound } => {
                write!(f, "is greater than maximum value of {}", bound)
            }
            Violation::InvalidEmail => write!(f, "is not a valid email address"),
        }
    }
}

/// The first violation found in a record.
///
/// Displays as `"<field> <reason>"`, e.g. `"Age is less than minimum value of 18"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    field: String,
    reason: Violation,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: Violation) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The violated constraint
    pub fn reason(&self) -> &Violation {
        &self.reason
    }

    /// Stable error code of the violated constraint
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }
}

/// Errors raised while building, loading or registering schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema '{0}' not found")]
    UnknownSchema(String),

    #[error("Schema '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Invalid schema '{schema}': {reason}")]
    InvalidStructure { schema: String, reason: String },

    #[error("Malformed schema file '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

impl SchemaError {
    pub fn invalid_structure(schema: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidStructure {
            schema: schema.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::UnknownSchema(_) => "SCHEMA_UNKNOWN",
            SchemaError::AlreadyRegistered(_) => "SCHEMA_ALREADY_REGISTERED",
            SchemaError::InvalidStructure { .. } => "SCHEMA_INVALID_STRUCTURE",
            SchemaError::Malformed { .. } => "SCHEMA_MALFORMED",
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_field_and_bound() {
        let err = ValidationError::new(
            "Name",
            Violation::MaxLenExceeded { bound: "10".into() },
        );
        assert_eq!(err.to_string(), "Name exceeds maximum length of 10");
        assert_eq!(err.field(), "Name");
        assert_eq!(err.reason().bound(), Some("10"));
    }

    #[test]
    fn test_each_reason_has_distinct_message() {
        let reasons = [
            (Violation::Required, "is required"),
            (
                Violation::MinLenViolated { bound: "6".into() },
                "is shorter than minimum length of 6",
            ),
            (
                Violation::BelowMinimum { bound: "18".into() },
                "is less than minimum value of 18",
            ),
            (
                Violation::AboveMaximum { bound: "60".into() },
                "is greater than maximum value of 60",
            ),
            (Violation::InvalidEmail, "is not a valid email address"),
        ];

        for (reason, expected) in reasons {
            assert_eq!(reason.to_string(), expected);
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Violation::Required.code(), "FIELD_REQUIRED");
        assert_eq!(Violation::InvalidEmail.code(), "FIELD_INVALID_EMAIL");
        assert_eq!(
            ValidationError::new("Age", Violation::AboveMaximum { bound: "60".into() }).code(),
            "FIELD_ABOVE_MAXIMUM"
        );
    }

    #[test]
    fn test_unbounded_reasons_have_no_bound() {
        assert_eq!(Violation::Required.bound(), None);
        assert_eq!(Violation::InvalidEmail.bound(), None);
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::malformed("users.json", "Invalid JSON");
        assert_eq!(err.code(), "SCHEMA_MALFORMED");
        let display = err.to_string();
        assert!(display.contains("users.json"));
        assert!(display.contains("Invalid JSON"));
    }
}
