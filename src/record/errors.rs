//! Record construction errors
//!
//! These are raised while turning external input (JSON) into a record, before
//! validation runs. They are not validation failures.

use thiserror::Error;

/// Result type for record construction
pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Record must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    #[error("Field '{field}' is not declared by schema '{schema}'")]
    UndeclaredField { schema: String, field: String },

    #[error("Field '{field}': expected {expected}, got {actual}")]
    KindMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl RecordError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::NotAnObject { .. } => "RECORD_NOT_AN_OBJECT",
            RecordError::UndeclaredField { .. } => "RECORD_UNDECLARED_FIELD",
            RecordError::KindMismatch { .. } => "RECORD_KIND_MISMATCH",
        }
    }
}
