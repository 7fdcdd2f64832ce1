//! Observable events emitted by the CLI
//!
//! The validator itself never logs; these cover the command layer only.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Schemas loaded from the schema directory
    SchemasLoaded,
    /// A schema file could not be loaded
    SchemaRejected,
    /// Record input could not be turned into a record
    RecordRejected,
    /// Record passed validation
    ValidationPassed,
    /// Record failed validation
    ValidationFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::SchemaRejected => "SCHEMA_REJECTED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::ValidationPassed => "VALIDATION_PASSED",
            Event::ValidationFailed => "VALIDATION_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::SchemaRejected => Severity::Error,
            Event::RecordRejected | Event::ValidationFailed => Severity::Warn,
            Event::ConfigLoaded | Event::SchemasLoaded | Event::ValidationPassed => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_not_info() {
        assert_eq!(Event::ValidationFailed.severity(), Severity::Warn);
        assert_eq!(Event::SchemaRejected.severity(), Severity::Error);
        assert_eq!(Event::ValidationPassed.severity(), Severity::Info);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Event::SchemasLoaded.to_string(), "SCHEMAS_LOADED");
    }
}
