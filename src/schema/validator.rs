//! Field validator for records
//!
//! Validation semantics:
//! - Fields are checked in declaration order
//! - Per field, checks run required → maxLen → minLen → min → max → email
//! - The first violation anywhere in the record is returned; nothing is collected
//! - Unparsable bounds are treated as absent
//!
//! A required integer equal to zero is rejected: zero cannot be told apart
//! from "not provided" under this policy.
//!
//! Text length is measured in bytes.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{ValidationError, Violation};
use super::types::{FieldKind, FieldSpec, RecordSchema};
use crate::record::{FieldValue, Record};

/// Anchored `local@domain.tld` pattern
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// Returns true if `value` matches the email pattern.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// A bound parsed once at build time, keeping its declared text for messages.
#[derive(Debug, Clone)]
struct Bound {
    declared: String,
    value: i64,
}

impl Bound {
    fn compile(declared: Option<&String>) -> Option<Self> {
        let declared = declared?;
        let value = declared.parse::<i64>().ok()?;
        Some(Self {
            declared: declared.clone(),
            value,
        })
    }
}

#[derive(Debug, Clone)]
enum CompiledChecks {
    Text {
        max_len: Option<Bound>,
        min_len: Option<Bound>,
        email: bool,
    },
    Integer {
        min: Option<Bound>,
        max: Option<Bound>,
    },
}

#[derive(Debug, Clone)]
struct CompiledField {
    name: String,
    required: bool,
    checks: CompiledChecks,
}

impl CompiledField {
    fn compile(spec: &FieldSpec) -> Self {
        let c = &spec.constraints;
        let checks = match spec.kind {
            FieldKind::Text => CompiledChecks::Text {
                max_len: Bound::compile(c.max_len.as_ref()),
                min_len: Bound::compile(c.min_len.as_ref()),
                email: c.email,
            },
            FieldKind::Integer => CompiledChecks::Integer {
                min: Bound::compile(c.min.as_ref()),
                max: Bound::compile(c.max.as_ref()),
            },
        };

        Self {
            name: spec.name.clone(),
            required: c.required,
            checks,
        }
    }

    fn check(&self, value: Option<FieldValue<'_>>) -> Result<(), Violation> {
        match &self.checks {
            CompiledChecks::Text {
                max_len,
                min_len,
                email,
            } => {
                let text = match value {
                    Some(FieldValue::Text(s)) => s,
                    _ => "",
                };
                let len = i64::try_from(text.len()).unwrap_or(i64::MAX);

                if self.required && text.is_empty() {
                    return Err(Violation::Required);
                }
                if let Some(bound) = max_len {
                    if len > bound.value {
                        return Err(Violation::MaxLenExceeded {
                            bound: bound.declared.clone(),
                        });
                    }
                }
                if let Some(bound) = min_len {
                    if len < bound.value {
                        return Err(Violation::MinLenViolated {
                            bound: bound.declared.clone(),
                        });
                    }
                }
                if *email && !is_valid_email(text) {
                    return Err(Violation::InvalidEmail);
                }
            }
            CompiledChecks::Integer { min, max } => {
                let number = match value {
                    Some(FieldValue::Integer(n)) => n,
                    _ => 0,
                };

                if self.required && number == 0 {
                    return Err(Violation::Required);
                }
                if let Some(bound) = min {
                    if number < bound.value {
                        return Err(Violation::BelowMinimum {
                            bound: bound.declared.clone(),
                        });
                    }
                }
                if let Some(bound) = max {
                    if number > bound.value {
                        return Err(Violation::AboveMaximum {
                            bound: bound.declared.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Validator compiled from one [`RecordSchema`].
///
/// Holds no mutable state; one validator can serve any number of records,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    schema_name: String,
    fields: Vec<CompiledField>,
}

impl FieldValidator {
    /// Compiles a validator for the given schema.
    ///
    /// Bounds are parsed here; a bound that is not an integer is dropped.
    /// Constraints that do not apply to a field's kind are ignored.
    pub fn new(schema: &RecordSchema) -> Self {
        Self {
            schema_name: schema.name.clone(),
            fields: schema.fields.iter().map(CompiledField::compile).collect(),
        }
    }

    /// Name of the schema this validator was compiled from
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Validates a record, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first field (in declaration order)
    /// whose first failing check (in check order) rejected its value.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<(), ValidationError> {
        for field in &self.fields {
            field
                .check(record.value(&field.name))
                .map_err(|reason| ValidationError::new(&field.name, reason))?;
        }

        Ok(())
    }
}
