//! Schema type definitions
//!
//! Supported field kinds:
//! - text: UTF-8 string
//! - integer: 64-bit signed integer
//!
//! Bounds (`maxLen`, `minLen`, `min`, `max`) are declared as text and only
//! interpreted when a validator is built from the schema.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Semantic type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Integer,
}

impl FieldKind {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Constraint set attached to a single field.
///
/// Every attribute is independently present or absent. The builder methods
/// consume and return `self` so constraint sets read declaratively:
///
/// ```
/// use fieldcheck::schema::Constraints;
///
/// let name = Constraints::new().required().max_len(10);
/// assert_eq!(name.max_len.as_deref(), Some("10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Text must be non-empty, integer must be non-zero
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    /// Maximum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_len: Option<String>,
    /// Minimum text length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_len: Option<String>,
    /// Minimum integer value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Maximum integer value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    /// Text must be an email address
    #[serde(default, skip_serializing_if = "is_false")]
    pub email: bool,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_len(mut self, bound: impl fmt::Display) -> Self {
        self.max_len = Some(bound.to_string());
        self
    }

    pub fn min_len(mut self, bound: impl fmt::Display) -> Self {
        self.min_len = Some(bound.to_string());
        self
    }

    pub fn min(mut self, bound: impl fmt::Display) -> Self {
        self.min = Some(bound.to_string());
        self
    }

    pub fn max(mut self, bound: impl fmt::Display) -> Self {
        self.max = Some(bound.to_string());
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    fn has_length_bounds(&self) -> bool {
        self.max_len.is_some() || self.min_len.is_some()
    }

    fn has_value_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Definition of one record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in records and errors
    pub name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Constraints checked against the field's value
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl FieldSpec {
    pub fn text(name: impl Into<String>, constraints: Constraints) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            constraints,
        }
    }

    pub fn integer(name: impl Into<String>, constraints: Constraints) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Integer,
            constraints,
        }
    }
}

/// Complete schema of one record type.
///
/// Field order is declaration order and is the order validation walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Unique schema name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions in declaration order
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    /// Starts a declarative schema definition
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            schema: RecordSchema::new(name, Vec::new()),
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates the schema structure itself (not a record).
    ///
    /// Unparsable bounds are deliberately not rejected here; validation
    /// treats them as absent.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::invalid_structure(
                "<unnamed>",
                "schema name must not be empty",
            ));
        }

        if !is_valid_name(&self.name) {
            return Err(SchemaError::invalid_structure(
                &self.name,
                "schema name may only contain letters, digits, '_' and '-'",
            ));
        }

        if self.fields.is_empty() {
            return Err(SchemaError::invalid_structure(
                &self.name,
                "schema must declare at least one field",
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(SchemaError::invalid_structure(
                    &self.name,
                    "field names must not be empty",
                ));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::invalid_structure(
                    &self.name,
                    format!("field '{}' is declared more than once", field.name),
                ));
            }

            let c = &field.constraints;
            match field.kind {
                FieldKind::Text if c.has_value_bounds() => {
                    return Err(SchemaError::invalid_structure(
                        &self.name,
                        format!("text field '{}' cannot declare min/max", field.name),
                    ));
                }
                FieldKind::Integer if c.has_length_bounds() => {
                    return Err(SchemaError::invalid_structure(
                        &self.name,
                        format!("integer field '{}' cannot declare minLen/maxLen", field.name),
                    ));
                }
                FieldKind::Integer if c.email => {
                    return Err(SchemaError::invalid_structure(
                        &self.name,
                        format!("integer field '{}' cannot be an email", field.name),
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Schema names double as file stems: `[A-Za-z0-9_-]+`
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Declarative builder for [`RecordSchema`].
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: RecordSchema,
}

impl SchemaBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = Some(description.into());
        self
    }

    /// Appends a text field
    pub fn text(
        mut self,
        name: impl Into<String>,
        constraints: impl FnOnce(Constraints) -> Constraints,
    ) -> Self {
        self.schema
            .fields
            .push(FieldSpec::text(name, constraints(Constraints::new())));
        self
    }

    /// Appends an integer field
    pub fn integer(
        mut self,
        name: impl Into<String>,
        constraints: impl FnOnce(Constraints) -> Constraints,
    ) -> Self {
        self.schema
            .fields
            .push(FieldSpec::integer(name, constraints(Constraints::new())));
        self
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.schema.fields.push(field);
        self
    }

    pub fn build(self) -> RecordSchema {
        self.schema
    }
}
