//! Schema-agnostic record with owned values
//!
//! Used when records arrive as data (JSON on stdin) rather than as a Rust type.

use serde_json::Value;

use super::errors::{RecordError, RecordResult};
use super::{FieldValue, Record};
use crate::schema::{FieldKind, RecordSchema};

/// Owned field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldData {
    Text(String),
    Integer(i64),
}

impl FieldData {
    fn as_value(&self) -> FieldValue<'_> {
        match self {
            FieldData::Text(s) => FieldValue::Text(s),
            FieldData::Integer(n) => FieldValue::Integer(*n),
        }
    }
}

/// Ordered name → value record.
///
/// Setting a field that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRecord {
    values: Vec<(String, FieldData)>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, FieldData::Text(value.into()));
        self
    }

    pub fn with_integer(mut self, field: impl Into<String>, value: i64) -> Self {
        self.set(field, FieldData::Integer(value));
        self
    }

    pub fn set(&mut self, field: impl Into<String>, data: FieldData) {
        let field = field.into();
        match self.values.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = data,
            None => self.values.push((field, data)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldData> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, data)| data)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds a record from a JSON object, typed by `schema`.
    ///
    /// Rejects non-objects, undeclared fields and values of the wrong JSON
    /// type. Declared fields missing from the object are left unset and
    /// read as zero values during validation.
    pub fn from_json(schema: &RecordSchema, value: &Value) -> RecordResult<Self> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject {
            actual: json_type_name(value),
        })?;

        for key in obj.keys() {
            if schema.field(key).is_none() {
                return Err(RecordError::UndeclaredField {
                    schema: schema.name.clone(),
                    field: key.clone(),
                });
            }
        }

        let mut record = DynamicRecord::new();
        for spec in &schema.fields {
            let Some(raw) = obj.get(&spec.name) else {
                continue;
            };

            let data = match (spec.kind, raw) {
                (FieldKind::Text, Value::String(s)) => FieldData::Text(s.clone()),
                (FieldKind::Integer, Value::Number(n)) if n.is_i64() => {
                    FieldData::Integer(n.as_i64().unwrap_or_default())
                }
                (kind, other) => {
                    return Err(RecordError::KindMismatch {
                        field: spec.name.clone(),
                        expected: kind.type_name(),
                        actual: json_type_name(other),
                    })
                }
            };
            record.set(spec.name.clone(), data);
        }

        Ok(record)
    }
}

impl Record for DynamicRecord {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        self.get(field).map(FieldData::as_value)
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
