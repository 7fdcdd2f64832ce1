//! Records: the values a schema is checked against
//!
//! A record type binds itself to validation through the [`Record`] trait.
//! The validator only ever reads through this trait; it never mutates a record.
//!
//! A field that a record does not supply, or supplies with the wrong kind,
//! reads as the zero value of its declared kind (`""` or `0`).

mod dynamic;
mod errors;

pub use dynamic::{DynamicRecord, FieldData};
pub use errors::{RecordError, RecordResult};

use crate::schema::FieldKind;

/// Borrowed view of a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
        }
    }
}

/// A value that can be validated field by field.
pub trait Record {
    /// Returns the value of the named field, or `None` if the record has no such field.
    fn value(&self, field: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        (**self).value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_kind() {
        assert_eq!(FieldValue::Text("x").kind(), FieldKind::Text);
        assert_eq!(FieldValue::Integer(0).kind(), FieldKind::Integer);
    }
}
