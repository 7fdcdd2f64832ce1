//! Demonstration record type
//!
//! `Users` is an ordinary Rust struct bound to its schema through
//! [`Record`]. Used by the `demo` command.

use crate::record::{FieldValue, Record};
use crate::schema::RecordSchema;

/// Sample user account record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Users {
    pub name: String,
    pub age: i64,
    pub username: String,
    pub password: String,
    pub level: String,
    pub email: String,
}

impl Users {
    /// The record the `demo` command validates
    pub fn sample() -> Self {
        Self {
            name: "Rashford".into(),
            age: 25,
            username: "marcusrashford".into(),
            password: "123456".into(),
            level: "admin".into(),
            email: "rashford@email.com".into(),
        }
    }

    /// Schema for the `Users` record type
    pub fn schema() -> RecordSchema {
        RecordSchema::builder("users")
            .description("User accounts")
            .text("Name", |c| c.required().max_len(10))
            .integer("Age", |c| c.required().min(18).max(60))
            .text("Username", |c| c.required())
            .text("Password", |c| c.required().min_len(6))
            .text("Level", |c| c.required())
            .text("Email", |c| c.required().email())
            .build()
    }
}

impl Record for Users {
    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "Name" => Some(FieldValue::Text(&self.name)),
            "Age" => Some(FieldValue::Integer(self.age)),
            "Username" => Some(FieldValue::Text(&self.username)),
            "Password" => Some(FieldValue::Text(&self.password)),
            "Level" => Some(FieldValue::Text(&self.level)),
            "Email" => Some(FieldValue::Text(&self.email)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_well_formed() {
        assert!(Users::schema().validate_structure().is_ok());
    }

    #[test]
    fn test_every_schema_field_is_readable() {
        let user = Users::sample();
        for field in &Users::schema().fields {
            let value = user.value(&field.name).unwrap();
            assert_eq!(value.kind(), field.kind, "kind of {}", field.name);
        }
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(Users::sample().value("Nickname"), None);
    }
}
