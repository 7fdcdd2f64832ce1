//! Schema subsystem for fieldcheck
//!
//! A schema is declared once per record type, either with
//! [`RecordSchema::builder`] or as a JSON file read by [`SchemaLoader`], and
//! compiled into a [`FieldValidator`].
//!
//! # Design Principles
//!
//! - Fields are checked in declaration order
//! - Checks within a field run in a fixed order
//! - The first violation aborts validation
//! - Validation never mutates the record
//! - Deterministic validation

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidationError, Violation};
pub use loader::SchemaLoader;
pub use types::{Constraints, FieldKind, FieldSpec, RecordSchema, SchemaBuilder};
pub use validator::{is_valid_email, FieldValidator};
