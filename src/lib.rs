//! fieldcheck - schema-driven record field validation
//!
//! A record is checked against a schema of named, typed fields, each with an
//! optional constraint set (required, length bounds, value bounds, email).
//! Validation walks fields in declaration order and stops at the first
//! violation.
//!
//! ```
//! use fieldcheck::demo::Users;
//! use fieldcheck::schema::FieldValidator;
//!
//! let validator = FieldValidator::new(&Users::schema());
//! assert!(validator.validate(&Users::sample()).is_ok());
//!
//! let young = Users { age: 10, ..Users::sample() };
//! let err = validator.validate(&young).unwrap_err();
//! assert_eq!(err.to_string(), "Age is less than minimum value of 18");
//! ```

pub mod cli;
pub mod demo;
pub mod observability;
pub mod record;
pub mod schema;
