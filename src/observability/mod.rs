//! Observability for fieldcheck
//!
//! Structured JSON logging of command-level events. Observability is
//! read-only: it has no effect on validation outcomes.
//!
//! ```ignore
//! use fieldcheck::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ValidationFailed, &[("field", "Age")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
