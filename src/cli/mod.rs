//! CLI module for fieldcheck
//!
//! Provides command-line interface for:
//! - demo: Validate the built-in sample record
//! - validate: Validate a JSON record from stdin against a named schema
//! - schemas: List the schemas in the configured schema directory

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{demo, run, run_command, schemas, validate, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response, write_violation};
