//! JSON I/O handling for CLI
//!
//! - Input: one JSON value, possibly spanning several lines
//! - Output: single JSON object per line
//! - UTF-8 only

use std::io::{Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::schema::ValidationError;

/// Read one JSON request from the whole of `input`
///
/// Anything other than whitespace after the value is rejected.
pub fn read_request<R: Read>(input: &mut R) -> CliResult<Value> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let value: Value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_line(
        out,
        &json!({
            "status": "ok",
            "data": data
        }),
    )
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_line(
        out,
        &json!({
            "status": "error",
            "code": code,
            "message": message
        }),
    )
}

/// Write a validation failure response
pub fn write_violation<W: Write>(out: &mut W, err: &ValidationError) -> CliResult<()> {
    write_line(
        out,
        &json!({
            "status": "error",
            "code": err.code(),
            "field": err.field(),
            "message": err.to_string()
        }),
    )
}

fn write_line<W: Write>(out: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
