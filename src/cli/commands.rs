//! CLI command implementations
//!
//! Every command writes exactly one JSON response line to stdout. Log lines
//! go to stderr. Commands are written against generic readers and writers so
//! they can be driven in-process.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::demo::Users;
use crate::observability::{log_event_with_fields, Event};
use crate::record::DynamicRecord;
use crate::schema::{FieldValidator, SchemaError, SchemaLoader, ValidationError};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response, write_violation};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `*.json` schema files (required)
    pub schema_dir: String,

    /// Whether command events are logged to stderr (optional, default true)
    #[serde(default = "default_log_events")]
    pub log_events: bool,
}

fn default_log_events() -> bool {
    true
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.schema_dir.trim().is_empty() {
            return Err(CliError::config_error("schema_dir must not be empty"));
        }

        Ok(())
    }

    /// Get schema directory as Path
    pub fn schema_path(&self) -> &Path {
        Path::new(&self.schema_dir)
    }

    fn emit(&self, event: Event, fields: &[(&str, &str)]) {
        if self.log_events {
            log_event_with_fields(event, fields);
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let mut stdout = io::stdout();
    match cmd {
        Command::Demo => demo(&mut stdout),
        Command::Validate { config, schema } => {
            let stdin = io::stdin();
            validate(&config, &schema, &mut stdin.lock(), &mut stdout)
        }
        Command::Schemas { config } => schemas(&config, &mut stdout),
    }
}

/// Validate the built-in sample `Users` record
pub fn demo<W: Write>(out: &mut W) -> CliResult<()> {
    let schema = Users::schema();
    let validator = FieldValidator::new(&schema);
    let result = validator.validate(&Users::sample());

    report(out, validator.schema_name(), result, log_event_with_fields)
}

/// Validate one JSON record from `input` against the named schema
pub fn validate<R: Read, W: Write>(
    config_path: &Path,
    schema_name: &str,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    config.emit(Event::ConfigLoaded, &[("schema_dir", config.schema_dir.as_str())]);

    let loader = load_schemas(&config)?;
    let schema = loader
        .get(schema_name)
        .ok_or_else(|| SchemaError::UnknownSchema(schema_name.to_string()))?;

    let value = read_request(input)?;
    let record = match DynamicRecord::from_json(schema, &value) {
        Ok(record) => record,
        Err(e) => {
            let message = e.to_string();
            config.emit(
                Event::RecordRejected,
                &[("schema", schema_name), ("reason", message.as_str())],
            );
            return write_error(out, e.code(), &message);
        }
    };

    let result = FieldValidator::new(schema).validate(&record);
    report(out, schema_name, result, |event, fields| config.emit(event, fields))
}

/// List loaded schemas with their field counts
pub fn schemas<W: Write>(config_path: &Path, out: &mut W) -> CliResult<()> {
    let config = Config::load(config_path)?;
    config.emit(Event::ConfigLoaded, &[("schema_dir", config.schema_dir.as_str())]);

    let loader = load_schemas(&config)?;
    let listed: Vec<_> = loader
        .all_schemas()
        .map(|schema| {
            json!({
                "name": schema.name,
                "description": schema.description,
                "fields": schema.fields.len(),
            })
        })
        .collect();

    write_response(out, json!({ "schemas": listed }))
}

fn load_schemas(config: &Config) -> CliResult<SchemaLoader> {
    let mut loader = SchemaLoader::new(config.schema_path());
    match loader.load_all() {
        Ok(count) => {
            let count = count.to_string();
            config.emit(Event::SchemasLoaded, &[("count", count.as_str())]);
            Ok(loader)
        }
        Err(e) => {
            let reason = e.to_string();
            config.emit(Event::SchemaRejected, &[("reason", reason.as_str())]);
            Err(e.into())
        }
    }
}

fn report<W: Write>(
    out: &mut W,
    schema_name: &str,
    result: Result<(), ValidationError>,
    emit: impl Fn(Event, &[(&str, &str)]),
) -> CliResult<()> {
    match result {
        Ok(()) => {
            emit(Event::ValidationPassed, &[("schema", schema_name)]);
            write_response(out, json!({ "schema": schema_name }))
        }
        Err(e) => {
            emit(
                Event::ValidationFailed,
                &[("schema", schema_name), ("field", e.field()), ("code", e.code())],
            );
            write_violation(out, &e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::Value;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_config(temp_dir: &TempDir) -> PathBuf {
        let config_path = temp_dir.path().join("fieldcheck.json");
        let schema_dir = temp_dir.path().join("schemas");

        SchemaLoader::new(&schema_dir)
            .save_schema(&Users::schema())
            .unwrap();

        let config = json!({
            "schema_dir": schema_dir.to_string_lossy(),
            "log_events": false
        });

        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    fn run_validate(config_path: &Path, schema: &str, input: &str) -> CliResult<Value> {
        let mut out = Vec::new();
        validate(config_path, schema, &mut Cursor::new(input), &mut out)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_demo_passes() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();

        let response: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(response["status"], "ok");
        assert_eq!(response["data"]["schema"], "users");
    }

    #[test]
    fn test_validate_valid_record() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let input = r#"{"Name":"Rashford","Age":25,"Username":"marcusrashford","Password":"123456","Level":"admin","Email":"rashford@email.com"}"#;
        let response = run_validate(&config_path, "users", input).unwrap();
        assert_eq!(response["status"], "ok");
    }

    #[test]
    fn test_validate_record_spanning_lines() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let input = "{\n  \"Name\": \"Rashford\",\n  \"Age\": 25\n}\n";
        let response = run_validate(&config_path, "users", input).unwrap();
        assert_eq!(response["status"], "error");
        assert_eq!(response["field"], "Username");
        assert_eq!(response["code"], "FIELD_REQUIRED");
    }

    #[test]
    fn test_validate_reports_violation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let input = r#"{"Name":"Rashford","Age":10,"Username":"u","Password":"123456","Level":"admin","Email":"a@b.co"}"#;
        let response = run_validate(&config_path, "users", input).unwrap();
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "FIELD_BELOW_MINIMUM");
        assert_eq!(response["field"], "Age");
        assert_eq!(response["message"], "Age is less than minimum value of 18");
    }

    #[test]
    fn test_validate_reports_record_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let response = run_validate(&config_path, "users", r#"{"Age":"old"}"#).unwrap();
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "RECORD_KIND_MISMATCH");
    }

    #[test]
    fn test_validate_unknown_schema() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let err = run_validate(&config_path, "orders", "{}").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SchemaError);
    }

    #[test]
    fn test_validate_malformed_input() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let err = run_validate(&config_path, "users", "{ nope").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }

    #[test]
    fn test_schemas_lists_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let mut out = Vec::new();
        schemas(&config_path, &mut out).unwrap();

        let response: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(response["data"]["schemas"][0]["name"], "users");
        assert_eq!(response["data"]["schemas"][0]["fields"], 6);
    }

    #[test]
    fn test_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(&temp_dir.path().join("missing.json"));
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_rejects_empty_schema_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("fieldcheck.json");
        fs::write(&config_path, json!({ "schema_dir": "" }).to_string()).unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("fieldcheck.json");
        fs::write(&config_path, json!({ "schema_dir": "schemas" }).to_string()).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert!(config.log_events);
        assert_eq!(config.schema_path(), Path::new("schemas"));
    }
}
