//! Schema loader for reading schema files from disk
//!
//! - Schemas stored at `<schema_dir>/<name>.json`; the file stem must equal the name
//! - One file per schema
//! - Every loaded schema passes `validate_structure` before it is registered
//! - Registered schemas are immutable: a name can only be registered once

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{SchemaError, SchemaResult};
use super::types::RecordSchema;
use super::validator::FieldValidator;

/// Schema loader that reads schema files from a directory and keeps an
/// in-memory registry keyed by schema name.
pub struct SchemaLoader {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by name
    schemas: BTreeMap<String, RecordSchema>,
}

impl SchemaLoader {
    /// Creates a new schema loader over the given directory.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            schemas: BTreeMap::new(),
        }
    }

    /// Loads all `*.json` files from the schema directory.
    ///
    /// A missing directory loads nothing. Files are read in name order so
    /// duplicate-name errors are reported deterministically.
    pub fn load_all(&mut self) -> SchemaResult<usize> {
        if !self.schema_dir.exists() {
            return Ok(0);
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed(
                self.schema_dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed(
                    self.schema_dir.display().to_string(),
                    format!("Failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in &paths {
            self.load_schema_file(path)?;
        }

        Ok(paths.len())
    }

    /// Loads a single schema file.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("Failed to read file: {}", e))
        })?;

        let schema: RecordSchema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        schema.validate_structure().map_err(|e| {
            SchemaError::malformed(path.display().to_string(), e.to_string())
        })?;

        let stem = path.file_stem().and_then(|s| s.to_str());
        if stem != Some(schema.name.as_str()) {
            return Err(SchemaError::malformed(
                path.display().to_string(),
                format!("file must be named '{}.json'", schema.name),
            ));
        }

        self.insert(schema)
    }

    /// Registers a schema directly (for programmatic schemas and tests).
    pub fn register(&mut self, schema: RecordSchema) -> SchemaResult<()> {
        schema.validate_structure()?;
        self.insert(schema)
    }

    fn insert(&mut self, schema: RecordSchema) -> SchemaResult<()> {
        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::AlreadyRegistered(schema.name));
        }

        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Gets a schema by name.
    pub fn get(&self, name: &str) -> Option<&RecordSchema> {
        self.schemas.get(name)
    }

    /// Compiles a validator for the named schema.
    pub fn validator(&self, name: &str) -> SchemaResult<FieldValidator> {
        self.get(name)
            .map(FieldValidator::new)
            .ok_or_else(|| SchemaError::UnknownSchema(name.to_string()))
    }

    /// Checks if a schema exists.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns all loaded schemas, ordered by name.
    pub fn all_schemas(&self) -> impl Iterator<Item = &RecordSchema> {
        self.schemas.values()
    }

    /// Returns the number of loaded schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Saves a schema to disk as `<name>.json`.
    ///
    /// Refuses to overwrite an existing file.
    pub fn save_schema(&self, schema: &RecordSchema) -> SchemaResult<PathBuf> {
        schema.validate_structure()?;

        let path = self.schema_dir.join(format!("{}.json", schema.name));

        if path.exists() {
            return Err(SchemaError::AlreadyRegistered(schema.name.clone()));
        }

        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed(
                    self.schema_dir.display().to_string(),
                    format!("Failed to create schema directory: {}", e),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(schema).map_err(|e| {
            SchemaError::malformed(
                path.display().to_string(),
                format!("Failed to serialize schema: {}", e),
            )
        })?;

        fs::write(&path, content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("Failed to write file: {}", e))
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DynamicRecord;
    use tempfile::TempDir;

    fn sample_schema() -> RecordSchema {
        RecordSchema::builder("users")
            .text("Name", |c| c.required().max_len(10))
            .integer("Age", |c| c.required().min(18))
            .build()
    }

    #[test]
    fn test_register_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        loader.register(sample_schema()).unwrap();

        let schema = loader.get("users");
        assert!(schema.is_some());
        assert_eq!(schema.unwrap().fields.len(), 2);
    }

    #[test]
    fn test_schema_immutability() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        loader.register(sample_schema()).unwrap();

        let result = loader.register(sample_schema());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "SCHEMA_ALREADY_REGISTERED");
    }

    #[test]
    fn test_register_rejects_bad_structure() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());

        let result = loader.register(RecordSchema::new("empty", Vec::new()));
        assert_eq!(result.unwrap_err().code(), "SCHEMA_INVALID_STRUCTURE");
        assert_eq!(loader.schema_count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SchemaLoader::new(temp_dir.path().join("schemas"));

        let path = loader.save_schema(&sample_schema()).unwrap();
        assert!(path.ends_with("users.json"));

        let mut loader2 = SchemaLoader::new(temp_dir.path().join("schemas"));
        assert_eq!(loader2.load_all().unwrap(), 1);

        assert!(loader2.exists("users"));
        assert_eq!(loader2.get("users"), Some(&sample_schema()));
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SchemaLoader::new(temp_dir.path());

        loader.save_schema(&sample_schema()).unwrap();
        assert!(loader.save_schema(&sample_schema()).is_err());
    }

    #[test]
    fn test_malformed_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();

        let mut loader = SchemaLoader::new(temp_dir.path());
        let err = loader.load_all().unwrap_err();
        assert_eq!(err.code(), "SCHEMA_MALFORMED");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_file_stem_must_match_schema_name() {
        let temp_dir = TempDir::new().unwrap();
        let content = serde_json::to_string(&sample_schema()).unwrap();
        fs::write(temp_dir.path().join("people.json"), content).unwrap();

        let mut loader = SchemaLoader::new(temp_dir.path());
        let err = loader.load_all().unwrap_err();
        assert_eq!(err.code(), "SCHEMA_MALFORMED");
        assert!(err.to_string().contains("users.json"));
        assert_eq!(loader.schema_count(), 0);
    }

    #[test]
    fn test_save_refuses_name_outside_schema_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SchemaLoader::new(temp_dir.path().join("schemas"));

        let schema = RecordSchema::builder("../escaped")
            .text("Name", |c| c.required())
            .build();
        let err = loader.save_schema(&schema).unwrap_err();
        assert_eq!(err.code(), "SCHEMA_INVALID_STRUCTURE");
        assert!(!temp_dir.path().join("escaped.json").exists());
    }

    #[test]
    fn test_non_json_files_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "# schemas").unwrap();

        let mut loader = SchemaLoader::new(temp_dir.path());
        assert_eq!(loader.load_all().unwrap(), 0);
    }

    #[test]
    fn test_missing_directory_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path().join("nope"));

        assert_eq!(loader.load_all().unwrap(), 0);
        assert_eq!(loader.schema_count(), 0);
    }

    #[test]
    fn test_validator_for_unknown_schema() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SchemaLoader::new(temp_dir.path());

        let err = loader.validator("ghosts").unwrap_err();
        assert_eq!(err.code(), "SCHEMA_UNKNOWN");
    }

    #[test]
    fn test_validator_from_registered_schema() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = SchemaLoader::new(temp_dir.path());
        loader.register(sample_schema()).unwrap();

        let validator = loader.validator("users").unwrap();
        assert_eq!(validator.schema_name(), "users");

        let record = DynamicRecord::new()
            .with_text("Name", "Alice")
            .with_integer("Age", 12);
        let err = validator.validate(&record).unwrap_err();
        assert_eq!(err.to_string(), "Age is less than minimum value of 18");
    }
}
