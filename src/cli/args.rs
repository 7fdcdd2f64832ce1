//! CLI argument definitions using clap
//!
//! Commands:
//! - fieldcheck demo
//! - fieldcheck validate --config <path> --schema <name>
//! - fieldcheck schemas --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fieldcheck - schema-driven record field validation
#[derive(Parser, Debug)]
#[command(name = "fieldcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the built-in sample user record
    ///
    /// Illustrative only: prints the same JSON response envelope as
    /// `validate` rather than a bare result.
    Demo,

    /// Validate one JSON record read from stdin
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./fieldcheck.json")]
        config: PathBuf,

        /// Name of the schema to validate against
        #[arg(long)]
        schema: String,
    },

    /// List the schemas found in the schema directory
    Schemas {
        /// Path to configuration file
        #[arg(long, default_value = "./fieldcheck.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["fieldcheck", "validate", "--schema", "users"]).unwrap();
        match cli.command {
            Command::Validate { config, schema } => {
                assert_eq!(config, PathBuf::from("./fieldcheck.json"));
                assert_eq!(schema, "users");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_requires_schema() {
        assert!(Cli::try_parse_from(["fieldcheck", "validate"]).is_err());
    }

    #[test]
    fn test_demo_help_marks_output_illustrative() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let demo = cli.find_subcommand("demo").unwrap();
        let help = demo.get_long_about().unwrap().to_string();
        assert!(help.contains("Illustrative"));
    }

    #[test]
    fn test_parse_demo() {
        let cli = Cli::try_parse_from(["fieldcheck", "demo"]).unwrap();
        assert!(matches!(cli.command, Command::Demo));
    }
}
