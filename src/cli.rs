//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RecStore - name/value record store with checked lookups
///
/// Seeds a store with records, looks up each requested name and prints
/// the matching record. Names with no record are reported as errors
/// instead of crashing.
///
/// Examples:
///   recstore
///   recstore item1 item2
///   recstore --config records.toml --format json item1
///   recstore --strict item3
///   recstore --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Record names to report
    ///
    /// If not specified, uses the lookups from the config file.
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .recstore.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "RECSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Exit with code 2 if any name has no record
    #[arg(long)]
    pub strict: bool,

    /// Print every stored record and exit
    #[arg(long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .recstore.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text lines (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.names.iter().any(|n| n.is_empty()) {
            return Err("Record names must not be empty".to_string());
        }

        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
