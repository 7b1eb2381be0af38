//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.recstore.toml` files.

use crate::cli::{Args, OutputFormat};
use crate::models::Record;
use crate::store::Store;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".recstore.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store seed settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Records inserted into the store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Seed records, inserted in order.
    #[serde(default = "default_records")]
    pub records: Vec<Record>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
        }
    }
}

fn default_records() -> Vec<Record> {
    vec![Record::new("item1", 10), Record::new("item2", 20)]
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Names to report when none are given on the command line.
    #[serde(default = "default_lookups")]
    pub lookups: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Treat missing records as a failure (exit code 2).
    #[serde(default)]
    pub strict: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            lookups: default_lookups(),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}

fn default_lookups() -> Vec<String> {
    vec!["item1".to_string(), "item3".to_string()]
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load `.recstore.toml` from a directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &Args) {
        if !args.names.is_empty() {
            self.report.lookups = args.names.clone();
        }

        if let Some(format) = args.format {
            self.report.format = format;
        }

        if args.strict {
            self.report.strict = true;
        }
    }

    /// Validate the merged configuration.
    ///
    /// Applies the same name rules as the command line to names that came
    /// from the config file.
    pub fn validate(&self) -> Result<()> {
        if self.report.lookups.iter().any(|n| n.is_empty()) {
            bail!("Record names must not be empty (report.lookups)");
        }

        if self.store.records.iter().any(|r| r.name().is_empty()) {
            bail!("Record names must not be empty (store.records)");
        }

        Ok(())
    }

    /// Build a store holding the configured seed records.
    pub fn build_store(&self) -> Store {
        self.store.records.iter().cloned().collect()
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.records.len(), 2);
        assert_eq!(config.report.lookups, vec!["item1", "item3"]);
        assert_eq!(config.report.format, OutputFormat::Text);
        assert!(!config.report.strict);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[store]
records = [{ name = "alpha", value = 1 }, { name = "beta", value = -2 }]

[report]
lookups = ["beta"]
format = "json"
strict = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(
            config.store.records,
            vec![Record::new("alpha", 1), Record::new("beta", -2)]
        );
        assert_eq!(config.report.lookups, vec!["beta"]);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.strict);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[report]\nstrict = true\n").unwrap();
        assert_eq!(config.store.records.len(), 2);
        assert_eq!(config.report.lookups, vec!["item1", "item3"]);
        assert!(config.report.strict);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("item1"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.store.records, default_records());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nlookups = [\"item2\"]\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.report.lookups, vec!["item2"]);
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[store\nrecords = 3").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let args = Args::parse_from(["recstore", "--format", "json", "--strict", "item2"]);
        let mut config = Config::default();
        config.merge_with_args(&args);
        assert_eq!(config.report.lookups, vec!["item2"]);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert!(config.report.strict);
    }

    #[test]
    fn test_merge_keeps_file_lookups_without_names() {
        let args = Args::parse_from(["recstore"]);
        let mut config = Config::default();
        config.merge_with_args(&args);
        assert_eq!(config.report.lookups, vec!["item1", "item3"]);
    }

    #[test]
    fn test_validate_rejects_empty_lookup() {
        let mut config: Config =
            toml::from_str("[report]\nlookups = [\"item1\", \"\"]\n").unwrap();
        assert!(config.validate().is_err());

        config.report.lookups = vec!["item1".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_record_name() {
        let config: Config =
            toml::from_str("[store]\nrecords = [{ name = \"\", value = 1 }]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_names_replace_invalid_file_lookups() {
        let mut config: Config = toml::from_str("[report]\nlookups = [\"\"]\n").unwrap();
        config.merge_with_args(&Args::parse_from(["recstore", "item2"]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_store() {
        let store = Config::default().build_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("item2").map(|r| r.value()), Some(20));
    }
}
