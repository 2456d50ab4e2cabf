//! Configuration file support for attest-scan.
//!
//! Provides YAML-based configuration through `attest-scan.config.yml`
//! files, plus the merged `Settings` the run actually executes with.
//! Precedence is CLI argument, then config file, then built-in default.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::cli::{Args, Strategy};
use crate::shared::{Result, ScanError};

const CONFIG_FILENAME: &str = "attest-scan.config.yml";

pub const DEFAULT_LIMIT: usize = 500;
pub const DEFAULT_REGISTRY: &str = "npmjs.org";
pub const DEFAULT_RANKINGS_URL: &str = "https://packages.ecosyste.ms/api/v1";
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub limit: Option<usize>,
    pub strategy: Option<String>,
    pub output: Option<String>,
    pub registry: Option<String>,
    pub rankings_url: Option<String>,
    pub registry_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(limit) = config.limit {
        if limit == 0 {
            bail!(
                "Invalid config: limit must be at least 1.\n\n\
                 💡 Hint: Set 'limit' to the number of top packages to scan (e.g., 500)."
            );
        }
    }
    if let Some(ref strategy) = config.strategy {
        if Strategy::from_str(strategy).is_err() {
            bail!(
                "Invalid config: unknown strategy '{}'.\n\n\
                 💡 Hint: Use 'version-scoped' or 'full-document'.",
                strategy
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// The fully resolved settings a run executes with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub limit: usize,
    pub strategy: Strategy,
    pub output: Option<String>,
    pub registry: String,
    pub rankings_url: String,
    pub registry_url: String,
}

impl Settings {
    /// Merges CLI arguments over the config file over the defaults.
    ///
    /// The config strategy string was already validated by
    /// `validate_config`, so a parse failure here is a bug; it falls
    /// back to the default rather than panicking.
    pub fn resolve(args: &Args, config: &ConfigFile) -> Self {
        let config_strategy = config
            .strategy
            .as_deref()
            .and_then(|s| Strategy::from_str(s).ok());

        Self {
            limit: args.limit.or(config.limit).unwrap_or(DEFAULT_LIMIT),
            strategy: args
                .strategy
                .or(config_strategy)
                .unwrap_or(Strategy::VersionScoped),
            output: args.output.clone().or_else(|| config.output.clone()),
            registry: args
                .registry
                .clone()
                .or_else(|| config.registry.clone())
                .unwrap_or_else(|| DEFAULT_REGISTRY.to_string()),
            rankings_url: args
                .rankings_url
                .clone()
                .or_else(|| config.rankings_url.clone())
                .unwrap_or_else(|| DEFAULT_RANKINGS_URL.to_string()),
            registry_url: args
                .registry_url
                .clone()
                .or_else(|| config.registry_url.clone())
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
        }
    }

    /// Validates the merged settings.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(ScanError::InvalidConfig {
                message: "limit must be at least 1.\n\n\
                          💡 Hint: Pass --limit with the number of top packages to scan (e.g., 500)."
                    .to_string(),
            }
            .into());
        }
        Ok(())
    }
}
