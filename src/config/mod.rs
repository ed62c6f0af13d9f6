//! Configuration system for fieldquill.
//!
//! This module provides the configuration structure for fieldquill with sensible defaults
//! and support for serialization/deserialization via serde. Configuration can be loaded
//! from TOML files and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use fieldquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.fields_param_name, "fields");
//! assert!(!config.ignore_case);
//!
//! // Create custom configuration
//! let custom = Config {
//!     ignore_case: true,
//!     always_included: vec!["totalCount".to_string()],
//!     ..Config::default()
//! };
//! assert!(custom.always_included().unwrap().is_some());
//! ```

use crate::fields::{AlwaysIncluded, CaseSensitivity, FieldsError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for partial responses.
///
/// # Fields
///
/// * `fields_param_name` - Query parameter carrying the selector (default: "fields")
/// * `ignore_case` - Match the caller's selector case-insensitively (default: false)
/// * `ignore_parse_errors` - Treat malformed selectors as absent instead of failing (default: false)
/// * `always_included` - Selector expressions retained regardless of the caller's selection (default: none)
/// * `always_included_ignore_case` - Case mode for `always_included`; follows `ignore_case` when unset
/// * `indent_size` - Spaces per indentation level for pretty output (default: 2)
/// * `compact` - Emit compact JSON (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Query parameter carrying the selector
    #[serde(default = "default_fields_param_name")]
    pub fields_param_name: String,

    /// Match the caller's selector case-insensitively
    #[serde(default)]
    pub ignore_case: bool,

    /// Treat malformed selectors as absent instead of failing the request
    #[serde(default)]
    pub ignore_parse_errors: bool,

    /// Selector expressions that are always retained
    #[serde(default)]
    pub always_included: Vec<String>,

    /// Case mode for `always_included`; follows `ignore_case` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_included_ignore_case: Option<bool>,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Emit compact JSON
    #[serde(default)]
    pub compact: bool,
}

/// Returns the default query parameter name.
fn default_fields_param_name() -> String {
    "fields".to_string()
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields_param_name: default_fields_param_name(),
            ignore_case: false,
            ignore_parse_errors: false,
            always_included: Vec::new(),
            always_included_ignore_case: None,
            indent_size: default_indent_size(),
            compact: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/fieldquill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("fieldquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            log::warn!("Ignoring config file {}: {:#}", config_path.display(), err);
            Self::default()
        })
    }

    /// Loads configuration from a specific file, failing if it is unreadable or invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Comparison mode for the caller's selector.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        CaseSensitivity::from_ignore_case(self.ignore_case)
    }

    /// Comparison mode for the always-included selectors.
    pub fn always_included_case_sensitivity(&self) -> CaseSensitivity {
        CaseSensitivity::from_ignore_case(
            self.always_included_ignore_case.unwrap_or(self.ignore_case),
        )
    }

    /// Builds the always-included set, or `None` when none is configured.
    pub fn always_included(&self) -> Result<Option<AlwaysIncluded>, FieldsError> {
        if self.always_included.is_empty() {
            return Ok(None);
        }
        AlwaysIncluded::parse(&self.always_included, self.always_included_case_sensitivity())
            .map(Some)
    }
}
