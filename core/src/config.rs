//! Configuration for statement generation.
//!
//! Loaded from a `sleet.toml` (or any TOML file) with a `[sleet]` table:
//!
//! ```toml
//! [sleet]
//! dialect = "postgres"
//! default_schema = "app"
//! alias_columns = true
//! ```

use serde::Deserialize;
use sleet_types::Dialect;
use std::path::Path;

use crate::error::{Result, SleetError};

pub const CONFIG_FILE: &str = "sleet.toml";

/// Settings shared by every builder of a [`Sleet`](crate::Sleet).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SleetConfig {
    #[serde(default)]
    pub dialect: Dialect,
    /// Schema for tables that do not name one.
    #[serde(default)]
    pub default_schema: Option<String>,
    /// Alias renamed columns back to their property name in `SELECT`.
    #[serde(default = "yes")]
    pub alias_columns: bool,
}

fn yes() -> bool {
    true
}

#[derive(Deserialize)]
struct ConfigFile {
    sleet: SleetConfig,
}

impl Default for SleetConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            default_schema: None,
            alias_columns: true,
        }
    }
}

impl SleetConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }

    pub fn with_alias_columns(mut self, alias: bool) -> Self {
        self.alias_columns = alias;
        self
    }

    /// Load from the default config file in the working directory
    pub fn load() -> Result<Self> {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    /// Load from a specific path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML text containing a `[sleet]` table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.sleet.validate()
    }

    fn validate(self) -> Result<Self> {
        if let Some(schema) = &self.default_schema
            && schema.trim().is_empty()
        {
            return Err(SleetError::Config("default_schema must not be empty".into()));
        }
        Ok(self)
    }
}
