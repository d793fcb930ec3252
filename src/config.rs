//! Dialect configuration.
//!
//! A [`DialectConfig`] decides how literals are spelled when rendering. It can
//! be built in code or loaded from JSON:
//!
//! ```json
//! { "kind": "sqlite", "boolean_literals": "keyword" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading a dialect configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Invalid dialect config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// SQL dialects with known literal conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    Postgres,
    Sqlite,
    Mysql,
}

impl DialectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectKind::Postgres => "postgres",
            DialectKind::Sqlite => "sqlite",
            DialectKind::Mysql => "mysql",
        }
    }

    /// Boolean spelling used when the config does not override it
    pub fn default_boolean_style(&self) -> BooleanStyle {
        match self {
            DialectKind::Postgres => BooleanStyle::Keyword,
            DialectKind::Sqlite | DialectKind::Mysql => BooleanStyle::Numeric,
        }
    }
}

impl FromStr for DialectKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            "sqlite" => Ok(DialectKind::Sqlite),
            "mysql" => Ok(DialectKind::Mysql),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}

/// How boolean literals are written.
///
/// Keywords are lowercase so that rendered text decodes back to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanStyle {
    /// `1` / `0`
    Numeric,
    /// `true` / `false`
    Keyword,
}

/// Literal conventions of the target dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    pub kind: DialectKind,
    /// Overrides the dialect's default boolean spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_literals: Option<BooleanStyle>,
}

impl DialectConfig {
    pub fn new(kind: DialectKind) -> Self {
        Self {
            kind,
            boolean_literals: None,
        }
    }

    pub fn with_boolean_style(mut self, style: BooleanStyle) -> Self {
        self.boolean_literals = Some(style);
        self
    }

    pub fn boolean_style(&self) -> BooleanStyle {
        self.boolean_literals
            .unwrap_or_else(|| self.kind.default_boolean_style())
    }

    pub fn boolean_literal(&self, value: bool) -> &'static str {
        match (self.boolean_style(), value) {
            (BooleanStyle::Numeric, true) => "1",
            (BooleanStyle::Numeric, false) => "0",
            (BooleanStyle::Keyword, true) => "true",
            (BooleanStyle::Keyword, false) => "false",
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded dialect config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::new(DialectKind::Postgres)
    }
}
