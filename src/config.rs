//! Engine configuration.
//!
//! Loaded from TOML so the spacing default, the handling of references that
//! leave the selection and the search budget can change without code changes.
//!
//! ```
//! use examplan::config::{EngineConfig, OutsideReferencePolicy};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     default_setup_hours = 48
//!     outside_references = "reject"
//!     node_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.default_setup_hours, 48);
//! assert_eq!(config.outside_references, OutsideReferencePolicy::Reject);
//! ```

use crate::units::{hours, Hours, DEFAULT_SETUP_HOURS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// What to do with a binary constraint whose target is not part of the solve
/// because indirect loading is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutsideReferencePolicy {
    /// Keep the constraint in the compiled record but do not enforce it; a
    /// warning is logged.
    #[default]
    Ignore,
    /// Fail the run with a reference error.
    Reject,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Setup time, in hours, of records that do not override it.
    pub default_setup_hours: u32,

    pub outside_references: OutsideReferencePolicy,

    /// Maximum number of search nodes before giving up. `None` searches
    /// exhaustively.
    pub node_limit: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_setup_hours: DEFAULT_SETUP_HOURS,
            outside_references: OutsideReferencePolicy::default(),
            node_limit: None,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_default_setup_hours(mut self, hours: u32) -> Self {
        self.default_setup_hours = hours;
        self
    }

    pub fn with_outside_references(mut self, policy: OutsideReferencePolicy) -> Self {
        self.outside_references = policy;
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Default setup as an hours quantity.
    pub fn default_setup(&self) -> Hours {
        hours(self.default_setup_hours)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "node_limit must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
