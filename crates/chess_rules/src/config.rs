//! Rules engine settings, loadable from TOML.
//!
//! ```toml
//! default_promotion = "knight"
//! record_history = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::Promotion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Piece a pawn becomes when the caller does not pick one
    pub default_promotion: Promotion,
    /// Append executed moves to the game history
    pub record_history: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_promotion: Promotion::Queen,
            record_history: true,
        }
    }
}

impl RulesConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
