//! Tracker configuration with documented constants
//!
//! Values here shape the roster around the scoring core. They never change
//! how points are computed; that is the rule table's job.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, TrackerError};

/// Configuration for the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of combatants tracked side by side
    ///
    /// A party in the game has at most six characters, so six cards
    /// cover every save slot.
    pub max_combatants: usize,

    /// Prefix for generated combatant names
    ///
    /// The n-th combatant added is named "{prefix} {n}".
    pub name_prefix: String,

    /// Rule table TOML to load instead of the built-in defaults
    pub rules_path: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_combatants: 6,
            name_prefix: "Combatant".to_string(),
            rules_path: None,
        }
    }
}

impl TrackerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TrackerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded tracker config");
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_combatants == 0 {
            return Err(TrackerError::InvalidConfig(
                "max_combatants must be at least 1".into(),
            ));
        }

        if self.name_prefix.trim().is_empty() {
            return Err(TrackerError::InvalidConfig(
                "name_prefix must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Name for the combatant at 0-based `index`
    pub fn default_name(&self, index: usize) -> String {
        format!("{} {}", self.name_prefix, index + 1)
    }
}
