//! Session snapshot: the roster and rule table as one JSON document
//!
//! The tracker itself keeps no state. Callers that want to persist a
//! session (browser storage, a file, ...) hand a `Session` around as
//! plain data.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::combatant::{CounterSet, Roster};
use crate::core::config::TrackerConfig;
use crate::core::error::Result;
use crate::rules::RuleTable;
use crate::scoring::Evaluation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub rules: RuleTable,
    pub combatants: Vec<CounterSet>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}

impl Session {
    /// Default rules and a single fresh combatant
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            rules: RuleTable::default(),
            combatants: Roster::new(config).into_combatants(),
        }
    }

    pub fn from_parts(roster: &Roster, rules: RuleTable) -> Self {
        Self {
            rules,
            combatants: roster.combatants().to_vec(),
        }
    }

    /// Rebuild the roster, enforcing the configured combatant cap
    pub fn roster(&self, config: &TrackerConfig) -> Result<Roster> {
        Roster::from_combatants(config, self.combatants.clone())
    }

    /// Evaluate every combatant against the session's own rules
    pub fn evaluate(&self) -> Vec<Evaluation> {
        self.evaluate_with(&self.rules)
    }

    /// Evaluate every combatant against `rules` instead of the stored table
    pub fn evaluate_with(&self, rules: &RuleTable) -> Vec<Evaluation> {
        self.combatants
            .iter()
            .map(|c| Evaluation::of(c, rules))
            .collect()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let session = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            combatants = session.combatants.len(),
            "loaded session"
        );
        Ok(session)
    }

    /// Write a fresh session to `path`, failing if the file already exists
    pub fn create(path: &Path, config: &TrackerConfig) -> Result<Self> {
        let session = Self::new(config);
        let json = session.to_json()?;
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(json.as_bytes())?;
        tracing::info!(path = %path.display(), "created session");
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "saved session");
        Ok(())
    }
}
