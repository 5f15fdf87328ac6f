//! Ordered list of combatants
//!
//! Combatants are identified by position only. New ones are appended and
//! only the last one can be removed, so positions never shift.

use crate::combatant::counters::{CounterField, CounterSet};
use crate::core::config::TrackerConfig;
use crate::core::error::{Result, TrackerError};
use crate::core::types::{Count, Tier};
use crate::rules::RuleTable;
use crate::scoring::Evaluation;

/// Result of asking to remove the last combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The combatant was removed
    Removed(CounterSet),
    /// The last combatant holds data; call again with `confirmed = true`
    NeedsConfirmation,
}

#[derive(Debug, Clone)]
pub struct Roster {
    combatants: Vec<CounterSet>,
    config: TrackerConfig,
}

impl Roster {
    /// Roster seeded with a single fresh combatant
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            combatants: vec![CounterSet::new(config.default_name(0))],
            config: config.clone(),
        }
    }

    /// Restore a roster from previously saved combatants
    ///
    /// An empty list is reseeded with one fresh combatant.
    pub fn from_combatants(config: &TrackerConfig, combatants: Vec<CounterSet>) -> Result<Self> {
        if combatants.len() > config.max_combatants {
            return Err(TrackerError::RosterFull {
                max: config.max_combatants,
            });
        }
        if combatants.is_empty() {
            return Ok(Self::new(config));
        }
        Ok(Self {
            combatants,
            config: config.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn combatants(&self) -> &[CounterSet] {
        &self.combatants
    }

    pub fn into_combatants(self) -> Vec<CounterSet> {
        self.combatants
    }

    pub fn get(&self, index: usize) -> Result<&CounterSet> {
        let len = self.combatants.len();
        self.combatants
            .get(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut CounterSet> {
        let len = self.combatants.len();
        self.combatants
            .get_mut(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })
    }

    pub fn can_add(&self) -> bool {
        self.combatants.len() < self.config.max_combatants
    }

    pub fn can_remove(&self) -> bool {
        self.combatants.len() > 1
    }

    /// Append a fresh combatant and return its index
    pub fn add(&mut self) -> Result<usize> {
        if !self.can_add() {
            tracing::warn!(max = self.config.max_combatants, "roster full, not adding combatant");
            return Err(TrackerError::RosterFull {
                max: self.config.max_combatants,
            });
        }
        let index = self.combatants.len();
        let name = self.config.default_name(index);
        tracing::debug!(index, name = %name, "adding combatant");
        self.combatants.push(CounterSet::new(name));
        Ok(index)
    }

    /// Remove the last combatant
    ///
    /// A dirty combatant is only removed when `confirmed` is set.
    pub fn remove_last(&mut self, confirmed: bool) -> Result<RemoveOutcome> {
        if !self.can_remove() {
            tracing::warn!("refusing to remove the only combatant");
            return Err(TrackerError::LastCombatant);
        }

        let needs_confirmation = self
            .combatants
            .last()
            .map(CounterSet::is_dirty)
            .unwrap_or(false);
        if needs_confirmation && !confirmed {
            return Ok(RemoveOutcome::NeedsConfirmation);
        }

        match self.combatants.pop() {
            Some(removed) => {
                tracing::debug!(name = %removed.name, "removed combatant");
                Ok(RemoveOutcome::Removed(removed))
            }
            None => Err(TrackerError::LastCombatant),
        }
    }

    /// Zero the counters of one combatant, keeping its name
    pub fn reset(&mut self, index: usize) -> Result<()> {
        self.get_mut(index)?.reset_counters();
        tracing::debug!(index, "reset combatant counters");
        Ok(())
    }

    pub fn set_counter(&mut self, index: usize, field: CounterField, value: Count) -> Result<()> {
        self.get_mut(index)?.set(field, value);
        Ok(())
    }

    pub fn set_tier(&mut self, index: usize, tier: Tier) -> Result<()> {
        self.get_mut(index)?.tier = tier;
        Ok(())
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.get_mut(index)?.name = name.into();
        Ok(())
    }

    /// Evaluate every combatant against the shared rule table
    pub fn evaluate_all(&self, rules: &RuleTable) -> Vec<Evaluation> {
        self.combatants
            .iter()
            .map(|c| Evaluation::of(c, rules))
            .collect()
    }
}
