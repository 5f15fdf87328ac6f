//! Point rule table: per-card weights and special action scaling

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::TrackerError;
use crate::core::types::Count;

/// Built-in rule values
pub const DEFAULT_RULES: RuleTable = RuleTable {
    neutral_card: 20,
    monster_card: 80,
    card_conversion: 10,
    normal_epiphany: 10,
    divine_epiphany: 20,
    forbidden_card: 20,
    character_card: 20,
    special_action_initial_increment: 10,
    special_action_increment_step: 20,
};

/// Weights for the seven linear counters plus the two parameters of the
/// special action (card removal/duplication) scaling.
///
/// Every field always holds a concrete value. Missing keys in a serialized
/// table fall back to `DEFAULT_RULES`; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleTable {
    pub neutral_card: Count,
    pub monster_card: Count,
    pub card_conversion: Count,
    /// Applies to both neutral and monster card epiphanies
    pub normal_epiphany: Count,
    pub divine_epiphany: Count,
    pub forbidden_card: Count,
    pub character_card: Count,
    /// Points for the second removal/duplication
    pub special_action_initial_increment: Count,
    /// Growth of the per-unit increment after the second
    pub special_action_increment_step: Count,
}

impl Default for RuleTable {
    fn default() -> Self {
        DEFAULT_RULES
    }
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: RuleField) -> Count {
        match field {
            RuleField::NeutralCard => self.neutral_card,
            RuleField::MonsterCard => self.monster_card,
            RuleField::CardConversion => self.card_conversion,
            RuleField::NormalEpiphany => self.normal_epiphany,
            RuleField::DivineEpiphany => self.divine_epiphany,
            RuleField::ForbiddenCard => self.forbidden_card,
            RuleField::CharacterCard => self.character_card,
            RuleField::SpecialActionInitialIncrement => self.special_action_initial_increment,
            RuleField::SpecialActionIncrementStep => self.special_action_increment_step,
        }
    }

    /// Overwrite a single weight or scaling parameter
    pub fn set(&mut self, field: RuleField, value: Count) {
        let slot = match field {
            RuleField::NeutralCard => &mut self.neutral_card,
            RuleField::MonsterCard => &mut self.monster_card,
            RuleField::CardConversion => &mut self.card_conversion,
            RuleField::NormalEpiphany => &mut self.normal_epiphany,
            RuleField::DivineEpiphany => &mut self.divine_epiphany,
            RuleField::ForbiddenCard => &mut self.forbidden_card,
            RuleField::CharacterCard => &mut self.character_card,
            RuleField::SpecialActionInitialIncrement => &mut self.special_action_initial_increment,
            RuleField::SpecialActionIncrementStep => &mut self.special_action_increment_step,
        };
        tracing::debug!(rule = field.key(), old = *slot, new = value, "rule updated");
        *slot = value;
    }

    /// Restore every field to `DEFAULT_RULES`
    pub fn reset(&mut self) {
        *self = DEFAULT_RULES;
        tracing::info!("rule table reset to defaults");
    }

    pub fn is_default(&self) -> bool {
        *self == DEFAULT_RULES
    }

    /// `(field, value)` pairs in display order
    pub fn entries(&self) -> impl Iterator<Item = (RuleField, Count)> + '_ {
        RuleField::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// Names one editable field of a `RuleTable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleField {
    NeutralCard,
    MonsterCard,
    CardConversion,
    NormalEpiphany,
    DivineEpiphany,
    ForbiddenCard,
    CharacterCard,
    SpecialActionInitialIncrement,
    SpecialActionIncrementStep,
}

impl RuleField {
    pub const ALL: [RuleField; 9] = [
        RuleField::NeutralCard,
        RuleField::MonsterCard,
        RuleField::CardConversion,
        RuleField::NormalEpiphany,
        RuleField::DivineEpiphany,
        RuleField::ForbiddenCard,
        RuleField::CharacterCard,
        RuleField::SpecialActionInitialIncrement,
        RuleField::SpecialActionIncrementStep,
    ];

    /// Stable identifier used by settings surfaces
    pub fn key(self) -> &'static str {
        match self {
            RuleField::NeutralCard => "NEUTRAL_CARD",
            RuleField::MonsterCard => "MONSTER_CARD",
            RuleField::CardConversion => "CARD_CONVERSION",
            RuleField::NormalEpiphany => "NORMAL_EPIPHANY",
            RuleField::DivineEpiphany => "DIVINE_EPIPHANY",
            RuleField::ForbiddenCard => "FORBIDDEN_CARD",
            RuleField::CharacterCard => "CHARACTER_CARD",
            RuleField::SpecialActionInitialIncrement => "SPECIAL_ACTION_INITIAL_INCREMENT",
            RuleField::SpecialActionIncrementStep => "SPECIAL_ACTION_INCREMENT_STEP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RuleField::NeutralCard => "Neutral Card",
            RuleField::MonsterCard => "Monster Card",
            RuleField::CardConversion => "Card Conversion",
            RuleField::NormalEpiphany => "Neutral/Monster Epiphany",
            RuleField::DivineEpiphany => "Divine Epiphany",
            RuleField::ForbiddenCard => "Forbidden Card",
            RuleField::CharacterCard => "Character Card",
            RuleField::SpecialActionInitialIncrement => "Initial Increment",
            RuleField::SpecialActionIncrementStep => "Increment Step",
        }
    }

    /// True for the two card removal/duplication scaling parameters
    pub fn is_special(self) -> bool {
        matches!(
            self,
            RuleField::SpecialActionInitialIncrement | RuleField::SpecialActionIncrementStep
        )
    }
}

impl FromStr for RuleField {
    type Err = TrackerError;

    /// Accepts the key (`NEUTRAL_CARD`) or its snake_case form (`neutral_card`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase().replace('-', "_");
        RuleField::ALL
            .iter()
            .copied()
            .find(|f| f.key() == upper)
            .ok_or_else(|| TrackerError::UnknownRule(s.to_string()))
    }
}

impl std::fmt::Display for RuleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let rules = RuleTable::default();
        assert_eq!(rules.neutral_card, 20);
        assert_eq!(rules.monster_card, 80);
        assert_eq!(rules.card_conversion, 10);
        assert_eq!(rules.normal_epiphany, 10);
        assert_eq!(rules.divine_epiphany, 20);
        assert_eq!(rules.forbidden_card, 20);
        assert_eq!(rules.character_card, 20);
        assert_eq!(rules.special_action_initial_increment, 10);
        assert_eq!(rules.special_action_increment_step, 20);
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut rules = RuleTable::default();
        rules.set(RuleField::NeutralCard, 100);

        for (field, value) in rules.entries() {
            if field == RuleField::NeutralCard {
                assert_eq!(value, 100);
            } else {
                assert_eq!(value, DEFAULT_RULES.get(field));
            }
        }
    }

    #[test]
    fn test_reset_after_edits() {
        let mut rules = RuleTable::default();
        for (i, field) in RuleField::ALL.iter().enumerate() {
            rules.set(*field, i as u32 * 7 + 1);
        }
        assert!(!rules.is_default());

        rules.reset();
        assert!(rules.is_default());
        assert_eq!(rules, DEFAULT_RULES);
    }

    #[test]
    fn test_field_key_parsing() {
        assert_eq!("NEUTRAL_CARD".parse::<RuleField>().unwrap(), RuleField::NeutralCard);
        assert_eq!(
            "special_action_increment_step".parse::<RuleField>().unwrap(),
            RuleField::SpecialActionIncrementStep
        );
        assert!(matches!(
            "BOGUS".parse::<RuleField>(),
            Err(TrackerError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_special_split() {
        let special: Vec<_> = RuleField::ALL.iter().filter(|f| f.is_special()).collect();
        assert_eq!(special.len(), 2);
        assert_eq!(RuleField::NormalEpiphany.label(), "Neutral/Monster Epiphany");
    }
}
