//! Per-combatant counter set

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::TrackerError;
use crate::core::types::{Count, Tier};

/// Everything tracked for one combatant: a display name, the save data
/// tier, seven linear counters and two scaled (special action) counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterSet {
    pub name: String,
    pub tier: Tier,

    // Linear counters
    pub neutral_card: Count,
    pub monster_card: Count,
    pub card_conversion: Count,
    pub normal_epiphany: Count,
    pub divine_epiphany: Count,
    pub forbidden_card: Count,
    pub character_card: Count,

    // Scaled counters
    pub card_removed: Count,
    pub card_duplication: Count,
}

impl Default for CounterSet {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl CounterSet {
    /// All counters at zero, tier 1
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: Tier::FIRST,
            neutral_card: 0,
            monster_card: 0,
            card_conversion: 0,
            normal_epiphany: 0,
            divine_epiphany: 0,
            forbidden_card: 0,
            character_card: 0,
            card_removed: 0,
            card_duplication: 0,
        }
    }

    pub fn with(mut self, field: CounterField, value: Count) -> Self {
        self.set(field, value);
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn get(&self, field: CounterField) -> Count {
        match field {
            CounterField::NeutralCard => self.neutral_card,
            CounterField::MonsterCard => self.monster_card,
            CounterField::CardConversion => self.card_conversion,
            CounterField::NormalEpiphany => self.normal_epiphany,
            CounterField::DivineEpiphany => self.divine_epiphany,
            CounterField::ForbiddenCard => self.forbidden_card,
            CounterField::CharacterCard => self.character_card,
            CounterField::CardRemoved => self.card_removed,
            CounterField::CardDuplication => self.card_duplication,
        }
    }

    fn slot_mut(&mut self, field: CounterField) -> &mut Count {
        match field {
            CounterField::NeutralCard => &mut self.neutral_card,
            CounterField::MonsterCard => &mut self.monster_card,
            CounterField::CardConversion => &mut self.card_conversion,
            CounterField::NormalEpiphany => &mut self.normal_epiphany,
            CounterField::DivineEpiphany => &mut self.divine_epiphany,
            CounterField::ForbiddenCard => &mut self.forbidden_card,
            CounterField::CharacterCard => &mut self.character_card,
            CounterField::CardRemoved => &mut self.card_removed,
            CounterField::CardDuplication => &mut self.card_duplication,
        }
    }

    pub fn set(&mut self, field: CounterField, value: Count) {
        *self.slot_mut(field) = value;
    }

    /// Step a counter up or down, clamping at zero
    pub fn adjust(&mut self, field: CounterField, delta: i64) -> Count {
        let slot = self.slot_mut(field);
        let next = i64::from(*slot)
            .saturating_add(delta)
            .clamp(0, i64::from(Count::MAX));
        *slot = next as Count;
        *slot
    }

    /// Zero every counter and return to tier 1, keeping the name
    pub fn reset_counters(&mut self) {
        let name = std::mem::take(&mut self.name);
        *self = Self::new(name);
    }

    /// True when the tier or any counter differs from a fresh set.
    /// The name is not considered.
    pub fn is_dirty(&self) -> bool {
        self.tier != Tier::FIRST || CounterField::ALL.iter().any(|&f| self.get(f) != 0)
    }
}

/// Names one of the nine counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    NeutralCard,
    MonsterCard,
    CardConversion,
    NormalEpiphany,
    DivineEpiphany,
    ForbiddenCard,
    CharacterCard,
    CardRemoved,
    CardDuplication,
}

impl CounterField {
    pub const ALL: [CounterField; 9] = [
        CounterField::NeutralCard,
        CounterField::MonsterCard,
        CounterField::CardConversion,
        CounterField::NormalEpiphany,
        CounterField::DivineEpiphany,
        CounterField::ForbiddenCard,
        CounterField::CharacterCard,
        CounterField::CardRemoved,
        CounterField::CardDuplication,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CounterField::NeutralCard => "neutral_card",
            CounterField::MonsterCard => "monster_card",
            CounterField::CardConversion => "card_conversion",
            CounterField::NormalEpiphany => "normal_epiphany",
            CounterField::DivineEpiphany => "divine_epiphany",
            CounterField::ForbiddenCard => "forbidden_card",
            CounterField::CharacterCard => "character_card",
            CounterField::CardRemoved => "card_removed",
            CounterField::CardDuplication => "card_duplication",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CounterField::NeutralCard => "Neutral Card",
            CounterField::MonsterCard => "Monster Card",
            CounterField::CardConversion => "Card Conversion",
            CounterField::NormalEpiphany => "Neutral/Monster Epiphany",
            CounterField::DivineEpiphany => "Divine Epiphany",
            CounterField::ForbiddenCard => "Forbidden Card",
            CounterField::CharacterCard => "Character Card",
            CounterField::CardRemoved => "Card Removed",
            CounterField::CardDuplication => "Card Duplication",
        }
    }

    /// Card removal and duplication follow the special action scaling
    pub fn is_scaled(self) -> bool {
        matches!(self, CounterField::CardRemoved | CounterField::CardDuplication)
    }
}

impl FromStr for CounterField {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        CounterField::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| TrackerError::UnknownCounter(s.to_string()))
    }
}

impl Serialize for CounterField {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl std::fmt::Display for CounterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
