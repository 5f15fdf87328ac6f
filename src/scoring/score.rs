//! Faint Memory point total for one combatant

use serde::Serialize;

use crate::combatant::{CounterField, CounterSet};
use crate::core::types::Points;
use crate::rules::RuleTable;
use crate::scoring::special::scaled_points;

/// Points contributed by a single counter
pub fn contribution(counters: &CounterSet, rules: &RuleTable, field: CounterField) -> Points {
    let count = counters.get(field);
    let weight = match field {
        CounterField::NeutralCard => rules.neutral_card,
        CounterField::MonsterCard => rules.monster_card,
        CounterField::CardConversion => rules.card_conversion,
        CounterField::NormalEpiphany => rules.normal_epiphany,
        CounterField::DivineEpiphany => rules.divine_epiphany,
        CounterField::ForbiddenCard => rules.forbidden_card,
        CounterField::CharacterCard => rules.character_card,
        CounterField::CardRemoved | CounterField::CardDuplication => {
            return scaled_points(
                count,
                rules.special_action_initial_increment,
                rules.special_action_increment_step,
            );
        }
    };
    // u32 * u32 always fits in u64
    Points::from(count) * Points::from(weight)
}

/// Total points: seven linear products plus both scaled counters
///
/// Saturates at `Points::MAX`.
pub fn score(counters: &CounterSet, rules: &RuleTable) -> Points {
    saturating_sum(
        CounterField::ALL
            .iter()
            .map(|&field| contribution(counters, rules, field)),
    )
}

fn saturating_sum(points: impl Iterator<Item = Points>) -> Points {
    points.fold(0, Points::saturating_add)
}

/// Per-counter contributions, in `CounterField::ALL` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub entries: Vec<(CounterField, Points)>,
}

impl ScoreBreakdown {
    pub fn of(counters: &CounterSet, rules: &RuleTable) -> Self {
        let entries = CounterField::ALL
            .iter()
            .map(|&f| (f, contribution(counters, rules, f)))
            .collect();
        Self { entries }
    }

    pub fn total(&self) -> Points {
        saturating_sum(self.entries.iter().map(|(_, p)| *p))
    }

    pub fn linear(&self) -> Points {
        saturating_sum(
            self.entries
                .iter()
                .filter(|(f, _)| !f.is_scaled())
                .map(|(_, p)| *p),
        )
    }

    pub fn scaled(&self) -> Points {
        saturating_sum(
            self.entries
                .iter()
                .filter(|(f, _)| f.is_scaled())
                .map(|(_, p)| *p),
        )
    }

    pub fn get(&self, field: CounterField) -> Points {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, p)| *p)
            .unwrap_or(0)
    }
}
