//! Scoring integration tests
//!
//! Exercises the public scoring API end to end: rule table, counter sets,
//! special action scaling and tier limits.

use faint_memory::scoring::{contribution, scaled_points, tier_limit, Evaluation, LimitStatus};
use faint_memory::{score, CounterField, CounterSet, RuleField, RuleTable, Tier, DEFAULT_RULES};

fn example_combatant() -> CounterSet {
    CounterSet::new("Combatant 1")
        .with(CounterField::NeutralCard, 2)
        .with(CounterField::CardRemoved, 3)
}

/// Scaling table at the default 10 / 20 parameters
#[test]
fn test_special_scaling_defaults() {
    let got: Vec<u64> = (0..=5).map(|c| scaled_points(c, 10, 20)).collect();
    assert_eq!(got, vec![0, 0, 10, 40, 90, 160]);
}

#[test]
fn test_tier_limits() {
    assert_eq!(tier_limit(1), 30);
    assert_eq!(tier_limit(15), 170);
    for tier in 1..=15u32 {
        assert_eq!(tier_limit(tier), 20 + 10 * u64::from(tier));
    }
}

/// Each counter alone contributes exactly its own share
#[test]
fn test_score_decomposes_per_field() {
    let rules = RuleTable::default();
    for field in CounterField::ALL {
        let set = CounterSet::new("solo").with(field, 4);
        let expected = if field.is_scaled() {
            scaled_points(
                4,
                rules.special_action_initial_increment,
                rules.special_action_increment_step,
            )
        } else {
            4 * u64::from(rules.get(match field {
                CounterField::NeutralCard => RuleField::NeutralCard,
                CounterField::MonsterCard => RuleField::MonsterCard,
                CounterField::CardConversion => RuleField::CardConversion,
                CounterField::NormalEpiphany => RuleField::NormalEpiphany,
                CounterField::DivineEpiphany => RuleField::DivineEpiphany,
                CounterField::ForbiddenCard => RuleField::ForbiddenCard,
                CounterField::CharacterCard => RuleField::CharacterCard,
                CounterField::CardRemoved | CounterField::CardDuplication => unreachable!(),
            }))
        };
        assert_eq!(score(&set, &rules), expected, "{field}");
        assert_eq!(contribution(&set, &rules, field), expected);
    }
}

#[test]
fn test_empty_set_scores_zero_under_any_rules() {
    let empty = CounterSet::new("empty");
    let mut rules = RuleTable::default();
    assert_eq!(score(&empty, &rules), 0);

    rules.set(RuleField::MonsterCard, 1_000);
    rules.set(RuleField::SpecialActionInitialIncrement, 77);
    assert_eq!(score(&empty, &rules), 0);
}

#[test]
fn test_total_equal_to_limit_is_within() {
    // Tier 2 limit is 40: two neutral cards at 20 each
    let set = CounterSet::new("edge")
        .with(CounterField::NeutralCard, 2)
        .with_tier(Tier::new(2).unwrap());
    let eval = Evaluation::of(&set, &RuleTable::default());
    assert_eq!(eval.total, eval.limit);
    assert_eq!(eval.status, LimitStatus::WithinLimit);
}

/// Two neutral cards plus three removals at tier 1
#[test]
fn test_end_to_end_exceeded() {
    let rules = RuleTable::default();
    let eval = Evaluation::of(&example_combatant(), &rules);

    assert_eq!(eval.breakdown.linear(), 40);
    assert_eq!(eval.breakdown.get(CounterField::CardRemoved), 40);
    assert_eq!(eval.total, 80);
    assert_eq!(eval.limit, 30);
    assert_eq!(eval.status, LimitStatus::Exceeded { overflow: 50 });
    assert_eq!(eval.progress, 1.0);
}

#[test]
fn test_rule_override_changes_total() {
    let mut rules = RuleTable::default();
    rules.set(RuleField::NeutralCard, 100);
    assert_eq!(score(&example_combatant(), &rules), 240);
}

#[test]
fn test_reset_restores_defaults_after_edits() {
    let mut rules = RuleTable::default();
    rules.set(RuleField::NeutralCard, 100);
    rules.set(RuleField::SpecialActionIncrementStep, 0);
    rules.set(RuleField::CharacterCard, 3);
    rules.reset();

    assert_eq!(rules, DEFAULT_RULES);
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
fn test_scoring_leaves_inputs_untouched() {
    let rules = RuleTable::default();
    let set = example_combatant();
    let (rules_before, set_before) = (rules, set.clone());

    let first = score(&set, &rules);
    let second = score(&set, &rules);

    assert_eq!(first, second);
    assert_eq!(rules, rules_before);
    assert_eq!(set, set_before);
}
