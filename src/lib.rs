//! Faint Memory - save data tracker
//!
//! Scores each combatant's deck edits in Faint Memory points and checks the
//! total against the capacity of its save data tier.

pub mod combatant;
pub mod core;
pub mod rules;
pub mod scoring;
pub mod session;

pub use crate::combatant::{CounterField, CounterSet, RemoveOutcome, Roster};
pub use crate::core::{Points, Tier, TrackerConfig, TrackerError};
pub use crate::rules::{RuleField, RuleTable, DEFAULT_RULES};
pub use crate::scoring::{scaled_points, score, tier_limit, Evaluation, LimitStatus};
pub use crate::session::Session;
