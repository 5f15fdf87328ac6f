//! Combatants and their counters

pub mod counters;
pub mod roster;

pub use counters::{CounterField, CounterSet};
pub use roster::{RemoveOutcome, Roster};
