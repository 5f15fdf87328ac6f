//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

use crate::core::error::TrackerError;

/// Faint Memory point value
pub type Points = u64;

/// Value of a single counter (cards, epiphanies, removals...)
pub type Count = u32;

/// Lowest selectable save data tier
pub const TIER_MIN: u32 = 1;

/// Highest selectable save data tier
pub const TIER_MAX: u32 = 15;

/// Save data tier, always within `TIER_MIN..=TIER_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Tier(u32);

impl Tier {
    /// Tier a freshly added combatant starts at
    pub const FIRST: Tier = Tier(TIER_MIN);

    pub fn new(value: i64) -> Result<Self, TrackerError> {
        if (TIER_MIN as i64..=TIER_MAX as i64).contains(&value) {
            Ok(Self(value as u32))
        } else {
            Err(TrackerError::InvalidTier(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every selectable tier in ascending order
    pub fn all() -> impl Iterator<Item = Tier> {
        (TIER_MIN..=TIER_MAX).map(Tier)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for Tier {
    type Error = TrackerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Tier::new(value)
    }
}

impl From<Tier> for u32 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bounds() {
        assert!(Tier::new(0).is_err());
        assert!(Tier::new(-3).is_err());
        assert!(Tier::new(16).is_err());
        assert_eq!(Tier::new(1).unwrap().get(), 1);
        assert_eq!(Tier::new(15).unwrap().get(), 15);
    }

    #[test]
    fn test_tier_options_ordered() {
        let tiers: Vec<u32> = Tier::all().map(Tier::get).collect();
        assert_eq!(tiers, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_tier_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Tier>("7").is_ok());
        assert!(serde_json::from_str::<Tier>("0").is_err());
        assert!(serde_json::from_str::<Tier>("99").is_err());
    }

    #[test]
    fn test_default_tier_is_first() {
        assert_eq!(Tier::default(), Tier::FIRST);
        assert_eq!(Tier::FIRST.to_string(), "Tier 1");
    }
}
