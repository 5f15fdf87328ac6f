//! Save data tier capacity

use crate::core::types::{Points, Tier};

/// Base capacity before the per-tier bonus
pub const BASE_CAPACITY: Points = 20;

/// Capacity gained per tier
pub const CAPACITY_PER_TIER: Points = 10;

/// Capacity limit for a tier: `20 + tier * 10`
///
/// Defined for any value; the tracker only ever passes 1..=15.
pub fn tier_limit(tier: u32) -> Points {
    BASE_CAPACITY + Points::from(tier) * CAPACITY_PER_TIER
}

impl Tier {
    pub fn limit(self) -> Points {
        tier_limit(self.get())
    }
}
