//! Compare a combatant's total against its tier capacity

use serde::Serialize;

use crate::combatant::CounterSet;
use crate::core::types::{Points, Tier};
use crate::rules::RuleTable;
use crate::scoring::score::ScoreBreakdown;

/// Whether a total fits its tier capacity
///
/// Exceeding is a valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LimitStatus {
    WithinLimit,
    Exceeded { overflow: Points },
}

impl LimitStatus {
    /// `total <= limit` is within limit; equality passes
    pub fn classify(total: Points, limit: Points) -> Self {
        if total <= limit {
            LimitStatus::WithinLimit
        } else {
            LimitStatus::Exceeded {
                overflow: total - limit,
            }
        }
    }

    pub fn is_within(self) -> bool {
        matches!(self, LimitStatus::WithinLimit)
    }

    pub fn overflow(self) -> Option<Points> {
        match self {
            LimitStatus::WithinLimit => None,
            LimitStatus::Exceeded { overflow } => Some(overflow),
        }
    }
}

/// Fill fraction for a progress bar, capped at 1.0
pub fn progress(total: Points, limit: Points) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (total as f64 / limit as f64).min(1.0)
}

/// One combatant's evaluation snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub name: String,
    pub tier: Tier,
    pub total: Points,
    pub limit: Points,
    #[serde(flatten)]
    pub status: LimitStatus,
    pub progress: f64,
    pub breakdown: ScoreBreakdown,
}

impl Evaluation {
    pub fn of(counters: &CounterSet, rules: &RuleTable) -> Self {
        let breakdown = ScoreBreakdown::of(counters, rules);
        let total = breakdown.total();
        let limit = counters.tier.limit();
        let status = LimitStatus::classify(total, limit);

        tracing::debug!(
            name = %counters.name,
            total,
            limit,
            within = status.is_within(),
            "evaluated combatant"
        );

        Self {
            name: counters.name.clone(),
            tier: counters.tier,
            total,
            limit,
            status,
            progress: progress(total, limit),
            breakdown,
        }
    }

    pub fn is_within_limit(&self) -> bool {
        self.status.is_within()
    }

    pub fn overflow(&self) -> Option<Points> {
        self.status.overflow()
    }
}
