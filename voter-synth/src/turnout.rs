//! Turnout scoring and engagement tiers.
use serde::{Deserialize, Serialize};

use crate::history::{CYCLE_YEARS, ElectionHistory, ElectionKind};
use crate::numbers::percent_of;

const HIGH_TIER_MIN: u32 = 80;
const MEDIUM_TIER_MIN: u32 = 50;

/// Coarse engagement classification derived from turnout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementTier {
    High,
    Medium,
    Low,
}

impl EngagementTier {
    #[must_use]
    pub const fn from_percentage(percentage: u32) -> Self {
        if percentage >= HIGH_TIER_MIN {
            Self::High
        } else if percentage >= MEDIUM_TIER_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Turnout percentage paired with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoutScore {
    pub percentage: u32,
    pub tier: EngagementTier,
}

/// Share of tracked general elections voted in, as a rounded percentage.
#[must_use]
pub fn turnout_percentage(history: &ElectionHistory) -> u32 {
    let voted = history.count_voted(ElectionKind::General);
    percent_of(voted, CYCLE_YEARS.len())
}

#[must_use]
pub fn score(history: &ElectionHistory) -> TurnoutScore {
    let percentage = turnout_percentage(history);
    TurnoutScore {
        percentage,
        tier: EngagementTier::from_percentage(percentage),
    }
}
