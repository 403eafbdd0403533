//! Aggregation of participant profiles into a campaign demographics report.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::categories::{Category, HomeOwnership, Stance};
use crate::history::{ElectionCycle, ElectionKind};
use crate::numbers::{mean_percent, percent_of};
use crate::population::ParticipantRecord;
use crate::turnout::EngagementTier;

/// Number of most recent cycles reported per election kind.
pub const RECENT_CYCLES: usize = 3;

/// Category key to whole-number percentage.
pub type Breakdown = BTreeMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StanceSummary {
    pub support: usize,
    pub oppose: usize,
    pub support_pct: u32,
    pub oppose_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemographicBreakdown {
    pub party: Breakdown,
    pub age_bracket: Breakdown,
    pub generation: Breakdown,
    pub gender: Breakdown,
    pub ethnicity: Breakdown,
    pub state: Breakdown,
    pub education: Breakdown,
    pub income: Breakdown,
    pub occupation: Breakdown,
    pub home_ownership: Breakdown,
    pub marital_status: Breakdown,
    pub locale: Breakdown,
}

impl DemographicBreakdown {
    /// Every dimension paired with its name, in report order.
    #[must_use]
    pub fn dimensions(&self) -> [(&'static str, &Breakdown); 12] {
        [
            ("party", &self.party),
            ("age_bracket", &self.age_bracket),
            ("generation", &self.generation),
            ("gender", &self.gender),
            ("ethnicity", &self.ethnicity),
            ("state", &self.state),
            ("education", &self.education),
            ("income", &self.income),
            ("occupation", &self.occupation),
            ("home_ownership", &self.home_ownership),
            ("marital_status", &self.marital_status),
            ("locale", &self.locale),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HouseholdSummary {
    pub homeowner_pct: u32,
    pub children_present_pct: u32,
    pub veteran_in_household_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnoutSummary {
    /// Turnout per recent general cycle, keyed like `general_2024`.
    pub general: Breakdown,
    /// Turnout per recent primary cycle, keyed like `primary_2024`.
    pub primary: Breakdown,
    /// Mean of the recent general-cycle percentages.
    pub average_general_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngagementSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub high_pct: u32,
    pub medium_pct: u32,
    pub low_pct: u32,
}

/// Percentage-normalized summary of a campaign's participant population.
///
/// Each figure is rounded on its own, so a dimension may total 100 ± 1 per
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignDemographicsReport {
    pub campaign_id: String,
    pub total_participants: usize,
    pub verified_voters: usize,
    pub verified_voter_pct: u32,
    pub stance: StanceSummary,
    pub demographics: DemographicBreakdown,
    pub household: HouseholdSummary,
    pub turnout: TurnoutSummary,
    pub engagement: EngagementSummary,
}

/// Reduce a participant population into a demographics report.
///
/// An empty population produces a report with every key present and every
/// figure zero.
#[must_use]
pub fn aggregate(campaign_id: &str, records: &[ParticipantRecord]) -> CampaignDemographicsReport {
    let total = records.len();
    let verified_voters = count_where(records, |r| r.profile.is_verified_voter());

    CampaignDemographicsReport {
        campaign_id: campaign_id.to_string(),
        total_participants: total,
        verified_voters,
        verified_voter_pct: percent_of(verified_voters, total),
        stance: stance_summary(records),
        demographics: DemographicBreakdown {
            party: breakdown(records, |r| r.profile.party),
            age_bracket: breakdown(records, |r| r.profile.age_bracket),
            generation: breakdown(records, |r| r.profile.generation),
            gender: breakdown(records, |r| r.profile.gender),
            ethnicity: breakdown(records, |r| r.profile.ethnicity),
            state: breakdown(records, |r| r.profile.state),
            education: breakdown(records, |r| r.profile.consumer.education),
            income: breakdown(records, |r| r.profile.consumer.income),
            occupation: breakdown(records, |r| r.profile.consumer.occupation),
            home_ownership: breakdown(records, |r| r.profile.consumer.home_ownership),
            marital_status: breakdown(records, |r| r.profile.consumer.marital_status),
            locale: breakdown(records, |r| r.profile.consumer.locale),
        },
        household: HouseholdSummary {
            homeowner_pct: percent_of(
                count_where(records, |r| {
                    r.profile.consumer.home_ownership == HomeOwnership::Homeowner
                }),
                total,
            ),
            children_present_pct: percent_of(
                count_where(records, |r| r.profile.consumer.children_present),
                total,
            ),
            veteran_in_household_pct: percent_of(
                count_where(records, |r| r.profile.consumer.veteran_in_household),
                total,
            ),
        },
        turnout: turnout_summary(records),
        engagement: engagement_summary(records),
    }
}

fn count_where(records: &[ParticipantRecord], predicate: impl Fn(&ParticipantRecord) -> bool) -> usize {
    records.iter().filter(|record| predicate(record)).count()
}

fn breakdown<T, F>(records: &[ParticipantRecord], extract: F) -> Breakdown
where
    T: Category,
    F: Fn(&ParticipantRecord) -> T,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(extract(record)).or_default() += 1;
    }
    T::ALL
        .iter()
        .map(|category| {
            let count = counts.get(category).copied().unwrap_or(0);
            (category.key().to_string(), percent_of(count, records.len()))
        })
        .collect()
}

fn stance_summary(records: &[ParticipantRecord]) -> StanceSummary {
    let support = count_where(records, |r| r.stance == Stance::Support);
    let oppose = records.len() - support;
    StanceSummary {
        support,
        oppose,
        support_pct: percent_of(support, records.len()),
        oppose_pct: percent_of(oppose, records.len()),
    }
}

fn cycle_turnout(records: &[ParticipantRecord], kind: ElectionKind) -> Breakdown {
    ElectionCycle::most_recent(kind, RECENT_CYCLES)
        .into_iter()
        .map(|cycle| {
            let voted = count_where(records, |r| r.profile.election_history.voted(cycle));
            (cycle.key(), percent_of(voted, records.len()))
        })
        .collect()
}

fn turnout_summary(records: &[ParticipantRecord]) -> TurnoutSummary {
    let general = cycle_turnout(records, ElectionKind::General);
    let primary = cycle_turnout(records, ElectionKind::Primary);
    let general_values: Vec<u32> = general.values().copied().collect();
    TurnoutSummary {
        average_general_pct: mean_percent(&general_values),
        general,
        primary,
    }
}

fn engagement_summary(records: &[ParticipantRecord]) -> EngagementSummary {
    let tier_count = |tier: EngagementTier| {
        count_where(records, |r| {
            EngagementTier::from_percentage(r.profile.turnout_percentage) == tier
        })
    };
    let high = tier_count(EngagementTier::High);
    let medium = tier_count(EngagementTier::Medium);
    let low = tier_count(EngagementTier::Low);
    let total = records.len();
    EngagementSummary {
        high,
        medium,
        low,
        high_pct: percent_of(high, total),
        medium_pct: percent_of(medium, total),
        low_pct: percent_of(low, total),
    }
}
