//! Election-participation history simulation.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of election tracked on a voter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectionKind {
    General,
    Primary,
}

impl ElectionKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Primary => "primary",
        }
    }
}

/// One election cycle: an election kind in a given year.
///
/// Serializes as `<kind>_<year>`, e.g. `general_2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ElectionCycle {
    pub kind: ElectionKind,
    pub year: u16,
}

/// Tracked cycle years, oldest first.
pub const CYCLE_YEARS: [u16; 5] = [2016, 2018, 2020, 2022, 2024];

impl ElectionCycle {
    /// The closed set of cycles every history covers.
    pub const ALL: [Self; 10] = [
        Self::general(2016),
        Self::general(2018),
        Self::general(2020),
        Self::general(2022),
        Self::general(2024),
        Self::primary(2016),
        Self::primary(2018),
        Self::primary(2020),
        Self::primary(2022),
        Self::primary(2024),
    ];

    #[must_use]
    pub const fn general(year: u16) -> Self {
        Self {
            kind: ElectionKind::General,
            year,
        }
    }

    #[must_use]
    pub const fn primary(year: u16) -> Self {
        Self {
            kind: ElectionKind::Primary,
            year,
        }
    }

    #[must_use]
    pub const fn is_presidential(self) -> bool {
        self.year % 4 == 0
    }

    #[must_use]
    pub fn key(self) -> String {
        format!("{}_{}", self.kind.key(), self.year)
    }

    /// All tracked cycles of one kind, oldest first.
    pub fn of_kind(kind: ElectionKind) -> impl DoubleEndedIterator<Item = Self> {
        CYCLE_YEARS.into_iter().map(move |year| Self { kind, year })
    }

    /// The `count` most recent cycles of one kind, newest first.
    #[must_use]
    pub fn most_recent(kind: ElectionKind, count: usize) -> Vec<Self> {
        Self::of_kind(kind).rev().take(count).collect()
    }
}

impl fmt::Display for ElectionCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.key(), self.year)
    }
}

impl From<ElectionCycle> for String {
    fn from(cycle: ElectionCycle) -> Self {
        cycle.key()
    }
}

impl TryFrom<String> for ElectionCycle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (kind, year) = value
            .split_once('_')
            .ok_or_else(|| format!("invalid election cycle key: {value}"))?;
        let kind = match kind {
            "general" => ElectionKind::General,
            "primary" => ElectionKind::Primary,
            other => return Err(format!("unknown election kind: {other}")),
        };
        let year = year
            .parse::<u16>()
            .map_err(|e| format!("invalid election year in {value}: {e}"))?;
        let cycle = Self { kind, year };
        if Self::ALL.contains(&cycle) {
            Ok(cycle)
        } else {
            Err(format!("untracked election cycle: {value}"))
        }
    }
}

/// Base participation probabilities per election kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnoutRates {
    #[serde(default = "TurnoutRates::default_general_base")]
    pub general_base: f64,
    #[serde(default = "TurnoutRates::default_presidential_bonus")]
    pub presidential_bonus: f64,
    #[serde(default = "TurnoutRates::default_primary_base")]
    pub primary_base: f64,
}

impl TurnoutRates {
    const fn default_general_base() -> f64 {
        0.60
    }

    const fn default_presidential_bonus() -> f64 {
        0.15
    }

    const fn default_primary_base() -> f64 {
        0.25
    }

    /// Participation probability for a cycle, clamped to `[0, 1]`.
    #[must_use]
    pub fn rate_for(&self, cycle: ElectionCycle) -> f64 {
        let rate = match cycle.kind {
            ElectionKind::General if cycle.is_presidential() => {
                self.general_base + self.presidential_bonus
            }
            ElectionKind::General => self.general_base,
            ElectionKind::Primary => self.primary_base,
        };
        if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
    }
}

impl Default for TurnoutRates {
    fn default() -> Self {
        Self {
            general_base: Self::default_general_base(),
            presidential_bonus: Self::default_presidential_bonus(),
            primary_base: Self::default_primary_base(),
        }
    }
}

/// Turnout flag per tracked election cycle.
///
/// Always holds exactly the cycles in [`ElectionCycle::ALL`]; deserialization
/// rejects missing or extra keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<ElectionCycle, bool>",
    try_from = "BTreeMap<ElectionCycle, bool>"
)]
pub struct ElectionHistory(BTreeMap<ElectionCycle, bool>);

impl ElectionHistory {
    /// Build a history with the same flag for every tracked cycle.
    #[must_use]
    pub fn uniform(voted: bool) -> Self {
        Self(ElectionCycle::ALL.iter().map(|cycle| (*cycle, voted)).collect())
    }

    #[must_use]
    pub fn voted(&self, cycle: ElectionCycle) -> bool {
        self.0.get(&cycle).copied().unwrap_or(false)
    }

    /// Update the flag for a tracked cycle. Untracked cycles are ignored.
    pub fn set(&mut self, cycle: ElectionCycle, voted: bool) {
        if let Some(flag) = self.0.get_mut(&cycle) {
            *flag = voted;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElectionCycle, bool)> + '_ {
        self.0.iter().map(|(cycle, voted)| (*cycle, *voted))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cycles of `kind` flagged as voted.
    #[must_use]
    pub fn count_voted(&self, kind: ElectionKind) -> usize {
        ElectionCycle::of_kind(kind)
            .filter(|cycle| self.voted(*cycle))
            .count()
    }
}

impl From<ElectionHistory> for BTreeMap<ElectionCycle, bool> {
    fn from(history: ElectionHistory) -> Self {
        history.0
    }
}

impl TryFrom<BTreeMap<ElectionCycle, bool>> for ElectionHistory {
    type Error = String;

    fn try_from(flags: BTreeMap<ElectionCycle, bool>) -> Result<Self, Self::Error> {
        if let Some(missing) = ElectionCycle::ALL.iter().find(|c| !flags.contains_key(c)) {
            return Err(format!("election history is missing {missing}"));
        }
        if let Some(extra) = flags.keys().find(|c| !ElectionCycle::ALL.contains(c)) {
            return Err(format!("election history has untracked cycle {extra}"));
        }
        Ok(Self(flags))
    }
}

/// Simulate one independent turnout flag per tracked cycle.
pub fn simulate_history<R>(rng: &mut R, rates: &TurnoutRates) -> ElectionHistory
where
    R: Rng + ?Sized,
{
    let mut history = ElectionHistory::uniform(false);
    for cycle in ElectionCycle::ALL {
        history.set(cycle, rng.gen_bool(rates.rate_for(cycle)));
    }
    history
}
