//! Closed category sets for every profile dimension.
use serde::{Deserialize, Serialize};

/// A closed, ordered set of values that a report can tally by key.
pub trait Category: Copy + Eq + Ord + 'static {
    /// Every variant, in report order.
    const ALL: &'static [Self];

    /// Stable report key for the variant.
    fn key(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Active,
    Inactive,
}

impl RegistrationStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Category for RegistrationStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Democrat,
    Republican,
    Independent,
    Libertarian,
    Green,
    Other,
}

impl Category for Party {
    const ALL: &'static [Self] = &[
        Self::Democrat,
        Self::Republican,
        Self::Independent,
        Self::Libertarian,
        Self::Green,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Democrat => "democrat",
            Self::Republican => "republican",
            Self::Independent => "independent",
            Self::Libertarian => "libertarian",
            Self::Green => "green",
            Self::Other => "other",
        }
    }
}

/// Six fixed, age-ordered bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18_24")]
    From18To24,
    #[serde(rename = "25_34")]
    From25To34,
    #[serde(rename = "35_44")]
    From35To44,
    #[serde(rename = "45_54")]
    From45To54,
    #[serde(rename = "55_64")]
    From55To64,
    #[serde(rename = "65_plus")]
    From65,
}

impl AgeBracket {
    /// Inclusive age span covered by the bracket within the profile age domain.
    #[must_use]
    pub const fn span(self) -> (u8, u8) {
        match self {
            Self::From18To24 => (18, 24),
            Self::From25To34 => (25, 34),
            Self::From35To44 => (35, 44),
            Self::From45To54 => (45, 54),
            Self::From55To64 => (55, 64),
            Self::From65 => (65, crate::classify::MAX_AGE),
        }
    }
}

impl Category for AgeBracket {
    const ALL: &'static [Self] = &[
        Self::From18To24,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::From55To64,
        Self::From65,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::From18To24 => "18_24",
            Self::From25To34 => "25_34",
            Self::From35To44 => "35_44",
            Self::From45To54 => "45_54",
            Self::From55To64 => "55_64",
            Self::From65 => "65_plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    GenZ,
    Millennial,
    GenX,
    BabyBoomer,
    Silent,
}

impl Category for Generation {
    const ALL: &'static [Self] = &[
        Self::GenZ,
        Self::Millennial,
        Self::GenX,
        Self::BabyBoomer,
        Self::Silent,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::GenZ => "gen_z",
            Self::Millennial => "millennial",
            Self::GenX => "gen_x",
            Self::BabyBoomer => "baby_boomer",
            Self::Silent => "silent",
        }
    }
}

/// Gender as carried on voter files: `M`, `F` or `U` (unreported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "U")]
    Unknown,
}

impl Category for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::Unknown];

    fn key(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "U",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ethnicity {
    White,
    Hispanic,
    Black,
    Asian,
    Other,
}

impl Category for Ethnicity {
    const ALL: &'static [Self] = &[
        Self::White,
        Self::Hispanic,
        Self::Black,
        Self::Asian,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Hispanic => "hispanic",
            Self::Black => "black",
            Self::Asian => "asian",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    LessThanHighSchool,
    HighSchool,
    SomeCollege,
    Associate,
    Bachelors,
    Graduate,
}

impl Category for Education {
    const ALL: &'static [Self] = &[
        Self::LessThanHighSchool,
        Self::HighSchool,
        Self::SomeCollege,
        Self::Associate,
        Self::Bachelors,
        Self::Graduate,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::LessThanHighSchool => "less_than_high_school",
            Self::HighSchool => "high_school",
            Self::SomeCollege => "some_college",
            Self::Associate => "associate",
            Self::Bachelors => "bachelors",
            Self::Graduate => "graduate",
        }
    }
}

/// Household income band in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncomeBand {
    #[serde(rename = "under_25k")]
    Under25k,
    #[serde(rename = "25k_50k")]
    From25kTo50k,
    #[serde(rename = "50k_75k")]
    From50kTo75k,
    #[serde(rename = "75k_100k")]
    From75kTo100k,
    #[serde(rename = "100k_150k")]
    From100kTo150k,
    #[serde(rename = "150k_plus")]
    Over150k,
}

impl Category for IncomeBand {
    const ALL: &'static [Self] = &[
        Self::Under25k,
        Self::From25kTo50k,
        Self::From50kTo75k,
        Self::From75kTo100k,
        Self::From100kTo150k,
        Self::Over150k,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Under25k => "under_25k",
            Self::From25kTo50k => "25k_50k",
            Self::From50kTo75k => "50k_75k",
            Self::From75kTo100k => "75k_100k",
            Self::From100kTo150k => "100k_150k",
            Self::Over150k => "150k_plus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Professional,
    Management,
    Service,
    SalesOffice,
    BlueCollar,
    Retired,
    Student,
    Other,
}

impl Category for Occupation {
    const ALL: &'static [Self] = &[
        Self::Professional,
        Self::Management,
        Self::Service,
        Self::SalesOffice,
        Self::BlueCollar,
        Self::Retired,
        Self::Student,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Management => "management",
            Self::Service => "service",
            Self::SalesOffice => "sales_office",
            Self::BlueCollar => "blue_collar",
            Self::Retired => "retired",
            Self::Student => "student",
            Self::Other => "other",
        }
    }
}

/// Home state by postal code; the long tail collapses into `OTHER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    Ca,
    Tx,
    Fl,
    Ny,
    Pa,
    Il,
    Oh,
    Ga,
    Nc,
    Mi,
    Other,
}

impl Category for StateCode {
    const ALL: &'static [Self] = &[
        Self::Ca,
        Self::Tx,
        Self::Fl,
        Self::Ny,
        Self::Pa,
        Self::Il,
        Self::Oh,
        Self::Ga,
        Self::Nc,
        Self::Mi,
        Self::Other,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Ca => "CA",
            Self::Tx => "TX",
            Self::Fl => "FL",
            Self::Ny => "NY",
            Self::Pa => "PA",
            Self::Il => "IL",
            Self::Oh => "OH",
            Self::Ga => "GA",
            Self::Nc => "NC",
            Self::Mi => "MI",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeOwnership {
    Homeowner,
    Renter,
    Unknown,
}

impl Category for HomeOwnership {
    const ALL: &'static [Self] = &[Self::Homeowner, Self::Renter, Self::Unknown];

    fn key(self) -> &'static str {
        match self {
            Self::Homeowner => "homeowner",
            Self::Renter => "renter",
            Self::Unknown => "unknown",
        }
    }
}

/// Marital status; `Unknown` stands in for an absent value on the voter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Married,
    Single,
    Divorced,
    Widowed,
    Unknown,
}

impl Category for MaritalStatus {
    const ALL: &'static [Self] = &[
        Self::Married,
        Self::Single,
        Self::Divorced,
        Self::Widowed,
        Self::Unknown,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Single => "single",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleType {
    Urban,
    Suburban,
    Rural,
}

impl Category for LocaleType {
    const ALL: &'static [Self] = &[Self::Urban, Self::Suburban, Self::Rural];

    fn key(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
        }
    }
}

/// A participant's position on a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Support,
    Oppose,
}

impl Stance {
    /// Parse a case-insensitive stance label.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "support" | "for" => Some(Self::Support),
            "oppose" | "against" => Some(Self::Oppose),
            _ => None,
        }
    }
}

impl Category for Stance {
    const ALL: &'static [Self] = &[Self::Support, Self::Oppose];

    fn key(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Oppose => "oppose",
        }
    }
}
