//! Pure classifiers deriving age bands from a numeric age.
use crate::categories::{AgeBracket, Generation};

/// Youngest age a generated profile can carry.
pub const MIN_AGE: u8 = 18;
/// Oldest age a generated profile can carry.
pub const MAX_AGE: u8 = 85;

/// Map an age to its bracket. Ages under 18 fold into the youngest band.
#[must_use]
pub const fn age_to_bracket(age: u8) -> AgeBracket {
    match age {
        0..=24 => AgeBracket::From18To24,
        25..=34 => AgeBracket::From25To34,
        35..=44 => AgeBracket::From35To44,
        45..=54 => AgeBracket::From45To54,
        55..=64 => AgeBracket::From55To64,
        _ => AgeBracket::From65,
    }
}

/// Map an age to its generational cohort using fixed cutoffs.
#[must_use]
pub const fn age_to_generation(age: u8) -> Generation {
    match age {
        0..=27 => Generation::GenZ,
        28..=43 => Generation::Millennial,
        44..=59 => Generation::GenX,
        60..=78 => Generation::BabyBoomer,
        _ => Generation::Silent,
    }
}
