//! Process-wide attribute distribution tables.
//!
//! Weights are integer approximations of US adult population shares and never
//! change at runtime.
use crate::categories::{
    AgeBracket, Education, Ethnicity, Gender, HomeOwnership, IncomeBand, LocaleType,
    MaritalStatus, Occupation, Party, RegistrationStatus, StateCode,
};
use crate::sampler::DistributionTable;

pub static REGISTRATION: DistributionTable<RegistrationStatus> = DistributionTable::new(
    "registration",
    &[
        (RegistrationStatus::Active, 88),
        (RegistrationStatus::Inactive, 12),
    ],
);

pub static PARTY: DistributionTable<Party> = DistributionTable::new(
    "party",
    &[
        (Party::Democrat, 33),
        (Party::Republican, 30),
        (Party::Independent, 29),
        (Party::Libertarian, 3),
        (Party::Green, 2),
        (Party::Other, 3),
    ],
);

pub static AGE_BRACKET: DistributionTable<AgeBracket> = DistributionTable::new(
    "age_bracket",
    &[
        (AgeBracket::From18To24, 12),
        (AgeBracket::From25To34, 17),
        (AgeBracket::From35To44, 17),
        (AgeBracket::From45To54, 16),
        (AgeBracket::From55To64, 17),
        (AgeBracket::From65, 21),
    ],
);

pub static GENDER: DistributionTable<Gender> = DistributionTable::new(
    "gender",
    &[(Gender::Male, 48), (Gender::Female, 51), (Gender::Unknown, 1)],
);

pub static ETHNICITY: DistributionTable<Ethnicity> = DistributionTable::new(
    "ethnicity",
    &[
        (Ethnicity::White, 60),
        (Ethnicity::Hispanic, 18),
        (Ethnicity::Black, 13),
        (Ethnicity::Asian, 6),
        (Ethnicity::Other, 3),
    ],
);

pub static EDUCATION: DistributionTable<Education> = DistributionTable::new(
    "education",
    &[
        (Education::LessThanHighSchool, 9),
        (Education::HighSchool, 27),
        (Education::SomeCollege, 20),
        (Education::Associate, 10),
        (Education::Bachelors, 21),
        (Education::Graduate, 13),
    ],
);

pub static INCOME: DistributionTable<IncomeBand> = DistributionTable::new(
    "income",
    &[
        (IncomeBand::Under25k, 17),
        (IncomeBand::From25kTo50k, 20),
        (IncomeBand::From50kTo75k, 17),
        (IncomeBand::From75kTo100k, 13),
        (IncomeBand::From100kTo150k, 16),
        (IncomeBand::Over150k, 17),
    ],
);

pub static OCCUPATION: DistributionTable<Occupation> = DistributionTable::new(
    "occupation",
    &[
        (Occupation::Professional, 22),
        (Occupation::Management, 13),
        (Occupation::Service, 15),
        (Occupation::SalesOffice, 17),
        (Occupation::BlueCollar, 15),
        (Occupation::Retired, 12),
        (Occupation::Student, 4),
        (Occupation::Other, 2),
    ],
);

pub static STATE: DistributionTable<StateCode> = DistributionTable::new(
    "state",
    &[
        (StateCode::Ca, 12),
        (StateCode::Tx, 9),
        (StateCode::Fl, 7),
        (StateCode::Ny, 6),
        (StateCode::Pa, 4),
        (StateCode::Il, 4),
        (StateCode::Oh, 4),
        (StateCode::Ga, 3),
        (StateCode::Nc, 3),
        (StateCode::Mi, 3),
        (StateCode::Other, 45),
    ],
);

pub static HOME_OWNERSHIP: DistributionTable<HomeOwnership> = DistributionTable::new(
    "home_ownership",
    &[
        (HomeOwnership::Homeowner, 62),
        (HomeOwnership::Renter, 34),
        (HomeOwnership::Unknown, 4),
    ],
);

pub static CHILDREN_PRESENT: DistributionTable<bool> =
    DistributionTable::new("children_present", &[(true, 38), (false, 62)]);

pub static MARITAL_STATUS: DistributionTable<MaritalStatus> = DistributionTable::new(
    "marital_status",
    &[
        (MaritalStatus::Married, 50),
        (MaritalStatus::Single, 31),
        (MaritalStatus::Divorced, 10),
        (MaritalStatus::Widowed, 6),
        (MaritalStatus::Unknown, 3),
    ],
);

pub static VETERAN_IN_HOUSEHOLD: DistributionTable<bool> =
    DistributionTable::new("veteran_in_household", &[(true, 11), (false, 89)]);

pub static LOCALE: DistributionTable<LocaleType> = DistributionTable::new(
    "locale",
    &[
        (LocaleType::Urban, 31),
        (LocaleType::Suburban, 52),
        (LocaleType::Rural, 17),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;

    fn assert_covers_all<T: Category + std::fmt::Debug>(table: &DistributionTable<T>) {
        assert!(table.total_weight() > 0, "{} has no weight", table.name());
        for value in T::ALL {
            assert!(
                table.entries().iter().any(|(entry, weight)| entry == value && *weight > 0),
                "{} missing {value:?}",
                table.name()
            );
        }
        assert_eq!(table.entries().len(), T::ALL.len(), "{}", table.name());
    }

    #[test]
    fn categorical_tables_cover_their_category_sets() {
        assert_covers_all(&REGISTRATION);
        assert_covers_all(&PARTY);
        assert_covers_all(&AGE_BRACKET);
        assert_covers_all(&GENDER);
        assert_covers_all(&ETHNICITY);
        assert_covers_all(&EDUCATION);
        assert_covers_all(&INCOME);
        assert_covers_all(&OCCUPATION);
        assert_covers_all(&STATE);
        assert_covers_all(&HOME_OWNERSHIP);
        assert_covers_all(&MARITAL_STATUS);
        assert_covers_all(&LOCALE);
    }

    #[test]
    fn flag_tables_have_both_outcomes() {
        for table in [&CHILDREN_PRESENT, &VETERAN_IN_HOUSEHOLD] {
            assert!(table.share(true) > 0.0 && table.share(true) < 0.5);
            assert!((table.share(true) + table.share(false) - 1.0).abs() < 1e-9);
        }
    }
}
