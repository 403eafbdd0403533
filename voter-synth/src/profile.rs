//! Synthetic voter-profile generation.
use chrono::NaiveDate;
use hmac::{Hmac, Mac};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::categories::{
    AgeBracket, Education, Ethnicity, Gender, Generation, HomeOwnership, IncomeBand, LocaleType,
    MaritalStatus, Occupation, Party, RegistrationStatus, Stance, StateCode,
};
use crate::classify::{MIN_AGE, age_to_bracket, age_to_generation};
use crate::config::GeneratorConfig;
use crate::history::{ElectionHistory, simulate_history};
use crate::tables;
use crate::turnout::{EngagementTier, score};

const PROFILE_STREAM: &[u8] = b"profile";
const STANCE_STREAM: &[u8] = b"stance";

/// Consumer-data attributes attached to a voter record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerAttributes {
    pub education: Education,
    pub income: IncomeBand,
    pub occupation: Occupation,
    pub home_ownership: HomeOwnership,
    pub children_present: bool,
    pub marital_status: MaritalStatus,
    pub veteran_in_household: bool,
    pub locale: LocaleType,
}

/// One synthesized civic-profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterProfile {
    pub identity: String,
    pub registration_status: RegistrationStatus,
    pub registration_date: NaiveDate,
    pub party: Party,
    pub age: u8,
    pub age_bracket: AgeBracket,
    pub generation: Generation,
    pub gender: Gender,
    pub ethnicity: Ethnicity,
    pub state: StateCode,
    pub consumer: ConsumerAttributes,
    pub election_history: ElectionHistory,
    pub turnout_percentage: u32,
    pub engagement: EngagementTier,
}

impl VoterProfile {
    /// Replace the election history and refresh the derived turnout fields.
    pub fn set_election_history(&mut self, history: ElectionHistory) {
        let scored = score(&history);
        self.election_history = history;
        self.turnout_percentage = scored.percentage;
        self.engagement = scored.tier;
    }

    #[must_use]
    pub const fn is_verified_voter(&self) -> bool {
        self.registration_status.is_active()
    }
}

/// Builds voter profiles from the static distribution tables.
#[derive(Debug, Clone, Default)]
pub struct ProfileGenerator {
    config: GeneratorConfig,
}

impl ProfileGenerator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the profile bound to `identity`.
    ///
    /// The same identity under the same configured seed always yields the same
    /// profile.
    #[must_use]
    pub fn generate(&self, identity: &str) -> VoterProfile {
        let mut rng = self.identity_rng(identity, PROFILE_STREAM);
        self.generate_with_rng(identity, &mut rng)
    }

    /// Generate a profile from a caller-supplied random stream.
    ///
    /// `identity` is recorded on the profile but does not influence the draws.
    pub fn generate_with_rng<R>(&self, identity: &str, rng: &mut R) -> VoterProfile
    where
        R: Rng + ?Sized,
    {
        let registration_status = tables::REGISTRATION.sample(rng);
        let party = tables::PARTY.sample(rng);
        let (low, high) = tables::AGE_BRACKET.sample(rng).span();
        let age = rng.gen_range(low..=high);
        let gender = tables::GENDER.sample(rng);
        let ethnicity = tables::ETHNICITY.sample(rng);
        let state = tables::STATE.sample(rng);
        let consumer = ConsumerAttributes {
            education: tables::EDUCATION.sample(rng),
            income: tables::INCOME.sample(rng),
            occupation: tables::OCCUPATION.sample(rng),
            home_ownership: tables::HOME_OWNERSHIP.sample(rng),
            children_present: tables::CHILDREN_PRESENT.sample(rng),
            marital_status: tables::MARITAL_STATUS.sample(rng),
            veteran_in_household: tables::VETERAN_IN_HOUSEHOLD.sample(rng),
            locale: tables::LOCALE.sample(rng),
        };
        let registration_date = self.registration_date(age, rng);
        let election_history = simulate_history(rng, &self.config.turnout);
        let scored = score(&election_history);

        VoterProfile {
            identity: identity.to_string(),
            registration_status,
            registration_date,
            party,
            age,
            age_bracket: age_to_bracket(age),
            generation: age_to_generation(age),
            gender,
            ethnicity,
            state,
            consumer,
            election_history,
            turnout_percentage: scored.percentage,
            engagement: scored.tier,
        }
    }

    /// Stance for an anonymous participant, drawn from its own identity stream.
    #[must_use]
    pub fn stance_for(&self, identity: &str) -> Stance {
        let mut rng = self.identity_rng(identity, STANCE_STREAM);
        if rng.gen_bool(self.config.support_share.clamp(0.0, 1.0)) {
            Stance::Support
        } else {
            Stance::Oppose
        }
    }

    /// Registration falls between the voter's 18th birthday year and the reference year.
    fn registration_date<R>(&self, age: u8, rng: &mut R) -> NaiveDate
    where
        R: Rng + ?Sized,
    {
        let reference = self.config.bounded_reference_year();
        let years_eligible = i32::from(age.saturating_sub(MIN_AGE));
        let year = rng.gen_range(reference - years_eligible..=reference);
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=28);
        // Bounded years and days 1..=28 always form a valid date.
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
    }

    fn identity_rng(&self, identity: &str, stream: &[u8]) -> ChaCha20Rng {
        ChaCha20Rng::from_seed(derive_identity_seed(self.config.seed, stream, identity))
    }
}

/// Domain-separated 256-bit seed for one identity's random stream.
#[must_use]
pub fn derive_identity_seed(root_seed: u64, stream: &[u8], identity: &str) -> [u8; 32] {
    let mut mac = Hmac::<Sha256>::new_from_slice(&root_seed.to_le_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(stream);
    mac.update(b":");
    mac.update(identity.as_bytes());
    let digest = mac.finalize().into_bytes();
    let mut seed = [0_u8; 32];
    seed.copy_from_slice(&digest);
    seed
}
