//! Voter Synth
//!
//! Synthetic voter-profile generation and campaign demographic aggregation.
//! This crate simulates voter-file records for demonstration data and reduces a
//! campaign's participants into a percentage-normalized report, with no I/O or
//! platform dependencies.

pub mod categories;
pub mod classify;
pub mod config;
pub mod history;
pub mod numbers;
pub mod population;
pub mod profile;
pub mod report;
pub mod sampler;
pub mod tables;
pub mod turnout;

// Re-export commonly used types
pub use categories::{
    AgeBracket, Category, Education, Ethnicity, Gender, Generation, HomeOwnership, IncomeBand,
    LocaleType, MaritalStatus, Occupation, Party, RegistrationStatus, Stance, StateCode,
};
pub use classify::{MAX_AGE, MIN_AGE, age_to_bracket, age_to_generation};
pub use config::{ConfigError, GeneratorConfig, MAX_REFERENCE_YEAR};
pub use history::{ElectionCycle, ElectionHistory, ElectionKind, TurnoutRates, simulate_history};
pub use population::{
    MAX_POPULATION, ParticipantRecord, PopulationError, PopulationRequest, generate_batch,
    generate_for_participants,
};
pub use profile::{ConsumerAttributes, ProfileGenerator, VoterProfile};
pub use report::{Breakdown, CampaignDemographicsReport, aggregate};
pub use sampler::DistributionTable;
pub use turnout::{EngagementTier, TurnoutScore, score, turnout_percentage};

use thiserror::Error;

/// Trait for abstracting where campaign participants come from.
/// Platform-specific implementations should provide this
pub trait ParticipantSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every `(identity, stance)` pair recorded for a campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the participants cannot be loaded.
    fn load_participants(&self, campaign_id: &str) -> Result<Vec<(String, Stance)>, Self::Error>;
}

/// Errors surfaced by [`DemographicsEngine`].
#[derive(Debug, Error)]
pub enum EngineError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Population(#[from] PopulationError),
    #[error("participant source failed: {0}")]
    Source(#[source] E),
}

/// Main engine binding a profile generator to a participant source
pub struct DemographicsEngine<S>
where
    S: ParticipantSource,
{
    generator: ProfileGenerator,
    source: S,
}

impl<S> DemographicsEngine<S>
where
    S: ParticipantSource,
{
    /// Create a new engine with the provided configuration and participant source
    pub const fn new(config: GeneratorConfig, source: S) -> Self {
        Self {
            generator: ProfileGenerator::new(config),
            source,
        }
    }

    #[must_use]
    pub const fn generator(&self) -> &ProfileGenerator {
        &self.generator
    }

    /// Generate an anonymous batch of `requested` participants and aggregate it
    ///
    /// # Errors
    ///
    /// Returns an error if the campaign id is blank or the count is out of range.
    pub fn batch_report(
        &self,
        campaign_id: &str,
        requested: i64,
    ) -> Result<CampaignDemographicsReport, EngineError<S::Error>> {
        let request = PopulationRequest::new(campaign_id, requested)?;
        let records = generate_batch(&self.generator, &request);
        Ok(aggregate(request.campaign_id(), &records))
    }

    /// Aggregate the participants the source records for a campaign
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or supplies invalid identities.
    pub fn participant_report(
        &self,
        campaign_id: &str,
    ) -> Result<CampaignDemographicsReport, EngineError<S::Error>> {
        let campaign_id = population::validate_campaign_id(campaign_id)?;
        let participants = self
            .source
            .load_participants(&campaign_id)
            .map_err(EngineError::Source)?;
        self.report_for(&campaign_id, &participants)
    }

    /// Aggregate caller-supplied `(identity, stance)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if the campaign id or any identity is invalid.
    pub fn report_for(
        &self,
        campaign_id: &str,
        participants: &[(String, Stance)],
    ) -> Result<CampaignDemographicsReport, EngineError<S::Error>> {
        let campaign_id = population::validate_campaign_id(campaign_id)?;
        let records = generate_for_participants(&self.generator, participants)?;
        Ok(aggregate(&campaign_id, &records))
    }
}
