//! Population requests and parallel profile generation.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::categories::Stance;
use crate::profile::{ProfileGenerator, VoterProfile};

/// Largest anonymous batch a single request may ask for.
pub const MAX_POPULATION: u32 = 100_000;

/// Validation failures for population inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopulationError {
    #[error("requested population {requested} is negative")]
    NegativeCount { requested: i64 },
    #[error("requested population {requested} exceeds the maximum of {max}")]
    TooLarge { requested: i64, max: u32 },
    #[error("campaign id must not be blank")]
    EmptyCampaignId,
    #[error("participant at position {index} has a blank identity")]
    EmptyIdentity { index: usize },
    #[error("participant identity '{identity}' appears more than once")]
    DuplicateIdentity { identity: String },
}

/// One participant with the profile generated for them and their stance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub identity: String,
    pub profile: VoterProfile,
    pub stance: Stance,
}

/// Validated request for an anonymous batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRequest {
    campaign_id: String,
    count: u32,
}

impl PopulationRequest {
    /// Validate a campaign id and requested participant count.
    ///
    /// # Errors
    ///
    /// Returns an error for blank campaign ids, negative counts, or counts
    /// above [`MAX_POPULATION`].
    pub fn new(campaign_id: &str, requested: i64) -> Result<Self, PopulationError> {
        let campaign_id = validate_campaign_id(campaign_id)?;
        if requested < 0 {
            return Err(PopulationError::NegativeCount { requested });
        }
        let count = u32::try_from(requested)
            .ok()
            .filter(|count| *count <= MAX_POPULATION)
            .ok_or(PopulationError::TooLarge {
                requested,
                max: MAX_POPULATION,
            })?;
        Ok(Self { campaign_id, count })
    }

    #[must_use]
    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Anonymous identity for the participant at `index`.
    #[must_use]
    pub fn identity_at(&self, index: u32) -> String {
        format!("{}-participant-{index:05}", self.campaign_id)
    }
}

/// Trim and reject blank campaign ids.
///
/// # Errors
///
/// Returns [`PopulationError::EmptyCampaignId`] when the id is blank.
pub fn validate_campaign_id(campaign_id: &str) -> Result<String, PopulationError> {
    let trimmed = campaign_id.trim();
    if trimmed.is_empty() {
        return Err(PopulationError::EmptyCampaignId);
    }
    Ok(trimmed.to_string())
}

/// Generate an anonymous batch with generator-assigned stances.
#[must_use]
pub fn generate_batch(
    generator: &ProfileGenerator,
    request: &PopulationRequest,
) -> Vec<ParticipantRecord> {
    log::debug!(
        "generating {} profiles for campaign '{}' (seed {:#x})",
        request.count(),
        request.campaign_id(),
        generator.config().seed
    );
    (0..request.count())
        .into_par_iter()
        .map(|index| {
            let identity = request.identity_at(index);
            let stance = generator.stance_for(&identity);
            build_record(generator, identity, stance)
        })
        .collect()
}

/// Generate one profile per caller-supplied `(identity, stance)` pair.
///
/// # Errors
///
/// Returns an error when an identity is blank or repeated.
pub fn generate_for_participants(
    generator: &ProfileGenerator,
    participants: &[(String, Stance)],
) -> Result<Vec<ParticipantRecord>, PopulationError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for (index, (identity, _)) in participants.iter().enumerate() {
        if identity.trim().is_empty() {
            return Err(PopulationError::EmptyIdentity { index });
        }
        if !seen.insert(identity.as_str()) {
            return Err(PopulationError::DuplicateIdentity {
                identity: identity.clone(),
            });
        }
    }

    log::debug!(
        "generating {} profiles for supplied participants",
        participants.len()
    );
    Ok(participants
        .par_iter()
        .map(|(identity, stance)| build_record(generator, identity.clone(), *stance))
        .collect())
}

fn build_record(generator: &ProfileGenerator, identity: String, stance: Stance) -> ParticipantRecord {
    let profile = generator.generate(&identity);
    ParticipantRecord {
        identity,
        profile,
        stance,
    }
}
