use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use voter_synth::{ParticipantSource, Stance};

#[derive(Debug, Error)]
pub enum ParticipantFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `identity,stance` (got `{content}`)")]
    Malformed { line: usize, content: String },
    #[error("line {line}: unknown stance `{stance}` (use support or oppose)")]
    UnknownStance { line: usize, stance: String },
}

/// Parse `identity,stance` lines, skipping blanks and `#` comments.
pub fn parse_participants(text: &str) -> Result<Vec<(String, Stance)>, ParticipantFileError> {
    let mut participants = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((identity, stance)) = trimmed.split_once(',') else {
            return Err(ParticipantFileError::Malformed {
                line,
                content: trimmed.to_string(),
            });
        };
        let stance_label = stance.trim();
        let stance = Stance::parse(stance_label).ok_or_else(|| ParticipantFileError::UnknownStance {
            line,
            stance: stance_label.to_string(),
        })?;
        participants.push((identity.trim().to_string(), stance));
    }
    Ok(participants)
}

/// Participant source backed by an optional file on disk.
///
/// Without a path the source reports no participants.
#[derive(Debug, Clone, Default)]
pub struct ParticipantFile {
    path: Option<PathBuf>,
}

impl ParticipantFile {
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ParticipantSource for ParticipantFile {
    type Error = ParticipantFileError;

    fn load_participants(&self, campaign_id: &str) -> Result<Vec<(String, Stance)>, Self::Error> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        let text = fs::read_to_string(path).map_err(|source| ParticipantFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let participants = parse_participants(&text)?;
        log::debug!(
            "loaded {} participants for campaign '{campaign_id}' from {}",
            participants.len(),
            path.display()
        );
        Ok(participants)
    }
}
