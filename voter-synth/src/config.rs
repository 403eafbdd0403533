//! Generator configuration loaded from JSON with defaulted fields.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{CYCLE_YEARS, TurnoutRates};

/// Last year a registration date can be anchored to.
pub const MAX_REFERENCE_YEAR: i32 = 9999;

/// Errors raised when generator configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be between 0.00 and 1.00 (got {value:.2})")]
    Probability { field: &'static str, value: f64 },
    #[error("presidential general turnout {rate:.2} exceeds 1.00")]
    PresidentialRate { rate: f64 },
    #[error("reference year {year} must be between {min} and {max}")]
    ReferenceYear { year: i32, min: i32, max: i32 },
}

/// Tunables for profile generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Root seed mixed into every identity-bound stream.
    #[serde(default = "GeneratorConfig::default_seed")]
    pub seed: u64,
    /// Year registration dates and ages are anchored to.
    #[serde(default = "GeneratorConfig::default_reference_year")]
    pub reference_year: i32,
    /// Probability that an anonymous batch participant supports the campaign.
    #[serde(default = "GeneratorConfig::default_support_share")]
    pub support_share: f64,
    #[serde(default)]
    pub turnout: TurnoutRates,
}

impl GeneratorConfig {
    const fn default_seed() -> u64 {
        0x00C1_71C5
    }

    const fn default_reference_year() -> i32 {
        2024
    }

    const fn default_support_share() -> f64 {
        0.65
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self {
            seed: Self::default_seed(),
            reference_year: Self::default_reference_year(),
            support_share: Self::default_support_share(),
            turnout: TurnoutRates::default(),
        }
    }

    /// Load configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate probability ranges and the reference year.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("support_share", self.support_share)?;
        check_probability("turnout.general_base", self.turnout.general_base)?;
        check_probability("turnout.presidential_bonus", self.turnout.presidential_bonus)?;
        check_probability("turnout.primary_base", self.turnout.primary_base)?;

        let presidential = self.turnout.general_base + self.turnout.presidential_bonus;
        if presidential > 1.0 {
            return Err(ConfigError::PresidentialRate { rate: presidential });
        }

        if !(min_reference_year()..=MAX_REFERENCE_YEAR).contains(&self.reference_year) {
            return Err(ConfigError::ReferenceYear {
                year: self.reference_year,
                min: min_reference_year(),
                max: MAX_REFERENCE_YEAR,
            });
        }
        Ok(())
    }

    /// Reference year clamped to the supported range.
    #[must_use]
    pub fn bounded_reference_year(&self) -> i32 {
        self.reference_year.clamp(min_reference_year(), MAX_REFERENCE_YEAR)
    }
}

/// The reference year may not precede the latest tracked cycle.
fn min_reference_year() -> i32 {
    i32::from(CYCLE_YEARS[CYCLE_YEARS.len() - 1])
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default_config());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_turnout_keeps_other_defaults() {
        let config =
            GeneratorConfig::from_json(r#"{"seed": 7, "turnout": {"primary_base": 0.4}}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert!((config.turnout.primary_base - 0.4).abs() < f64::EPSILON);
        assert!((config.turnout.general_base - 0.60).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = GeneratorConfig::from_json(r#"{"support_share": 1.5}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Probability {
                field: "support_share",
                ..
            }
        ));

        let err = GeneratorConfig::from_json(
            r#"{"turnout": {"general_base": 0.9, "presidential_bonus": 0.2}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::PresidentialRate { .. }));

        let err = GeneratorConfig::from_json(r#"{"reference_year": 2020}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "reference year 2020 must be between 2024 and 9999"
        );
    }

    #[test]
    fn reference_year_has_an_upper_bound() {
        let err = GeneratorConfig::from_json(r#"{"reference_year": 300000}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ReferenceYear {
                year: 300_000,
                max: MAX_REFERENCE_YEAR,
                ..
            }
        ));
        let config = GeneratorConfig::from_json(r#"{"reference_year": 9999}"#).unwrap();
        assert_eq!(config.reference_year, MAX_REFERENCE_YEAR);
    }

    #[test]
    fn bounded_reference_year_clamps_unvalidated_values() {
        let mut config = GeneratorConfig::default_config();
        config.reference_year = 300_000;
        assert_eq!(config.bounded_reference_year(), MAX_REFERENCE_YEAR);
        config.reference_year = 1900;
        assert_eq!(config.bounded_reference_year(), 2024);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GeneratorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn with_seed_overrides_only_seed() {
        let config = GeneratorConfig::default_config().with_seed(99);
        assert_eq!(config.seed, 99);
        assert_eq!(config.reference_year, 2024);
    }
}
