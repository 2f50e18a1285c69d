//! Tournament configuration.

use serde::{Deserialize, Serialize};

use super::errors::{TournamentError, TournamentResult};

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Tournament name
    pub name: String,

    /// Maximum number of rounds (`None`: unbounded)
    pub max_rounds: Option<u32>,

    /// Seed for tie-breaking among equally ranked players (`None`: OS entropy)
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Locals".to_string(),
            max_rounds: None,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Create an unbounded configuration with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Cap the number of rounds
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Make tie-breaks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> TournamentResult<()> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidConfig(
                "Tournament name must not be empty".to_string(),
            ));
        }

        if self.max_rounds == Some(0) {
            return Err(TournamentError::InvalidConfig(
                "Max rounds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether round `round_nr` is beyond the cap
    pub fn exceeds_max_rounds(&self, round_nr: u32) -> bool {
        self.max_rounds.is_some_and(|max| round_nr > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_and_unbounded() {
        let config = TournamentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_rounds, None);
        assert!(!config.exceeds_max_rounds(u32::MAX));
    }

    #[test]
    fn test_builder() {
        let config = TournamentConfig::new("Friday Locals")
            .with_max_rounds(5)
            .with_seed(9);
        assert_eq!(config.name, "Friday Locals");
        assert_eq!(config.max_rounds, Some(5));
        assert_eq!(config.seed, Some(9));
        assert!(!config.exceeds_max_rounds(5));
        assert!(config.exceeds_max_rounds(6));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            TournamentConfig::new("  ").validate(),
            Err(TournamentError::InvalidConfig(_))
        ));
        assert!(matches!(
            TournamentConfig::new("x").with_max_rounds(0).validate(),
            Err(TournamentError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = TournamentConfig::new("Friday Locals")
            .with_max_rounds(4)
            .with_seed(21);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TournamentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed: TournamentConfig = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(parsed.name, "x");
        assert_eq!(parsed.max_rounds, None);
        assert_eq!(parsed.seed, None);

        let empty: TournamentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TournamentConfig::default());
    }
}
