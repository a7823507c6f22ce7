//! Engine configuration.
//!
//! Selects the elimination variant, the machine's scoring weights, the
//! jitter bound and the RNG seed. Loadable from TOML:
//!
//! ```toml
//! rule = "flood_fill_capture"
//! jitter = 2
//! seed = 7
//!
//! [weights]
//! own_piece = 10
//! opponent_piece = 10
//! mobility = 1
//! opponent_mobility = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::RuleKind;
use crate::search::ScoreWeights;

/// Largest accepted jitter bound.
pub const MAX_JITTER: u32 = 1_000;

/// Largest accepted scoring weight.
pub const MAX_WEIGHT: i64 = 1_000_000;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which pieces are removed after each move.
    pub rule: RuleKind,

    /// Machine evaluation weights.
    pub weights: ScoreWeights,

    /// Bound of the uniform random offset added to each candidate score
    /// (0 = fully deterministic play).
    pub jitter: u32,

    /// Seed for the jitter RNG of newly created games.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule: RuleKind::TrappedPiece,
            weights: ScoreWeights::default(),
            jitter: 0,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a different elimination variant.
    pub fn with_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    /// Create a new config with custom scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Create a new config with a jitter bound.
    pub fn with_jitter(mut self, jitter: u32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jitter > MAX_JITTER {
            return Err(ConfigError::Validation(format!(
                "jitter must be <= {MAX_JITTER}"
            )));
        }
        let w = &self.weights;
        let weights = [
            ("own_piece", w.own_piece),
            ("opponent_piece", w.opponent_piece),
            ("mobility", w.mobility),
            ("opponent_mobility", w.opponent_mobility),
        ];
        for (name, value) in weights {
            if !(0..=MAX_WEIGHT).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "weight {name} must be between 0 and {MAX_WEIGHT}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.rule, RuleKind::TrappedPiece);
        assert_eq!(config.jitter, 0);
        assert_eq!(config.seed, 42);
        assert_eq!(config.weights, ScoreWeights::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_rule(RuleKind::FloodFillCapture)
            .with_jitter(3)
            .with_seed(123);

        assert_eq!(config.rule, RuleKind::FloodFillCapture);
        assert_eq!(config.jitter, 3);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str("rule = \"blocking\"\nseed = 9\n").unwrap();
        assert_eq!(config.rule, RuleKind::Blocking);
        assert_eq!(config.seed, 9);
        assert_eq!(config.jitter, 0);
    }

    #[test]
    fn test_from_toml_weights() {
        let content = r#"
            rule = "flood_fill_capture"
            jitter = 2

            [weights]
            own_piece = 5
            opponent_piece = 7
            mobility = 2
            opponent_mobility = 1
        "#;
        let config = EngineConfig::from_toml_str(content).unwrap();
        assert_eq!(config.rule, RuleKind::FloodFillCapture);
        assert_eq!(config.weights.own_piece, 5);
        assert_eq!(config.weights.opponent_mobility, 1);
    }

    #[test]
    fn test_validation_rejects_large_jitter() {
        let err = EngineConfig::from_toml_str("jitter = 5000").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validation_rejects_negative_weight() {
        let config = EngineConfig::default().with_weights(ScoreWeights {
            mobility: -1,
            ..ScoreWeights::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_weight() {
        let content = "[weights]\nown_piece = 9223372036854775807\n";
        let err = EngineConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let at_limit = EngineConfig::default().with_weights(ScoreWeights {
            opponent_mobility: MAX_WEIGHT,
            ..ScoreWeights::default()
        });
        assert!(at_limit.validate().is_ok());

        let over = EngineConfig::default().with_weights(ScoreWeights {
            own_piece: MAX_WEIGHT + 1,
            ..ScoreWeights::default()
        });
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("rule = \"chess\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_rule(RuleKind::Blocking);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
