//! Configuration for the textsim similarity engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextSimError};

/// Main configuration for the similarity engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Text processing configuration.
    pub text: TextConfig,

    /// Scoring configuration.
    pub engine: EngineConfig,
}

impl Config {
    /// Validates the whole configuration.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Convert all text to lowercase.
    /// Default: true.
    pub lowercase: bool,

    /// Minimum token length to include.
    /// Default: 2 (single-character tokens carry no signal for TF-IDF).
    pub min_token_length: usize,

    /// Maximum token length to include.
    /// Default: 50.
    pub max_token_length: usize,

    /// Remove numeric tokens.
    /// Default: false.
    pub remove_numbers: bool,

    /// Apply Unicode normalization (NFD).
    /// Default: true.
    pub unicode_normalize: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_length: 2,
            max_token_length: 50,
            remove_numbers: false,
            unicode_normalize: true,
        }
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum percentage for a sentence pair to count as a match.
    /// Default: 70.0.
    pub threshold: f64,

    /// Distribute sentence-pair comparisons across worker threads.
    /// Each pair is scored independently, so this changes throughput only,
    /// never results or their order.
    /// Default: false.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration.
    ///
    /// The threshold is a percentage and must lie in [0, 100].
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(TextSimError::Config(format!(
                "threshold must be a percentage in [0, 100], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
