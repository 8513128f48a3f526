//! Word tokenization for TF-IDF vectorization.

use crate::config::TextConfig;
use crate::text::Normalizer;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer that splits text into normalized word tokens.
///
/// Word boundaries follow Unicode segmentation rules, so punctuation and
/// whitespace delimit tokens without further configuration. Tokens are then
/// normalized and filtered by the [`Normalizer`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Tokenizes text into a sequence of normalized token strings.
    ///
    /// Tokens that the normalizer filters out (too short, too long, numeric
    /// when configured) do not appear in the output.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter_map(|word| self.normalizer.normalize_token(word))
            .collect()
    }
}
