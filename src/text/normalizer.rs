//! Token normalization for preprocessing.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Token normalizer that applies lowercasing, Unicode folding, and
/// length/character filters.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes a single token.
    ///
    /// Returns `None` if the token should be filtered out.
    pub fn normalize_token(&self, token: &str) -> Option<String> {
        let mut result: String = if self.config.unicode_normalize {
            token.nfd().collect()
        } else {
            token.to_string()
        };

        if self.config.lowercase {
            result = result.to_lowercase();
        }

        if self.config.remove_numbers && result.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let char_count = result.chars().count();
        if char_count < self.config.min_token_length
            || char_count > self.config.max_token_length
        {
            return None;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize_token("HELLO"), Some("hello".to_string()));
    }

    #[test]
    fn test_min_length_filter() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize_token("a"), None);
        assert_eq!(normalizer.normalize_token("ab"), Some("ab".to_string()));
    }

    #[test]
    fn test_remove_numbers() {
        let mut config = TextConfig::default();
        config.remove_numbers = true;
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize_token("123"), None);
        assert_eq!(normalizer.normalize_token("abc"), Some("abc".to_string()));
        // Mixed alphanumeric still passes
        assert_eq!(normalizer.normalize_token("abc123"), Some("abc123".to_string()));
    }

    #[test]
    fn test_numbers_kept_by_default() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize_token("2024"), Some("2024".to_string()));
    }

    #[test]
    fn test_unicode_normalization() {
        let normalizer = Normalizer::default_config();
        // café with precomposed accent normalizes to the same token as
        // café with a combining accent
        let a = normalizer.normalize_token("caf\u{e9}");
        let b = normalizer.normalize_token("cafe\u{301}");
        assert!(a.is_some());
        assert_eq!(a, b);
    }
}
