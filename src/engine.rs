//! The similarity engine: whole-document scores and sentence-level matches.
//!
//! Both operations are stateless and pure: every call fits its own TF-IDF
//! vocabulary over exactly the two texts (or the two sentences) being
//! compared and leaves no residual state. Because each sentence pair is fit
//! on its own tiny vocabulary, scores from different pairs are not on a
//! shared scale; a global-corpus fit would change every output value.

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::segmentation::split_sentences;
use crate::similarity::{CosineSimilarity, SimilarityMeasure};
use crate::text::Tokenizer;
use crate::vectorize::TfIdfVectorizer;

/// A sentence pair whose similarity met the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// Sentence from the student text.
    pub student: String,
    /// Sentence from the reference text.
    pub reference: String,
    /// Similarity as a percentage in [0, 100].
    pub percent: f64,
}

/// Similarity engine comparing a student text against a reference text.
///
/// # Example
/// ```
/// use textsim::SimilarityEngine;
///
/// let engine = SimilarityEngine::default();
/// let score = engine.overall_similarity(
///     "The cat sat on the mat.",
///     "The cat sat on the mat.",
/// );
/// assert!((score - 100.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    config: Config,
    tokenizer: Tokenizer,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        let config = Config::default();
        let tokenizer = Tokenizer::new(config.text.clone());
        Self { config, tokenizer }
    }
}

impl SimilarityEngine {
    /// Creates an engine with the given configuration.
    ///
    /// Fails if the configuration is invalid, e.g. a threshold outside
    /// [0, 100].
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(config.text.clone());
        Ok(Self { config, tokenizer })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes the whole-document similarity as a percentage in [0, 100].
    ///
    /// Fits a TF-IDF vocabulary over the two texts, then takes the cosine
    /// of the resulting vectors. Symmetric in its arguments. Empty or
    /// whitespace-only input yields 0, never an error.
    pub fn overall_similarity(&self, text1: &str, text2: &str) -> f64 {
        let tokens1 = self.tokenizer.tokenize(text1);
        let tokens2 = self.tokenizer.tokenize(text2);
        self.pair_score(&tokens1, &tokens2)
    }

    /// Finds sentence pairs scoring at or above the configured threshold.
    ///
    /// Equivalent to [`sentence_matches_with_threshold`] with
    /// `self.config().engine.threshold`.
    ///
    /// [`sentence_matches_with_threshold`]: Self::sentence_matches_with_threshold
    pub fn sentence_matches(&self, text1: &str, text2: &str) -> Vec<Match> {
        self.sentence_matches_with_threshold(text1, text2, self.config.engine.threshold)
    }

    /// Finds sentence pairs scoring at or above an explicit threshold.
    ///
    /// Splits both texts into sentences and scores every (student,
    /// reference) pair of the Cartesian product, each pair on its own
    /// two-sentence TF-IDF fit. Matches are returned in evaluation order:
    /// student sentences outer, reference sentences inner, never re-sorted
    /// by score. Degenerate pairs score 0 and fall under any positive
    /// threshold.
    pub fn sentence_matches_with_threshold(
        &self,
        text1: &str,
        text2: &str,
        threshold: f64,
    ) -> Vec<Match> {
        let student = split_sentences(text1);
        let reference = split_sentences(text2);

        debug!(
            "scoring {} student x {} reference sentence pairs (threshold {}%)",
            student.len(),
            reference.len(),
            threshold
        );

        // Tokenizing is pure per sentence, so it can be hoisted out of the
        // pair loop; the TF-IDF fit itself stays per-pair.
        let student_tokens: Vec<Vec<String>> =
            student.iter().map(|s| self.tokenizer.tokenize(s)).collect();
        let reference_tokens: Vec<Vec<String>> =
            reference.iter().map(|r| self.tokenizer.tokenize(r)).collect();

        let pairs: Vec<(usize, usize)> = (0..student.len())
            .flat_map(|i| (0..reference.len()).map(move |j| (i, j)))
            .collect();

        let scores: Vec<f64> = if self.config.engine.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| self.pair_score(&student_tokens[i], &reference_tokens[j]))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.pair_score(&student_tokens[i], &reference_tokens[j]))
                .collect()
        };

        pairs
            .into_iter()
            .zip(scores)
            .filter(|&(_, percent)| percent >= threshold)
            .map(|((i, j), percent)| Match {
                student: student[i].clone(),
                reference: reference[j].clone(),
                percent,
            })
            .collect()
    }

    /// Scores one tokenized pair on its own two-document TF-IDF fit.
    fn pair_score(&self, tokens1: &[String], tokens2: &[String]) -> f64 {
        if tokens1.is_empty() && tokens2.is_empty() {
            return 0.0;
        }

        let vectorizer = TfIdfVectorizer::fit(&[tokens1, tokens2]);
        let v1 = vectorizer.transform(tokens1);
        let v2 = vectorizer.transform(tokens2);

        (CosineSimilarity.similarity(&v1, &v2) * 100.0).clamp(0.0, 100.0)
    }
}

/// Computes whole-document similarity with the default configuration.
///
/// See [`SimilarityEngine::overall_similarity`].
pub fn overall_similarity(text1: &str, text2: &str) -> f64 {
    SimilarityEngine::default().overall_similarity(text1, text2)
}

/// Finds sentence matches with the default configuration and threshold.
///
/// See [`SimilarityEngine::sentence_matches`].
pub fn sentence_matches(text1: &str, text2: &str) -> Vec<Match> {
    SimilarityEngine::default().sentence_matches(text1, text2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_identical_texts_score_100() {
        let engine = SimilarityEngine::default();
        let score = engine.overall_similarity(
            "The cat sat on the mat.",
            "The cat sat on the mat.",
        );
        assert!((score - 100.0).abs() < 0.01, "got {score}");
    }

    #[test]
    fn test_disjoint_texts_score_0() {
        let engine = SimilarityEngine::default();
        let score = engine.overall_similarity(
            "Quantum computing uses qubits.",
            "Bananas are a good source of potassium.",
        );
        assert!(score.abs() < 0.01, "got {score}");
    }

    #[test]
    fn test_symmetry() {
        let engine = SimilarityEngine::default();
        let a = "The sky is blue and the grass is green.";
        let b = "The grass is green where the sky stays blue.";
        let ab = engine.overall_similarity(a, b);
        let ba = engine.overall_similarity(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_range() {
        let engine = SimilarityEngine::default();
        let cases = [
            ("", ""),
            ("", "non-empty"),
            ("one two three", "two three four"),
            ("same text", "same text"),
        ];
        for (a, b) in cases {
            let score = engine.overall_similarity(a, b);
            assert!((0.0..=100.0).contains(&score), "{a:?} vs {b:?} -> {score}");
        }
    }

    #[test]
    fn test_empty_input_scores_0() {
        let engine = SimilarityEngine::default();
        assert_eq!(engine.overall_similarity("", ""), 0.0);
        assert_eq!(engine.overall_similarity("", "non-empty"), 0.0);
        assert_eq!(engine.overall_similarity("   \n", "words here"), 0.0);
    }

    #[test]
    fn test_partial_overlap_between_extremes() {
        let engine = SimilarityEngine::default();
        let score = engine.overall_similarity(
            "The cat sat on the mat.",
            "The dog sat on the rug.",
        );
        assert!(score > 0.0 && score < 100.0, "got {score}");
    }

    #[test]
    fn test_sentence_matches_identical() {
        let engine = SimilarityEngine::default();
        let matches = engine.sentence_matches(
            "The cat sat on the mat.",
            "The cat sat on the mat.",
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].student, "The cat sat on the mat.");
        assert_eq!(matches[0].reference, "The cat sat on the mat.");
        assert!((matches[0].percent - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_sentence_matches_disjoint() {
        let engine = SimilarityEngine::default();
        let matches = engine.sentence_matches(
            "Quantum computing uses qubits.",
            "Bananas are a good source of potassium.",
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn test_match_ordering_is_student_major() {
        let engine = SimilarityEngine::default();
        let matches = engine.sentence_matches(
            "The sky is blue. Dogs are loyal animals.",
            "Dogs are loyal animals. The sky is blue.",
        );

        assert_eq!(matches.len(), 2);
        // Student sentence 1 pairs with reference sentence 2, and must come
        // before student sentence 2 pairing with reference sentence 1
        assert_eq!(matches[0].student, "The sky is blue.");
        assert_eq!(matches[0].reference, "The sky is blue.");
        assert_eq!(matches[1].student, "Dogs are loyal animals.");
        assert_eq!(matches[1].reference, "Dogs are loyal animals.");
        assert!(matches.iter().all(|m| (m.percent - 100.0).abs() < 0.01));
    }

    #[test]
    fn test_threshold_monotonicity() {
        let engine = SimilarityEngine::default();
        let student = "The cat sat on the mat. The dog ran in the park. Birds sing at dawn.";
        let reference = "The cat sat on a mat. A dog ran through the park. Fish swim in the sea.";

        let mut previous = usize::MAX;
        for threshold in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let count = engine
                .sentence_matches_with_threshold(student, reference, threshold)
                .len();
            assert!(count <= previous, "threshold {threshold} grew the match count");
            previous = count;
        }
    }

    #[test]
    fn test_degenerate_sentences_do_not_match() {
        let engine = SimilarityEngine::default();
        // Delimiter-only and empty texts produce no sentences, hence no pairs
        assert!(engine.sentence_matches("...", "Hello there.").is_empty());
        assert!(engine.sentence_matches("", "").is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = Config {
            engine: EngineConfig {
                parallel: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let parallel = SimilarityEngine::new(config).unwrap();
        let sequential = SimilarityEngine::default();

        let student = "The sky is blue. Dogs are loyal animals. Rust programs are fast.";
        let reference = "Dogs are loyal animals. The sky is blue.";

        assert_eq!(
            parallel.sentence_matches(student, reference),
            sequential.sentence_matches(student, reference)
        );
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let config = Config {
            engine: EngineConfig {
                threshold: 140.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(SimilarityEngine::new(config).is_err());
    }

    #[test]
    fn test_free_functions() {
        let score = overall_similarity("Same words here.", "Same words here.");
        assert!((score - 100.0).abs() < 0.01);

        let matches = sentence_matches("Same words here.", "Same words here.");
        assert_eq!(matches.len(), 1);
    }
}
