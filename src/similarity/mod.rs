//! Similarity measures for comparing term-weight vectors.

mod cosine;

pub use cosine::CosineSimilarity;

/// Trait for similarity measures between dense term-weight vectors.
pub trait SimilarityMeasure {
    /// Computes the similarity between two vectors.
    ///
    /// Returns a value between 0.0 (no shared terms) and 1.0 (identical
    /// direction).
    fn similarity(&self, a: &[f64], b: &[f64]) -> f64;

    /// Computes the distance between two vectors.
    ///
    /// Default implementation: 1.0 - similarity.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        1.0 - self.similarity(a, b)
    }
}
