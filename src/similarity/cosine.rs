//! Cosine similarity for dense vectors.

use crate::similarity::SimilarityMeasure;

/// Cosine similarity measure.
///
/// dot(a, b) / (|a| * |b|), with the zero-vector case defined as 0 rather
/// than NaN. For non-negative inputs such as TF-IDF weights the result lies
/// in [0, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl SimilarityMeasure for CosineSimilarity {
    fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;

        for (x, y) in a.iter().zip(b.iter()) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
    }
}
