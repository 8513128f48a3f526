//! TF-IDF vectorizer over a small, per-call corpus.
//!
//! The vectorizer is fit on exactly the documents being compared in one
//! call and discarded afterwards; vocabulary and document frequencies are
//! never shared or cached across calls. Weights use smoothed inverse
//! document frequency and the resulting vectors are L2-normalized, so the
//! cosine of two vectors is their dot product.

use std::collections::HashMap;

/// TF-IDF vectorizer fit on one comparison's corpus.
///
/// Vocabulary indices are assigned in first-encountered order over the
/// fit documents, so identical inputs always produce identical vectors.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term -> dimension index
    vocabulary: HashMap<String, usize>,
    /// smoothed IDF weight per dimension
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fits vocabulary and IDF weights on a corpus of tokenized documents.
    ///
    /// IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`, where `n` is the
    /// corpus size and `df` the number of documents containing the term.
    /// Every weight is strictly positive, so TF-IDF vectors are
    /// non-negative and cosine similarity never goes below zero.
    pub fn fit(documents: &[&[String]]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in documents {
            let mut seen: Vec<usize> = Vec::new();
            for term in *tokens {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(term.clone()).or_insert(next_index);
                if index == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen.contains(&index) {
                    doc_freq[index] += 1;
                    seen.push(index);
                }
            }
        }

        let n = documents.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Transforms a tokenized document into an L2-normalized TF-IDF vector.
    ///
    /// Terms outside the fit vocabulary contribute nothing. A document with
    /// no in-vocabulary terms yields the zero vector.
    pub fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];
        for term in tokens {
            if let Some(&index) = self.vocabulary.get(term) {
                vector[index] += self.idf[index];
            }
        }

        let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }

        vector
    }

    /// Number of distinct terms seen during fit.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
