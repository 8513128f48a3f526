//! # textsim - TF-IDF Similarity Core
//!
//! textsim is the scoring core of a plagiarism-checking tool. Given two
//! free-text documents (a "student" text and a "reference" text) it
//! produces an overall similarity percentage and the sentence pairs that
//! are most alike.
//!
//! ## Overview
//!
//! Both operations are built on the same primitive: a TF-IDF vectorization
//! fit over exactly the two texts being compared, followed by the cosine of
//! the resulting vectors. The whole-document score applies this once; the
//! sentence-level pass splits both texts into sentences and scores every
//! (student, reference) pair, keeping those at or above a configurable
//! threshold.
//!
//! ## Quick Start
//!
//! ```rust
//! use textsim::SimilarityEngine;
//!
//! let engine = SimilarityEngine::default();
//!
//! let score = engine.overall_similarity(
//!     "The sky is blue. Dogs are loyal animals.",
//!     "Dogs are loyal animals. The sky is blue.",
//! );
//! assert!(score > 90.0);
//!
//! let matches = engine.sentence_matches(
//!     "The sky is blue. Dogs are loyal animals.",
//!     "Dogs are loyal animals. The sky is blue.",
//! );
//! assert_eq!(matches.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Tokenization and normalization
//! - [`segmentation`] - Sentence splitting
//! - [`vectorize`] - Per-call TF-IDF vectorization
//! - [`similarity`] - Similarity measures
//! - [`engine`] - The two public scoring operations
//!
//! Everything is stateless: no vocabulary, score, or other state survives a
//! call, and identical inputs always produce identical outputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod segmentation;
pub mod similarity;
pub mod text;
pub mod vectorize;

// Re-export commonly used types
pub use config::{Config, EngineConfig, TextConfig};
pub use engine::{overall_similarity, sentence_matches, Match, SimilarityEngine};
pub use error::{Result, TextSimError};
pub use segmentation::split_sentences;
pub use similarity::{CosineSimilarity, SimilarityMeasure};
pub use text::{Normalizer, Tokenizer};
pub use vectorize::TfIdfVectorizer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default match threshold as a percentage.
pub const DEFAULT_THRESHOLD: f64 = 70.0;
