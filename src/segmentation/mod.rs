//! Sentence segmentation.
//!
//! Splits raw text into an ordered sequence of trimmed, non-empty sentences
//! on standard sentence-final punctuation.

pub mod sentence;

pub use sentence::split_sentences;
