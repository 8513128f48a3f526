//! Text processing module for tokenization and normalization.

mod normalizer;
mod tokenizer;

pub use normalizer::Normalizer;
pub use tokenizer::Tokenizer;
