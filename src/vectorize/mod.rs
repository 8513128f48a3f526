//! TF-IDF vectorization.

mod tfidf;

pub use tfidf::TfIdfVectorizer;
