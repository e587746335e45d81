//! Summarization components
//!
//! TF-IDF vectorization, sentence ranking with frequency fallback, and
//! top-N selection in document order.

pub mod ranker;
pub mod selector;
pub mod tfidf;
