//! Natural Language Processing components
//!
//! This module provides sentence segmentation, tokenization, stopword
//! filtering and the per-language resources they share.

pub mod language;
pub mod stopwords;
pub mod tokenizer;
