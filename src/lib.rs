//! # rapid_summarizer
//!
//! Extractive summarization and keyword extraction with optional Python bindings.
//!
//! Documents are split into sentences, vectorized with TF-IDF, and connected
//! in a cosine similarity graph. TextRank picks the most central sentences;
//! graphs with nothing to propagate fall back to frequency scores. Keywords
//! are ranked by aggregate TF-IDF weight, raw frequency, or word-graph
//! centrality.
//!
//! ## Features
//!
//! - **Deterministic**: lexicographic vocabulary and index tie-breaking give
//!   bit-identical output across runs and thread counts
//! - **Unicode-aware**: UAX #29 word boundaries, diacritics kept
//! - **Languages**: English, Polish and German stop words and abbreviations
//! - **Python bindings**: behind the `python` feature, via PyO3
//!
//! ```
//! let summary = rapid_summarizer::summarize(
//!     "AI is powerful. Machine learning powers AI. The weather today is sunny.",
//!     "en",
//!     2,
//!     3,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.text(), "AI is powerful. Machine learning powers AI.");
//! ```

pub mod errors;
pub mod graph;
pub mod json;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    Keyword, KeywordMethod, Language, RankStrategy, Sentence, Strategy, Summary,
    SummarizerConfig, SummarySentence,
};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph, similarity::build_similarity_graph};
pub use keywords::{extract_keywords, KeywordExtractor};
pub use nlp::{language::LanguageProfile, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use nlp::tokenizer::{segment, segment_bytes};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use pipeline::runner::{summarize, Summarizer};
pub use summarizer::ranker::{rank_sentences, SentenceRanker};
pub use summarizer::selector::{select_summary, SentenceSelector};
pub use summarizer::tfidf::{vectorize, SentenceVector, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
