//! Core types for rapid_summarizer
//!
//! This module defines the data that flows between pipeline stages:
//! languages, sentences, keywords, the summary result, and configuration.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Language
// ============================================================================

/// A language with registered stop-word and sentence-boundary rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Polish,
    German,
}

impl Language {
    /// All languages with built-in rules
    pub const ALL: [Language; 3] = [Language::English, Language::Polish, Language::German];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Polish => "pl",
            Language::German => "de",
        }
    }
}

impl FromStr for Language {
    type Err = SummarizerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "pl" | "pol" | "polish" | "polski" => Ok(Language::Polish),
            "de" | "deu" | "ger" | "german" | "deutsch" => Ok(Language::German),
            _ => Err(SummarizerError::unsupported_language(value)),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = SummarizerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence segmented from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position in reading order (0-based)
    pub index: usize,
    /// The sentence text, verbatim from the document (surrounding whitespace trimmed)
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Normalized tokens: lowercase, stop words and non-alphabetic tokens removed
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(
        index: usize,
        text: impl Into<String>,
        start: usize,
        end: usize,
        tokens: Vec<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            start,
            end,
            tokens,
        }
    }

    /// Whether the sentence kept any tokens after filtering
    pub fn has_content(&self) -> bool {
        !self.tokens.is_empty()
    }
}

// ============================================================================
// Keyword
// ============================================================================

/// A vocabulary term with its weight normalized to [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

/// How keyword weights are computed before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMethod {
    /// Sum of a term's TF-IDF weight over all sentences
    #[default]
    TfIdf,
    /// Raw occurrence count of the term in the document
    Frequency,
    /// PageRank centrality in a word co-occurrence graph
    TextRank,
}

impl FromStr for KeywordMethod {
    type Err = SummarizerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "tfidf" | "tf_idf" | "tf-idf" => Ok(KeywordMethod::TfIdf),
            "frequency" | "freq" | "count" => Ok(KeywordMethod::Frequency),
            "textrank" | "text_rank" | "graph" => Ok(KeywordMethod::TextRank),
            _ => Err(SummarizerError::invalid_config(format!(
                "unknown keyword method '{value}'"
            ))),
        }
    }
}

// ============================================================================
// Ranking strategy
// ============================================================================

/// Which sentence scoring strategy is allowed to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// TextRank, falling back to frequency scores on degenerate graphs
    #[default]
    Auto,
    /// Always score sentences by their summed TF-IDF weight
    Frequency,
}

/// The strategy that actually produced the sentence scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    TextRank,
    Frequency,
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankStrategy::TextRank => f.write_str("textrank"),
            RankStrategy::Frequency => f.write_str("frequency"),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    pub index: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// Result of a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<SummarySentence>,
    /// Keywords, highest weight first
    pub keywords: Vec<Keyword>,
    /// Number of sentences the document was segmented into
    pub total_sentences: usize,
    /// Strategy that scored the sentences
    pub strategy: RankStrategy,
    /// PageRank iterations performed (0 for the frequency strategy)
    pub iterations: usize,
    /// Whether PageRank met the convergence threshold
    pub converged: bool,
}

impl Summary {
    /// An empty summary for documents without sentences
    pub fn empty() -> Self {
        Self {
            sentences: Vec::new(),
            keywords: Vec::new(),
            total_sentences: 0,
            strategy: RankStrategy::Frequency,
            iterations: 0,
            converged: true,
        }
    }

    /// The selected sentences joined by a single space
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Keywords as `(term, weight)` pairs
    pub fn keyword_tuples(&self) -> Vec<(String, f64)> {
        self.keywords
            .iter()
            .map(|k| (k.term.clone(), k.weight))
            .collect()
    }

    /// Turn an empty summary into [`SummarizerError::EmptyInput`]
    pub fn require_content(self) -> Result<Self> {
        if self.is_empty() {
            return Err(SummarizerError::empty_input(
                "document contains no sentences",
            ));
        }
        Ok(self)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization and keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Document language (stop words and abbreviation rules)
    pub language: Language,
    /// Number of sentences to select (clamped to [1, sentence count])
    pub num_sentences: usize,
    /// Number of keywords to return (clamped to [0, vocabulary size])
    pub num_keywords: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub convergence_threshold: f64,
    /// Edges with cosine similarity at or below this value are omitted
    pub similarity_threshold: f64,
    /// Sentence scoring strategy
    pub strategy: Strategy,
    /// Keyword weighting method
    pub keyword_method: KeywordMethod,
    /// Co-occurrence window for [`KeywordMethod::TextRank`]
    pub keyword_window: usize,
    /// Drop segments whose trimmed text is shorter than this many characters
    pub min_sentence_chars: usize,
    /// Additional stop words (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Sentence count from which graph building and ranking use the rayon pool
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            num_sentences: 3,
            num_keywords: 10,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            similarity_threshold: 0.0,
            strategy: Strategy::Auto,
            keyword_method: KeywordMethod::TfIdf,
            keyword_window: 2,
            min_sentence_chars: 0,
            stopwords: Vec::new(),
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !(0.0..1.0).contains(&self.similarity_threshold) {
            return Err(SummarizerError::invalid_config(format!(
                "similarity_threshold must be in [0, 1), got {}",
                self.similarity_threshold
            )));
        }

        if self.keyword_window < 2 {
            return Err(SummarizerError::invalid_config(
                "keyword_window must be >= 2",
            ));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Builder method: set number of summary sentences
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Builder method: set number of keywords
    pub fn with_num_keywords(mut self, k: usize) -> Self {
        self.num_keywords = k;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set edge similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Builder method: set sentence scoring strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: set keyword method
    pub fn with_keyword_method(mut self, method: KeywordMethod) -> Self {
        self.keyword_method = method;
        self
    }

    /// Builder method: set keyword co-occurrence window
    pub fn with_keyword_window(mut self, window: usize) -> Self {
        self.keyword_window = window;
        self
    }

    /// Builder method: set minimum sentence length in characters
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    /// Builder method: add stop words on top of the built-in list
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the parallelism threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
