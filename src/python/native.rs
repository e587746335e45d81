//! Native Python interface
//!
//! Direct Python classes for documents passed as plain strings.

use crate::errors::SummarizerError;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::runner::Summarizer;
use crate::types::{
    Keyword, KeywordMethod, Language, Strategy, Summary, SummarizerConfig, SummarySentence,
};
use pyo3::prelude::*;

pub(crate) fn to_py_err(err: SummarizerError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// A keyword with its normalized weight
#[pyclass(name = "Keyword")]
#[derive(Clone)]
pub struct PyKeyword {
    #[pyo3(get)]
    pub term: String,
    #[pyo3(get)]
    pub weight: f64,
}

#[pymethods]
impl PyKeyword {
    fn __repr__(&self) -> String {
        format!("Keyword(term='{}', weight={:.4})", self.term, self.weight)
    }

    fn __str__(&self) -> String {
        self.term.clone()
    }
}

impl From<Keyword> for PyKeyword {
    fn from(k: Keyword) -> Self {
        Self {
            term: k.term,
            weight: k.weight,
        }
    }
}

/// A sentence selected for the summary
#[pyclass(name = "Sentence")]
#[derive(Clone)]
pub struct PySentence {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub end: usize,
    #[pyo3(get)]
    pub score: f64,
}

#[pymethods]
impl PySentence {
    fn __repr__(&self) -> String {
        format!(
            "Sentence(index={}, score={:.4}, text='{}')",
            self.index, self.score, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<SummarySentence> for PySentence {
    fn from(s: SummarySentence) -> Self {
        Self {
            index: s.index,
            text: s.text,
            start: s.start,
            end: s.end,
            score: s.score,
        }
    }
}

/// Result of summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    /// Selected sentences joined by a single space
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub sentences: Vec<PySentence>,
    #[pyo3(get)]
    pub keywords: Vec<PyKeyword>,
    #[pyo3(get)]
    pub total_sentences: usize,
    #[pyo3(get)]
    pub strategy: String,
    #[pyo3(get)]
    pub converged: bool,
    #[pyo3(get)]
    pub iterations: usize,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, keywords={}, strategy='{}')",
            self.sentences.len(),
            self.keywords.len(),
            self.strategy
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PySentence> {
        self.sentences
            .get(idx)
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("index out of range"))
    }

    /// Get keywords as a list of (term, weight) tuples
    fn keyword_tuples(&self) -> Vec<(String, f64)> {
        self.keywords
            .iter()
            .map(|k| (k.term.clone(), k.weight))
            .collect()
    }
}

impl From<Summary> for PySummary {
    fn from(summary: Summary) -> Self {
        Self {
            text: summary.text(),
            total_sentences: summary.total_sentences,
            strategy: summary.strategy.to_string(),
            converged: summary.converged,
            iterations: summary.iterations,
            sentences: summary.sentences.into_iter().map(PySentence::from).collect(),
            keywords: summary.keywords.into_iter().map(PyKeyword::from).collect(),
        }
    }
}

/// Get the built-in stopword list for a language.
#[pyfunction]
#[pyo3(signature = (language = "en"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    let language: Language = language.parse().map_err(to_py_err)?;
    Ok(StopwordFilter::built_in_list(language))
}

/// ISO codes of the languages with built-in rules.
#[pyfunction]
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(|language| language.code()).collect()
}

/// Configuration for the summarizer
#[pyclass(name = "SummarizerConfig")]
#[derive(Clone)]
pub struct PySummarizerConfig {
    inner: SummarizerConfig,
}

#[pymethods]
impl PySummarizerConfig {
    #[new]
    #[pyo3(signature = (
        language="en",
        num_sentences=3,
        num_keywords=10,
        damping=0.85,
        max_iterations=100,
        convergence_threshold=1e-6,
        similarity_threshold=0.0,
        strategy="auto",
        keyword_method="tf_idf",
        keyword_window=2,
        min_sentence_chars=0,
        stopwords=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        language: &str,
        num_sentences: usize,
        num_keywords: usize,
        damping: f64,
        max_iterations: usize,
        convergence_threshold: f64,
        similarity_threshold: f64,
        strategy: &str,
        keyword_method: &str,
        keyword_window: usize,
        min_sentence_chars: usize,
        stopwords: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let strategy = match strategy.to_lowercase().as_str() {
            "auto" | "textrank" => Strategy::Auto,
            "frequency" => Strategy::Frequency,
            _ => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "Unknown strategy: {}. Use 'auto' or 'frequency'",
                    strategy
                )))
            }
        };
        let keyword_method: KeywordMethod = keyword_method.parse().map_err(to_py_err)?;

        let config = SummarizerConfig::default()
            .with_language(language.parse().map_err(to_py_err)?)
            .with_num_sentences(num_sentences)
            .with_num_keywords(num_keywords)
            .with_damping(damping)
            .with_max_iterations(max_iterations)
            .with_convergence_threshold(convergence_threshold)
            .with_similarity_threshold(similarity_threshold)
            .with_strategy(strategy)
            .with_keyword_method(keyword_method)
            .with_keyword_window(keyword_window)
            .with_min_sentence_chars(min_sentence_chars)
            .with_stopwords(stopwords.unwrap_or_default());

        config.validate().map_err(to_py_err)?;

        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "SummarizerConfig(language='{}', num_sentences={}, num_keywords={})",
            self.inner.language, self.inner.num_sentences, self.inner.num_keywords
        )
    }
}

/// Extractive summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (config=None, num_sentences=None, num_keywords=None, language=None))]
    fn new(
        config: Option<PySummarizerConfig>,
        num_sentences: Option<usize>,
        num_keywords: Option<usize>,
        language: Option<&str>,
    ) -> PyResult<Self> {
        let mut inner_config = config.map(|c| c.inner).unwrap_or_default();

        if let Some(n) = num_sentences {
            inner_config.num_sentences = n;
        }
        if let Some(k) = num_keywords {
            inner_config.num_keywords = k;
        }
        if let Some(lang) = language {
            inner_config.language = lang.parse().map_err(to_py_err)?;
        }

        let inner = Summarizer::with_config(inner_config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Summarize a document
    #[pyo3(signature = (text))]
    fn summarize(&self, text: &str) -> PySummary {
        self.inner.summarize(text).into()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Summarizer(num_sentences={}, num_keywords={}, language='{}')",
            config.num_sentences, config.num_keywords, config.language
        )
    }
}

/// Summarize a document in one call
#[pyfunction]
#[pyo3(signature = (text, language = "en", num_sentences = 3, num_keywords = 10))]
pub fn summarize(
    text: &str,
    language: &str,
    num_sentences: usize,
    num_keywords: usize,
) -> PyResult<PySummary> {
    crate::pipeline::runner::summarize(text, language, num_sentences, num_keywords)
        .map(PySummary::from)
        .map_err(to_py_err)
}
