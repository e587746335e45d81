//! Keyword extraction
//!
//! Every vocabulary term gets a raw weight from the configured
//! [`KeywordMethod`]. Weights are then divided by the maximum, zero-weight
//! terms are dropped, and the top `k` are returned (ties in lexicographic
//! order, which is also vocabulary index order).

use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::summarizer::tfidf::{SentenceVector, Vocabulary};
use crate::types::{Keyword, KeywordMethod, Sentence, SummarizerConfig};

/// Keyword extractor for one configuration
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    method: KeywordMethod,
    window_size: usize,
    pagerank: StandardPageRank,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl KeywordExtractor {
    /// Create an extractor from summarizer settings
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            method: config.keyword_method,
            window_size: config.keyword_window,
            pagerank: StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.convergence_threshold),
        }
    }

    /// Set the weighting method
    pub fn with_method(mut self, method: KeywordMethod) -> Self {
        self.method = method;
        self
    }

    /// Top `k` keywords of a vectorized document
    pub fn extract(
        &self,
        vocabulary: &Vocabulary,
        sentences: &[Sentence],
        vectors: &[SentenceVector],
        k: usize,
    ) -> Vec<Keyword> {
        let weights = match self.method {
            KeywordMethod::TfIdf => tfidf_weights(vocabulary, vectors),
            KeywordMethod::Frequency => frequency_weights(vocabulary, sentences),
            KeywordMethod::TextRank => {
                textrank_weights(vocabulary, sentences, self.window_size, &self.pagerank)
            }
        };
        top_keywords(vocabulary, &weights, k)
    }
}

/// Top `k` terms by aggregate TF-IDF weight
pub fn extract_keywords(
    vocabulary: &Vocabulary,
    vectors: &[SentenceVector],
    k: usize,
) -> Vec<Keyword> {
    top_keywords(vocabulary, &tfidf_weights(vocabulary, vectors), k)
}

/// Sum of each term's TF-IDF weight over all sentences
pub fn tfidf_weights(vocabulary: &Vocabulary, vectors: &[SentenceVector]) -> Vec<f64> {
    let mut weights = vec![0.0; vocabulary.len()];
    for vector in vectors {
        for &(idx, weight) in vector.entries() {
            weights[idx as usize] += weight;
        }
    }
    weights
}

/// Occurrence count of each term
pub fn frequency_weights(vocabulary: &Vocabulary, sentences: &[Sentence]) -> Vec<f64> {
    let mut weights = vec![0.0; vocabulary.len()];
    for token in sentences.iter().flat_map(|s| &s.tokens) {
        if let Some(idx) = vocabulary.index_of(token) {
            weights[idx as usize] += 1.0;
        }
    }
    weights
}

/// PageRank centrality of each term in the word co-occurrence graph
pub fn textrank_weights(
    vocabulary: &Vocabulary,
    sentences: &[Sentence],
    window_size: usize,
    pagerank: &StandardPageRank,
) -> Vec<f64> {
    let builder = GraphBuilder::from_sentences(sentences, window_size);
    let graph = CsrGraph::from_builder(&builder);
    let result = pagerank.run(&graph);

    let mut weights = vec![0.0; vocabulary.len()];
    for (node, label) in graph.labels.iter().enumerate() {
        if let Some(idx) = vocabulary.index_of(label) {
            weights[idx as usize] = result.score(node as u32);
        }
    }
    weights
}

/// Normalize raw weights and keep the best `k` terms
///
/// `weights[i]` belongs to vocabulary index `i`.
pub fn top_keywords(vocabulary: &Vocabulary, weights: &[f64], k: usize) -> Vec<Keyword> {
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 || k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, f64)> = weights
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w > 0.0)
        .map(|(i, &w)| (i, w / max))
        .collect();

    // Vocabulary indices are in lexicographic term order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(k.min(vocabulary.len()));

    ranked
        .into_iter()
        .filter_map(|(i, weight)| {
            vocabulary
                .term(i as u32)
                .map(|term| Keyword::new(term, weight))
        })
        .collect()
}
