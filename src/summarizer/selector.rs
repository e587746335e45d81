//! Top-N sentence selection for summarization
//!
//! Sentences are ranked by score (ties go to the earlier sentence), the top
//! `count` are kept, and the result is returned in document order. Because
//! the ranking is a strict total order, the selection for `count + 1` always
//! contains the selection for `count`.

use crate::types::Sentence;
use std::cmp::Ordering;

/// Top-N sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SentenceSelector {
    /// Create a selector for `num_sentences` sentences
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Indices of the selected sentences, in document order
    ///
    /// `scores[i]` belongs to sentence `i`; the count is clamped to
    /// `[1, scores.len()]`, and empty input selects nothing.
    pub fn select_indices(&self, scores: &[f64]) -> Vec<usize> {
        if scores.is_empty() {
            return Vec::new();
        }
        let count = self.num_sentences.clamp(1, scores.len());

        let mut selected: Vec<usize> = ranked_indices(scores).into_iter().take(count).collect();
        selected.sort_unstable();
        selected
    }

    /// The selected sentences, in document order
    pub fn select<'s>(&self, sentences: &'s [Sentence], scores: &[f64]) -> Vec<&'s Sentence> {
        let aligned: Vec<f64> = (0..sentences.len())
            .map(|i| scores.get(i).copied().unwrap_or(0.0))
            .collect();

        self.select_indices(&aligned)
            .into_iter()
            .map(|i| &sentences[i])
            .collect()
    }
}

/// Sentence indices ordered by descending score, ties by ascending index
pub fn ranked_indices(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| compare_ranked(scores, a, b));
    order
}

fn compare_ranked(scores: &[f64], a: usize, b: usize) -> Ordering {
    scores[b].total_cmp(&scores[a]).then(a.cmp(&b))
}

/// Select `count` sentences by score and return them in document order
pub fn select_summary(sentences: &[Sentence], scores: &[f64], count: usize) -> Vec<Sentence> {
    SentenceSelector::new(count)
        .select(sentences, scores)
        .into_iter()
        .cloned()
        .collect()
}
