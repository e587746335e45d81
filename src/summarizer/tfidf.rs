//! TF-IDF sentence vectors
//!
//! Each sentence becomes a sparse vector over the document vocabulary.
//! Vocabulary indices follow lexicographic term order, so identical input
//! always produces identical indices and weights.

use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// Dense index assignment for every distinct token in a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    /// Terms in index order (sorted)
    terms: Vec<String>,
    /// Maps term -> index
    index: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Build the vocabulary from the union of all sentence tokens
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut terms: Vec<String> = sentences
            .iter()
            .flat_map(|s| s.tokens.iter().cloned())
            .collect();
        terms.sort_unstable();
        terms.dedup();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();

        Self { terms, index }
    }

    /// Index of a term, if present
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    /// Term at an index
    pub fn term(&self, index: u32) -> Option<&str> {
        self.terms.get(index as usize).map(String::as_str)
    }

    /// All terms in index order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Sparse, non-negative TF-IDF vector of one sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceVector {
    /// (vocabulary index, weight), sorted by index, weights > 0
    entries: Vec<(u32, f64)>,
    /// L2 norm
    norm: f64,
}

impl SentenceVector {
    /// Create from entries; they are sorted by index
    pub fn from_entries(mut entries: Vec<(u32, f64)>) -> Self {
        entries.retain(|&(_, w)| w > 0.0);
        entries.sort_by_key(|&(i, _)| i);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    /// Weight for a vocabulary index (0 when absent)
    pub fn weight(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Non-zero entries in index order
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product via a merge over the sorted entries
    pub fn dot(&self, other: &SentenceVector) -> f64 {
        let (mut a, mut b) = (0, 0);
        let mut dot = 0.0;
        while a < self.entries.len() && b < other.entries.len() {
            let (ia, wa) = self.entries[a];
            let (ib, wb) = other.entries[b];
            match ia.cmp(&ib) {
                std::cmp::Ordering::Less => a += 1,
                std::cmp::Ordering::Greater => b += 1,
                std::cmp::Ordering::Equal => {
                    dot += wa * wb;
                    a += 1;
                    b += 1;
                }
            }
        }
        dot
    }

    /// Cosine similarity in [0, 1]; zero-magnitude vectors give 0
    pub fn cosine_similarity(&self, other: &SentenceVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (self.norm * other.norm)).clamp(0.0, 1.0)
    }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
pub fn idf(num_sentences: usize, document_frequency: usize) -> f64 {
    ((1.0 + num_sentences as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// Build the vocabulary and one TF-IDF vector per sentence
pub fn vectorize(sentences: &[Sentence]) -> (Vocabulary, Vec<SentenceVector>) {
    let vocabulary = Vocabulary::from_sentences(sentences);

    // Per-sentence term counts, sorted by vocabulary index
    let counts: Vec<Vec<(u32, usize)>> = sentences
        .iter()
        .map(|sentence| {
            let mut tf: FxHashMap<u32, usize> = FxHashMap::default();
            for token in &sentence.tokens {
                if let Some(idx) = vocabulary.index_of(token) {
                    *tf.entry(idx).or_insert(0) += 1;
                }
            }
            let mut counts: Vec<_> = tf.into_iter().collect();
            counts.sort_by_key(|&(i, _)| i);
            counts
        })
        .collect();

    let mut df = vec![0usize; vocabulary.len()];
    for sentence_counts in &counts {
        for &(idx, _) in sentence_counts {
            df[idx as usize] += 1;
        }
    }

    let n = sentences.len();
    let idf_values: Vec<f64> = df.iter().map(|&d| idf(n, d)).collect();

    let vectors = sentences
        .iter()
        .zip(counts)
        .map(|(sentence, sentence_counts)| {
            let total = sentence.tokens.len();
            if total == 0 {
                return SentenceVector::default();
            }
            let entries = sentence_counts
                .into_iter()
                .map(|(idx, count)| {
                    let tf = count as f64 / total as f64;
                    (idx, tf * idf_values[idx as usize])
                })
                .collect();
            SentenceVector::from_entries(entries)
        })
        .collect();

    (vocabulary, vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, tokens: &[&str]) -> Sentence {
        Sentence::new(
            index,
            tokens.join(" "),
            0,
            0,
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let sentences = vec![
            sentence(0, &["zebra", "apple"]),
            sentence(1, &["mango", "apple"]),
        ];
        let vocab = Vocabulary::from_sentences(&sentences);

        assert_eq!(vocab.terms(), &["apple", "mango", "zebra"]);
        assert_eq!(vocab.index_of("mango"), Some(1));
        assert_eq!(vocab.term(2), Some("zebra"));
        assert_eq!(vocab.index_of("kiwi"), None);
    }

    #[test]
    fn test_idf_smoothing() {
        // Term present in every sentence still has positive weight
        assert!((idf(4, 4) - 1.0).abs() < 1e-12);
        assert!((idf(3, 1) - (2.0f64.ln() + 1.0)).abs() < 1e-12);
        assert!(idf(10, 1) > idf(10, 5));
    }

    #[test]
    fn test_tf_idf_weights() {
        let sentences = vec![
            sentence(0, &["network", "network", "data"]),
            sentence(1, &["network"]),
        ];
        let (vocab, vectors) = vectorize(&sentences);

        let network = vocab.index_of("network").unwrap();
        let data = vocab.index_of("data").unwrap();

        // network: tf 2/3, df 2 -> idf 1
        assert!((vectors[0].weight(network) - 2.0 / 3.0).abs() < 1e-12);
        // data: tf 1/3, df 1 -> idf ln(3/2) + 1
        let expected = (1.0 / 3.0) * ((3.0f64 / 2.0).ln() + 1.0);
        assert!((vectors[0].weight(data) - expected).abs() < 1e-12);
        assert_eq!(vectors[1].weight(data), 0.0);
    }

    #[test]
    fn test_empty_sentence_is_zero_vector() {
        let sentences = vec![sentence(0, &[]), sentence(1, &["word"])];
        let (_, vectors) = vectorize(&sentences);

        assert!(vectors[0].is_zero());
        assert_eq!(vectors[0].norm(), 0.0);
        assert_eq!(vectors[0].cosine_similarity(&vectors[1]), 0.0);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = SentenceVector::from_entries(vec![(0, 1.0), (1, 2.0)]);
        let b = SentenceVector::from_entries(vec![(1, 2.0), (0, 1.0)]);
        let c = SentenceVector::from_entries(vec![(2, 5.0)]);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
        assert_eq!(a.cosine_similarity(&c), 0.0);
        assert_eq!(a.cosine_similarity(&b), b.cosine_similarity(&a));
    }

    #[test]
    fn test_vectorize_is_reproducible() {
        let sentences = vec![
            sentence(0, &["rust", "fast", "safe"]),
            sentence(1, &["rust", "memory"]),
            sentence(2, &["safe", "memory", "memory"]),
        ];

        let (vocab_a, vectors_a) = vectorize(&sentences);
        let (vocab_b, vectors_b) = vectorize(&sentences);

        assert_eq!(vocab_a, vocab_b);
        for (a, b) in vectors_a.iter().zip(&vectors_b) {
            assert_eq!(a.entries().len(), b.entries().len());
            for (x, y) in a.entries().iter().zip(b.entries()) {
                assert_eq!(x.0, y.0);
                assert_eq!(x.1.to_bits(), y.1.to_bits());
            }
        }
    }
}
