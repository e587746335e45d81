//! Sentence scoring
//!
//! TextRank runs over the similarity graph unless the graph is degenerate
//! (fewer than two sentences, or no edges at all). Degenerate graphs are
//! scored by each sentence's summed TF-IDF weight instead, scaled so the
//! best sentence gets 1.0.

use super::tfidf::SentenceVector;
use crate::graph::similarity::SimilarityGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{RankStrategy, Strategy, SummarizerConfig};

/// Scores for every sentence plus how they were produced
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutput {
    /// Score per sentence index
    pub scores: Vec<f64>,
    pub strategy: RankStrategy,
    /// PageRank iterations (0 for the frequency strategy)
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the last PageRank iteration (0 for the frequency strategy)
    pub residual: f64,
}

/// The ranking strategy chosen for one document
#[derive(Debug, Clone)]
pub enum SentenceRanker {
    TextRank(StandardPageRank),
    Frequency,
}

impl SentenceRanker {
    /// Pick a strategy from the configuration and the graph shape
    pub fn select(graph: &SimilarityGraph, config: &SummarizerConfig) -> Self {
        if config.strategy == Strategy::Frequency || is_degenerate(graph) {
            return SentenceRanker::Frequency;
        }

        SentenceRanker::TextRank(
            StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.convergence_threshold)
                .with_parallel(graph.num_nodes >= config.parallel_threshold),
        )
    }

    /// The strategy tag for this ranker
    pub fn strategy(&self) -> RankStrategy {
        match self {
            SentenceRanker::TextRank(_) => RankStrategy::TextRank,
            SentenceRanker::Frequency => RankStrategy::Frequency,
        }
    }

    /// Score every sentence
    pub fn rank(&self, graph: &SimilarityGraph, vectors: &[SentenceVector]) -> RankOutput {
        match self {
            SentenceRanker::TextRank(pagerank) => {
                let result = pagerank.run(graph);
                RankOutput {
                    scores: result.scores,
                    strategy: RankStrategy::TextRank,
                    iterations: result.iterations,
                    converged: result.converged,
                    residual: result.delta,
                }
            }
            SentenceRanker::Frequency => RankOutput {
                scores: frequency_scores(vectors),
                strategy: RankStrategy::Frequency,
                iterations: 0,
                converged: true,
                residual: 0.0,
            },
        }
    }
}

/// Whether TextRank has nothing to propagate over
pub fn is_degenerate(graph: &SimilarityGraph) -> bool {
    graph.num_nodes < 2 || graph.is_edgeless()
}

/// Summed TF-IDF weight per sentence, normalized to [0, 1] by the maximum
///
/// All scores are 0 when no sentence has any weight.
pub fn frequency_scores(vectors: &[SentenceVector]) -> Vec<f64> {
    let totals: Vec<f64> = vectors.iter().map(SentenceVector::total_weight).collect();
    let max = totals.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; totals.len()];
    }
    totals.into_iter().map(|t| t / max).collect()
}

/// Select a strategy and score the sentences in one step
pub fn rank_sentences(
    graph: &SimilarityGraph,
    vectors: &[SentenceVector],
    config: &SummarizerConfig,
) -> RankOutput {
    SentenceRanker::select(graph, config).rank(graph, vectors)
}
