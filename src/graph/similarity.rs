//! Sentence similarity graph
//!
//! Nodes are sentence indices and edges carry the cosine similarity of the
//! two sentences' TF-IDF vectors. Each pair `i < j` is computed once. Pairs
//! at or below the threshold get no edge.

use super::builder::GraphBuilder;
use super::csr::CsrGraph;
use crate::summarizer::tfidf::SentenceVector;
use rayon::prelude::*;

/// Undirected sentence graph; node `i` is sentence `i`
pub type SimilarityGraph = CsrGraph;

/// An undirected weighted edge `(i, j, weight)` with `i < j`
pub type Edge = (u32, u32, f64);

/// Compute all edges sequentially, in `(i, j)` order
pub fn pairwise_edges(vectors: &[SentenceVector], threshold: f64) -> Vec<Edge> {
    (0..vectors.len())
        .flat_map(|i| row_edges(vectors, i, threshold))
        .collect()
}

/// Compute all edges on the rayon pool
///
/// Rows are independent; `collect` keeps `(i, j)` order, so the result is
/// identical to [`pairwise_edges`].
pub fn pairwise_edges_parallel(vectors: &[SentenceVector], threshold: f64) -> Vec<Edge> {
    (0..vectors.len())
        .into_par_iter()
        .flat_map_iter(|i| row_edges(vectors, i, threshold))
        .collect()
}

fn row_edges(
    vectors: &[SentenceVector],
    i: usize,
    threshold: f64,
) -> impl Iterator<Item = Edge> + '_ {
    ((i + 1)..vectors.len()).filter_map(move |j| {
        let weight = vectors[i].cosine_similarity(&vectors[j]);
        (weight > threshold).then_some((i as u32, j as u32, weight))
    })
}

/// Build the similarity graph from a set of edges
pub fn graph_from_edges(num_nodes: usize, edges: &[Edge]) -> SimilarityGraph {
    let mut builder = GraphBuilder::with_indexed_nodes(num_nodes);
    for &(i, j, weight) in edges {
        builder.set_edge(i, j, weight);
    }
    CsrGraph::from_builder(&builder)
}

/// Build the similarity graph sequentially
pub fn build_similarity_graph(vectors: &[SentenceVector], threshold: f64) -> SimilarityGraph {
    graph_from_edges(vectors.len(), &pairwise_edges(vectors, threshold))
}

/// Build the similarity graph, using the rayon pool once there are at least
/// `parallel_threshold` sentences
pub fn build_similarity_graph_parallel(
    vectors: &[SentenceVector],
    threshold: f64,
    parallel_threshold: usize,
) -> SimilarityGraph {
    // For small documents, sequential is faster
    if vectors.len() < parallel_threshold {
        return build_similarity_graph(vectors, threshold);
    }
    graph_from_edges(vectors.len(), &pairwise_edges_parallel(vectors, threshold))
}
