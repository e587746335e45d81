//! Standard PageRank algorithm
//!
//! Power iteration in pull form:
//!
//! ```text
//! score'(i) = (1 - d) / n + d * Σ_j w(i, j) * score(j) / W(j)
//! ```
//!
//! where `W(j)` is the weighted degree of `j`. Isolated nodes have no
//! neighbors and keep only the `(1 - d) / n` term; their mass is not
//! redistributed. The loop stops once the L1 change between two iterations
//! drops below the threshold or the iteration cap is hit.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use rayon::prelude::*;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
    /// Update nodes on the rayon pool within each iteration
    pub parallel: bool,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            parallel: false,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable the parallel per-node update
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    /// Sequential and parallel runs produce bit-identical scores: every node
    /// sums its neighbors in the same (sorted) order either way.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= self.threshold {
            iterations += 1;

            let update = |(node, slot): (usize, &mut f64)| {
                let incoming: f64 = graph
                    .neighbors(node as u32)
                    .map(|(neighbor, weight)| {
                        // neighbor has at least this edge, so its total weight is > 0
                        weight * scores[neighbor as usize] / graph.node_total_weight(neighbor)
                    })
                    .sum();
                *slot = teleport + self.damping * incoming;
            };

            if self.parallel {
                new_scores.par_iter_mut().enumerate().for_each(update);
            } else {
                new_scores.iter_mut().enumerate().for_each(update);
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Swap buffers
            std::mem::swap(&mut scores, &mut new_scores);
        }

        PageRankResult::new(scores, iterations, delta, delta < self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, c, 1.0);
        builder.increment_edge(c, a, 1.0);

        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub connected to 3 spokes
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        let s1 = builder.get_or_create_node("s1");
        let s2 = builder.get_or_create_node("s2");
        let s3 = builder.get_or_create_node("s3");

        builder.increment_edge(hub, s1, 1.0);
        builder.increment_edge(hub, s2, 1.0);
        builder.increment_edge(hub, s3, 1.0);

        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let graph = build_triangle_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_connected_scores_sum_to_one() {
        let graph = build_star_graph();
        let result = StandardPageRank::new().run(&graph);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_isolated_node_gets_base_term_only() {
        let mut builder = GraphBuilder::with_indexed_nodes(3);
        builder.set_edge(0, 1, 0.4);
        let graph = CsrGraph::from_builder(&builder);

        let result = StandardPageRank::new().run(&graph);

        let base = 0.15 / 3.0;
        assert!((result.scores[2] - base).abs() < 1e-12);
        // The connected pair converges to base / (1 - d)
        assert!((result.scores[0] - base / 0.15).abs() < 1e-5);
        assert!(result.scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::default();
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_star_graph();
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_parallel_is_bit_identical() {
        let mut builder = GraphBuilder::with_indexed_nodes(30);
        for i in 0..30u32 {
            builder.set_edge(i, (i * 7 + 3) % 30, 0.1 + (i % 4) as f64 * 0.2);
        }
        let graph = CsrGraph::from_builder(&builder);

        let sequential = StandardPageRank::new().run(&graph);
        let parallel = StandardPageRank::new().with_parallel(true).run(&graph);

        assert_eq!(sequential.iterations, parallel.iterations);
        for (a, b) in sequential.scores.iter().zip(&parallel.scores) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
