//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration.

use super::builder::GraphBuilder;

/// A graph in Compressed Sparse Row format
///
/// Undirected edges are stored once per direction. Neighbor lists are sorted
/// by target ID, so iteration order is stable across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total edge weight for each node (weighted degree)
    pub total_weight: Vec<f64>,
    /// Label for each node
    pub labels: Vec<String>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut labels = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            labels.push(node.label.clone());

            // Collect and sort edges for deterministic iteration
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            labels,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Weight of the edge between two nodes (0 when absent)
    pub fn edge_weight(&self, from: u32, to: u32) -> f64 {
        let start = self.row_ptr[from as usize];
        let end = self.row_ptr[from as usize + 1];
        self.col_idx[start..end]
            .binary_search(&to)
            .map(|pos| self.weights[start + pos])
            .unwrap_or(0.0)
    }

    /// Get the weighted degree of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Whether the graph has no edges at all
    pub fn is_edgeless(&self) -> bool {
        self.col_idx.is_empty()
    }

    /// Find isolated nodes (weighted degree 0)
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] == 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            labels: Vec::new(),
        }
    }
}
